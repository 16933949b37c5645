//! # Notification Forwarding
//!
//! Handler for `POST /api/notify`.
//!
//! ## Workflow:
//!
//! 1.  **Recipient check**: the `to` field must be a non-empty string of
//!     digits (country code included, no `+`). Anything else is rejected with
//!     `400 Bad Request` before the messaging API is contacted.
//!
//! 2.  **Message assembly**: a `NotificationRequest` template message is built
//!     from the configured template name and language code.
//!
//! 3.  **Forwarding**: the message is posted to the messaging API with the
//!     configured bearer token. The upstream status and JSON body are passed
//!     back unchanged; an empty body is passed back as no content. Transport
//!     failures and non-JSON bodies become `502 Bad Gateway`.

use crate::config::RelayConfig;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use lead_common::submission::{NotificationRequest, NotifyRequest};
use log::{error, info};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("recipient must be a non-empty string of digits")]
    InvalidRecipient,

    #[error("messaging API unreachable: {0}")]
    Upstream(reqwest::Error),

    #[error("messaging API answered with an unreadable body: {0}")]
    UpstreamBody(String),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidRecipient => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) | RelayError::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Shared relay state: one HTTP client and the template settings.
pub struct NotifyRelay {
    client: reqwest::Client,
    api_url: String,
    access_token: String,
    template_name: String,
    template_language: String,
}

impl NotifyRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.notify_api_url.clone(),
            access_token: config.access_token.clone(),
            template_name: config.template_name.clone(),
            template_language: config.template_language.clone(),
        }
    }

    /// Sends the template message to `request.to` and returns the upstream
    /// status and body.
    pub async fn forward(&self, request: &NotifyRequest) -> Result<(StatusCode, Value), RelayError> {
        let to = request.to.trim();
        if to.is_empty() || !to.chars().all(|c| c.is_ascii_digit()) {
            return Err(RelayError::InvalidRecipient);
        }

        let message =
            NotificationRequest::template(to, &self.template_name, &self.template_language);
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.access_token)
            .json(&message)
            .send()
            .await
            .map_err(RelayError::Upstream)?;

        let status =
            StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::UpstreamBody(e.to_string()))?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| RelayError::UpstreamBody(e.to_string()))?
        };

        info!("Notification to {} answered with {}", mask_recipient(to), status);
        Ok((status, body))
    }
}

/// Hides all but the last four digits of a recipient number.
fn mask_recipient(to: &str) -> String {
    let keep = to.len().saturating_sub(4);
    to.chars()
        .enumerate()
        .map(|(i, c)| if i < keep { '*' } else { c })
        .collect()
}

/// The Actix web handler for `POST /api/notify`.
pub async fn process(
    relay: web::Data<NotifyRelay>,
    request: web::Json<NotifyRequest>,
) -> Result<HttpResponse, RelayError> {
    match relay.forward(&request).await {
        Ok((status, Value::Null)) => Ok(HttpResponse::build(status).finish()),
        Ok((status, body)) => Ok(HttpResponse::build(status).json(body)),
        Err(e) => {
            error!("Notification relay failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notify::configure_routes;
    use actix_web::{test, App};
    use mockito::Matcher;

    fn relay_for(api_url: String) -> NotifyRelay {
        let config = RelayConfig::from_lookup(|key| match key {
            "NOTIFY_API_URL" => Some(api_url.clone()),
            "NOTIFY_ACCESS_TOKEN" => Some("test-token".to_string()),
            _ => None,
        })
        .unwrap();
        NotifyRelay::new(&config)
    }

    #[actix_web::test]
    async fn test_forwards_template_message_with_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/messages")
            .match_header("authorization", "Bearer test-token")
            .match_body(Matcher::Json(json!({
                "to": "919876543210",
                "recipient_type": "individual",
                "type": "template",
                "template": {
                    "language": { "policy": "deterministic", "code": "en" },
                    "name": "reminder_tempate_lic",
                    "components": []
                }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"messages":[{"id":"wamid.1"}]}"#)
            .create_async()
            .await;

        let relay = web::Data::new(relay_for(format!("{}/messages", server.url())));
        let app = test::init_service(App::new().app_data(relay).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/notify")
            .set_json(json!({ "to": "919876543210" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "messages": [{ "id": "wamid.1" }] }));
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_upstream_error_status_is_passed_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/messages")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"invalid token"}"#)
            .create_async()
            .await;

        let relay = relay_for(format!("{}/messages", server.url()));
        let (status, body) = relay
            .forward(&NotifyRequest {
                to: "919876543210".into(),
            })
            .await
            .unwrap();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid token");
    }

    #[actix_web::test]
    async fn test_rejects_non_digit_recipient_without_calling_upstream() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/messages")
            .expect(0)
            .create_async()
            .await;

        let relay = web::Data::new(relay_for(format!("{}/messages", server.url())));
        let app = test::init_service(App::new().app_data(relay).service(configure_routes())).await;

        for to in ["", "+919876543210", "98765 43210"] {
            let req = test::TestRequest::post()
                .uri("/api/notify")
                .set_json(json!({ "to": to }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "recipient {to:?}");
        }
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let relay = web::Data::new(relay_for("http://127.0.0.1:1/messages".to_string()));
        let app = test::init_service(App::new().app_data(relay).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/notify")
            .set_json(json!({ "to": "919876543210" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_empty_upstream_reply_is_no_content() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/messages")
            .with_status(204)
            .create_async()
            .await;

        let relay = web::Data::new(relay_for(format!("{}/messages", server.url())));
        let app = test::init_service(App::new().app_data(relay).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/notify")
            .set_json(json!({ "to": "919876543210" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[::core::prelude::v1::test]
    fn test_mask_recipient_keeps_last_four_digits() {
        assert_eq!(mask_recipient("919876543210"), "********3210");
        assert_eq!(mask_recipient("123"), "123");
        assert_eq!(mask_recipient(""), "");
    }

    #[actix_web::test]
    async fn test_non_json_upstream_body_is_bad_gateway() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/messages")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let relay = relay_for(format!("{}/messages", server.url()));
        let result = relay
            .forward(&NotifyRequest {
                to: "919876543210".into(),
            })
            .await;

        assert!(matches!(result, Err(RelayError::UpstreamBody(_))));
    }
}
