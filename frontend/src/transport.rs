//! `gloo-net` implementations of the form's network seams.

use gloo_net::http::{Request, Response};
use lead_common::location::{CitiesRequest, CitiesResponse};
use lead_common::submission::{NotifyRequest, SubmissionPayload};
use lead_common::transport::{CityDirectory, IntakeTransport, NotificationTransport, TransportError};
use web_sys::{FormData, RequestMode};

fn transport_error(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::SerdeError(e) => TransportError::Decode(e.to_string()),
        other => TransportError::Network(other.to_string()),
    }
}

fn js_error(err: wasm_bindgen::JsValue) -> TransportError {
    TransportError::Network(format!("{:?}", err))
}

fn ensure_ok(response: Response) -> Result<Response, TransportError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(TransportError::Status(response.status()))
    }
}

/// Posts the lead as multipart form data in `no-cors` mode.
///
/// The response is opaque in that mode, so a completed request counts as
/// delivered and only transport failures are reported.
#[derive(Clone, Debug)]
pub struct FormIntake {
    pub url: String,
}

impl IntakeTransport for FormIntake {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), TransportError> {
        let data = FormData::new().map_err(js_error)?;
        for (name, value) in payload.form_fields() {
            data.append_with_str(name, &value).map_err(js_error)?;
        }

        Request::post(&self.url)
            .mode(RequestMode::NoCors)
            .body(data)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        Ok(())
    }
}

/// Asks the relay to send the follow-up message to the applicant.
#[derive(Clone, Debug)]
pub struct NotifyRelay {
    pub url: String,
}

impl NotificationTransport for NotifyRelay {
    async fn notify(&self, request: &NotifyRequest) -> Result<serde_json::Value, TransportError> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        let text = ensure_ok(response)?.text().await.map_err(transport_error)?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Geography service returning `{ data: [city, ...] }`.
#[derive(Clone, Debug)]
pub struct CitiesApi {
    pub url: String,
}

impl CityDirectory for CitiesApi {
    async fn cities(&self, request: &CitiesRequest) -> Result<CitiesResponse, TransportError> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        ensure_ok(response)?
            .json::<CitiesResponse>()
            .await
            .map_err(transport_error)
    }
}
