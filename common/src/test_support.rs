//! Fakes shared by the unit tests.

use std::cell::RefCell;

use crate::form::FormState;
use crate::location::{CitiesRequest, CitiesResponse};
use crate::model::{Field, FieldValue};
use crate::submission::{NotifyRequest, SubmissionPayload};
use crate::transport::{CityDirectory, IntakeTransport, NotificationTransport, TransportError};
use crate::validation::PhoneValidity;

pub struct StubPhone(pub bool);

impl PhoneValidity for StubPhone {
    fn is_valid_number(&self) -> bool {
        self.0
    }
}

/// A form with every field filled in with a valid value.
pub fn valid_state() -> FormState {
    let mut state = FormState::new();
    let id = state.instance_id();
    let fields = [
        (Field::FirstName, FieldValue::text("Ravi Kumar")),
        (Field::Phone, FieldValue::text("+919876543210")),
        (Field::Email, FieldValue::text("ravi@example.com")),
        (Field::PropertyLocation, FieldValue::text("Indore")),
        (Field::Profession, FieldValue::text("Salaried")),
        (Field::Terms, FieldValue::Checked(true)),
    ];
    for (field, value) in fields {
        assert!(state.set_value(id, field, value));
    }
    state
}

pub struct FakeIntake {
    fail: bool,
    sent: RefCell<Vec<SubmissionPayload>>,
}

impl FakeIntake {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn payloads(&self) -> Vec<SubmissionPayload> {
        self.sent.borrow().clone()
    }
}

impl IntakeTransport for FakeIntake {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), TransportError> {
        self.sent.borrow_mut().push(payload.clone());
        if self.fail {
            return Err(TransportError::Network("Failed to fetch".into()));
        }
        Ok(())
    }
}

pub struct FakeNotifier {
    fail: bool,
    sent: RefCell<Vec<NotifyRequest>>,
}

impl FakeNotifier {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn recipients(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|r| r.to.clone()).collect()
    }
}

impl NotificationTransport for FakeNotifier {
    async fn notify(&self, request: &NotifyRequest) -> Result<serde_json::Value, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        if self.fail {
            return Err(TransportError::Status(401));
        }
        Ok(serde_json::json!({ "messages": [{ "id": "wamid.test" }] }))
    }
}

pub struct FakeDirectory {
    response: Result<CitiesResponse, TransportError>,
    requests: RefCell<Vec<CitiesRequest>>,
}

impl FakeDirectory {
    pub fn new(response: Result<CitiesResponse, TransportError>) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CitiesRequest> {
        self.requests.borrow().clone()
    }
}

impl CityDirectory for FakeDirectory {
    async fn cities(&self, request: &CitiesRequest) -> Result<CitiesResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.response.clone()
    }
}
