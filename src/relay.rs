//! Contact-form delivery through the transactional-email relay.
//!
//! The relay (EmailJS) exposes one REST endpoint; a submission is a
//! single POST carrying the account identifiers from [`RelayConfig`]
//! and exactly three template fields. There is no retry and no queue;
//! a failed submission is surfaced to the user, who resubmits by hand.
//!
//! [`SubmissionState`] is the whole lifecycle the form needs: one
//! writer (the submit handler), one reader (the view). The error enum
//! is richer than the UI needs. The view collapses everything into
//! "failed" and a static message; the distinction exists for the
//! console log.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::RelayConfig;
use crate::sanitize;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("could not build relay request: {0}")]
    Request(String),
    #[error("network failure reaching relay: {0}")]
    Network(String),
    #[error("relay rejected submission: HTTP {0}")]
    Status(u16),
}

/// Submission lifecycle for the contact form.
///
/// `Idle` is re-entered only implicitly, by starting a fresh attempt;
/// `Succeeded` and `Failed` stay on screen until then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// True while a round trip is outstanding; the submit control is
    /// disabled and re-entry is refused for exactly this window.
    pub fn in_flight(self) -> bool {
        self == SubmissionState::Submitting
    }
}

/// The three fields the relay's email template understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl TemplateParams {
    /// Build the outgoing fields from raw form values, neutralizing
    /// markup in each one. Raw values never leave the page.
    pub fn sanitized(name: &str, email: &str, message: &str) -> TemplateParams {
        TemplateParams {
            user_name: sanitize::neutralize(name),
            user_email: sanitize::neutralize(email),
            message: sanitize::neutralize(message),
        }
    }
}

/// Request body for the relay's send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Client for the email relay. Cheap to clone into a submit handler.
#[derive(Debug, Clone)]
pub struct EmailRelay {
    config: RelayConfig,
}

impl EmailRelay {
    pub fn new(config: RelayConfig) -> EmailRelay {
        EmailRelay { config }
    }

    /// Send one submission: a single round trip, no retry.
    ///
    /// Any failure (request construction, the network, a non-2xx
    /// status) comes back as [`RelayError`] for the caller to fold
    /// into [`SubmissionState::Failed`].
    pub async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        let body = serde_json::to_string(&SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        })
        .map_err(|err| RelayError::Request(err.to_string()))?;

        let headers = Headers::new().map_err(|err| RelayError::Request(describe(&err)))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|err| RelayError::Request(describe(&err)))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.config.endpoint, &init)
            .map_err(|err| RelayError::Request(describe(&err)))?;

        let window =
            web_sys::window().ok_or_else(|| RelayError::Network("no window".into()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| RelayError::Network(describe(&err)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| RelayError::Network("fetch yielded a non-Response".into()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(RelayError::Status(response.status()))
        }
    }
}

/// Best-effort text for an opaque JS error value.
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn sanitized_params_neutralize_markup() {
        let params = TemplateParams::sanitized("Jane", "jane@example.com", "<b>hi</b>");
        assert_eq!(params.user_name, "Jane");
        assert_eq!(params.user_email, "jane@example.com");
        assert_eq!(params.message, "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn send_request_matches_relay_wire_shape() {
        let params = TemplateParams::sanitized("Jane", "jane@example.com", "hello");
        let body = SendRequest {
            service_id: "service_test",
            template_id: "template_test",
            user_id: "key_test",
            template_params: &params,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "key_test",
                "template_params": {
                    "user_name": "Jane",
                    "user_email": "jane@example.com",
                    "message": "hello",
                },
            })
        );
    }

    #[test]
    fn submission_state_defaults_to_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn only_submitting_counts_as_in_flight() {
        assert!(SubmissionState::Submitting.in_flight());
        assert!(!SubmissionState::Idle.in_flight());
        assert!(!SubmissionState::Succeeded.in_flight());
        assert!(!SubmissionState::Failed.in_flight());
    }

    #[test]
    fn error_messages_name_the_boundary() {
        assert_eq!(
            RelayError::Status(422).to_string(),
            "relay rejected submission: HTTP 422"
        );
        assert!(RelayError::Network("timed out".into()).to_string().contains("network"));
    }
}
