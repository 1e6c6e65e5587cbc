use gloo_net::http::Request;
use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// Contact details captured by the first booking step.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartialLead {
    pub student_name: String,
    pub whatsapp_number: String,
}

/// Everything the booking form collects.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FullLead {
    pub student_name: String,
    pub whatsapp_number: String,
    pub grade: String,
    pub subject: String,
    pub place: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("failed to encode lead: {0}")]
    Serialize(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("lead endpoint answered with status {status}")]
    Rejected { status: u16 },
    #[error("submission was cancelled")]
    Cancelled,
}

impl LeadError {
    /// Text shown in the booking form when the final submission fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            LeadError::Network(_) => {
                "We couldn't reach our team. Please check your connection and try again."
            }
            LeadError::Rejected { .. } | LeadError::Serialize(_) => {
                "Something went wrong while booking. Please try again."
            }
            LeadError::Cancelled => "The booking was interrupted. Please try again.",
        }
    }
}

/// Body posted to the lead endpoint. The `kind` tag lets one endpoint take both.
#[derive(Serialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Envelope<'a> {
    Partial(&'a PartialLead),
    Full(&'a FullLead),
}

impl Envelope<'_> {
    fn to_json(&self) -> Result<String, LeadError> {
        serde_json::to_string(self).map_err(|e| LeadError::Serialize(e.to_string()))
    }
}

async fn post(endpoint: &str, envelope: &Envelope<'_>) -> Result<(), LeadError> {
    let request = Request::post(endpoint)
        .json(envelope)
        .map_err(|e| LeadError::Serialize(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| LeadError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(LeadError::Rejected {
            status: response.status(),
        })
    }
}

/// Sends the step-one contact details.
pub async fn send_partial(lead: PartialLead) -> Result<(), LeadError> {
    let envelope = Envelope::Partial(&lead);
    info!("Partial lead captured: {}", envelope.to_json()?);

    match config::lead_endpoint() {
        Some(endpoint) => post(endpoint, &envelope).await,
        None => Ok(()),
    }
}

/// Sends the complete booking. Without an endpoint this only waits out the
/// simulated latency and reports success.
pub async fn send_full(lead: FullLead) -> Result<(), LeadError> {
    let envelope = Envelope::Full(&lead);
    info!("Full lead submitted: {}", envelope.to_json()?);

    match config::lead_endpoint() {
        Some(endpoint) => post(endpoint, &envelope).await,
        None => {
            gloo_timers::future::TimeoutFuture::new(config::SIMULATED_LATENCY_MS).await;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn full_lead() -> FullLead {
        FullLead {
            student_name: "Ali".to_string(),
            whatsapp_number: "+971501234567".to_string(),
            grade: "Grade 5".to_string(),
            subject: "Mathematics".to_string(),
            place: "Dubai".to_string(),
        }
    }

    #[test]
    fn partial_envelope_uses_camel_case_and_kind_tag() {
        let lead = PartialLead {
            student_name: "Ali".to_string(),
            whatsapp_number: "+971501234567".to_string(),
        };
        let body: serde_json::Value =
            serde_json::from_str(&Envelope::Partial(&lead).to_json().unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "kind": "partial",
                "studentName": "Ali",
                "whatsappNumber": "+971501234567"
            })
        );
    }

    #[test]
    fn full_envelope_carries_all_five_fields() {
        let lead = full_lead();
        let body: serde_json::Value =
            serde_json::from_str(&Envelope::Full(&lead).to_json().unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "kind": "full",
                "studentName": "Ali",
                "whatsappNumber": "+971501234567",
                "grade": "Grade 5",
                "subject": "Mathematics",
                "place": "Dubai"
            })
        );
    }

    #[test]
    fn errors_render_for_logs_and_users() {
        let rejected = LeadError::Rejected { status: 503 };
        assert_eq!(rejected.to_string(), "lead endpoint answered with status 503");
        assert!(rejected.user_message().contains("try again"));

        let offline = LeadError::Network("offline".to_string());
        assert_eq!(offline.to_string(), "request failed: offline");
        assert!(offline.user_message().contains("connection"));
    }
}
