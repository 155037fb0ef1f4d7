use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

/// What happened to one recipient in a send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    pub recipient: String,
    pub status: DeliveryStatus,
    /// Transport's description of the failure; `None` when sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn sent(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            status: DeliveryStatus::Sent,
            error: None,
        }
    }

    pub fn failed(recipient: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            status: DeliveryStatus::Failed,
            error: Some(error.into()),
        }
    }

    pub fn is_sent(&self) -> bool {
        self.status == DeliveryStatus::Sent
    }
}

/// Outcomes of one send request plus counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub outcomes: Vec<DeliveryOutcome>,
    pub sent: usize,
    pub failed: usize,
}

impl DeliveryReport {
    pub fn all_sent(&self) -> bool {
        self.failed == 0
    }
}

impl From<Vec<DeliveryOutcome>> for DeliveryReport {
    fn from(outcomes: Vec<DeliveryOutcome>) -> Self {
        let sent = outcomes.iter().filter(|o| o.is_sent()).count();
        Self {
            failed: outcomes.len() - sent,
            sent,
            outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_outcomes() {
        let report = DeliveryReport::from(vec![
            DeliveryOutcome::sent("a@x.com"),
            DeliveryOutcome::failed("b@x.com", "relay unavailable: refused"),
            DeliveryOutcome::sent("c@x.com"),
        ]);
        assert_eq!(report.sent, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.all_sent());
        assert!(DeliveryReport::default().all_sent());
    }

    #[test]
    fn outcome_serializes_as_plain_record() {
        let json = serde_json::to_value(DeliveryOutcome::failed("b@x.com", "timeout")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "recipient": "b@x.com", "status": "failed", "error": "timeout" })
        );

        let json = serde_json::to_value(DeliveryOutcome::sent("a@x.com")).unwrap();
        assert_eq!(json, serde_json::json!({ "recipient": "a@x.com", "status": "sent" }));
    }
}
