//! Replenishment notice composition and delivery.

use core::fmt::Write as _;

use serde::Serialize;

use restock_inventory::ReorderAssessment;

use crate::config::MailConfig;
use crate::delivery::DeliveryOutcome;
use crate::recipients::parse_recipients;
use crate::transport::{MailMessage, MailTransport};

/// One notice addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub recipient: String,
    pub body: String,
}

/// Notices produced for one send request, in recipient order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationBatch {
    pub subject: String,
    pub notifications: Vec<Notification>,
}

impl NotificationBatch {
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn recipients(&self) -> impl Iterator<Item = &str> {
        self.notifications.iter().map(|n| n.recipient.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationComposer {
    config: MailConfig,
}

impl NotificationComposer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MailConfig {
        &self.config
    }

    /// Build one notice per parsed recipient.
    ///
    /// Assessments that do not need replenishment are ignored. With nothing
    /// left to report the batch is empty and no body is rendered.
    pub fn compose(&self, shortage: &[ReorderAssessment], recipients_raw: &str) -> NotificationBatch {
        let shortage: Vec<&ReorderAssessment> =
            shortage.iter().filter(|a| a.needs_replenishment()).collect();

        if shortage.is_empty() {
            return NotificationBatch::default();
        }

        let (subject, body) = match shortage.as_slice() {
            [single] => (
                format!("{} {} is below its reorder point", self.config.subject_prefix, single.name()),
                single_notice(single),
            ),
            many => (
                format!(
                    "{} {} locations are below their reorder point",
                    self.config.subject_prefix,
                    many.len()
                ),
                aggregated_notice(many),
            ),
        };

        let notifications = parse_recipients(recipients_raw)
            .into_iter()
            .map(|recipient| Notification {
                recipient,
                body: body.clone(),
            })
            .collect();

        NotificationBatch {
            subject,
            notifications,
        }
    }

    /// Attempt delivery of every notice, once each, in batch order.
    ///
    /// A failure for one recipient is recorded and the loop moves on; this
    /// never returns an error.
    pub fn send<T>(&self, batch: &NotificationBatch, transport: &T) -> Vec<DeliveryOutcome>
    where
        T: MailTransport + ?Sized,
    {
        let outcomes: Vec<DeliveryOutcome> = batch
            .notifications
            .iter()
            .map(|n| {
                let message = MailMessage {
                    from: self.config.from_address.clone(),
                    to: n.recipient.clone(),
                    subject: batch.subject.clone(),
                    body: n.body.clone(),
                };
                match transport.deliver(&message) {
                    Ok(()) => {
                        tracing::info!(recipient = %n.recipient, "replenishment notice sent");
                        DeliveryOutcome::sent(&n.recipient)
                    }
                    Err(e) => {
                        tracing::warn!(recipient = %n.recipient, error = %e, "replenishment notice failed");
                        DeliveryOutcome::failed(&n.recipient, e.to_string())
                    }
                }
            })
            .collect();

        tracing::debug!(
            attempted = outcomes.len(),
            failed = outcomes.iter().filter(|o| !o.is_sent()).count(),
            "notification batch delivered"
        );

        outcomes
    }
}

fn single_notice(a: &ReorderAssessment) -> String {
    format!(
        "Stock at {name} has fallen below its reorder point.\n\
         \n\
         Current stock: {stock} units\n\
         Reorder point: {rp} units\n\
         \n\
         Please arrange replenishment.\n",
        name = a.name(),
        stock = a.current_stock(),
        rp = a.reorder_point(),
    )
}

fn aggregated_notice(shortage: &[&ReorderAssessment]) -> String {
    let mut body = format!(
        "{} locations have fallen below their reorder point.\n\n",
        shortage.len()
    );
    for a in shortage {
        // Writing to a String cannot fail.
        let _ = writeln!(
            body,
            "- {}: current stock {}, reorder point {}, shortfall {}",
            a.name(),
            a.current_stock(),
            a.reorder_point(),
            a.shortfall()
        );
    }
    body.push_str("\nPlease arrange replenishment.\n");
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::DeliveryStatus;
    use crate::transport::{OutboxTransport, TransportError};
    use restock_core::LocationName;
    use restock_inventory::{LocationRecord, StockParameters, evaluate, shortage_of};

    fn assessments(rows: &[(&str, i64)]) -> Vec<ReorderAssessment> {
        let records: Vec<LocationRecord> = rows
            .iter()
            .map(|(n, s)| LocationRecord::new(LocationName::new(n).unwrap(), *s))
            .collect();
        evaluate(&records, &StockParameters::new(50, 30, 5).unwrap())
    }

    fn composer() -> NotificationComposer {
        NotificationComposer::new(MailConfig::default().with_from_address("stock@example.com"))
    }

    #[test]
    fn recipients_are_trimmed_and_deduplicated() {
        let shortage = shortage_of(&assessments(&[("A", 500), ("B", 150), ("C", 500)]));
        let batch = composer().compose(&shortage, " a@x.com, b@x.com ,a@x.com,");

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.recipients().collect::<Vec<_>>(), vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn empty_shortage_yields_empty_batch() {
        let batch = composer().compose(&[], "a@x.com,b@x.com");
        assert!(batch.is_empty());
        assert!(batch.subject.is_empty());
    }

    #[test]
    fn sufficient_locations_never_reach_a_batch() {
        let all = assessments(&[("A", 500), ("C", 900)]);
        assert!(composer().compose(&all, "a@x.com").is_empty());
    }

    #[test]
    fn single_shortage_cites_location_stock_and_reorder_point() {
        let shortage = shortage_of(&assessments(&[("A", 500), ("Osaka", 150)]));
        let batch = composer().compose(&shortage, "a@x.com");

        assert_eq!(batch.subject, "[Restock] Osaka is below its reorder point");
        let body = &batch.notifications[0].body;
        assert!(body.contains("Stock at Osaka"));
        assert!(body.contains("Current stock: 150 units"));
        assert!(body.contains("Reorder point: 280 units"));
    }

    #[test]
    fn multiple_shortages_share_one_aggregated_body() {
        let shortage = shortage_of(&assessments(&[("A", 100), ("B", 900), ("C", 200)]));
        let batch = composer().compose(&shortage, "a@x.com, b@x.com");

        assert_eq!(batch.subject, "[Restock] 2 locations are below their reorder point");
        let body = &batch.notifications[0].body;
        assert_eq!(body, &batch.notifications[1].body);

        let a = body.find("- A: current stock 100, reorder point 280, shortfall 180").unwrap();
        let c = body.find("- C: current stock 200, reorder point 280, shortfall 80").unwrap();
        assert!(a < c);
        assert!(!body.contains("- B:"));
    }

    #[test]
    fn send_reports_each_recipient_and_continues_after_failure() {
        let shortage = shortage_of(&assessments(&[("B", 150)]));
        let batch = composer().compose(&shortage, "a@x.com,b@x.com,c@x.com");
        let outbox = OutboxTransport::new().reject("b@x.com");

        let outcomes = composer().send(&batch, &outbox);

        let statuses: Vec<DeliveryStatus> = outcomes.iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            vec![DeliveryStatus::Sent, DeliveryStatus::Failed, DeliveryStatus::Sent]
        );
        assert_eq!(
            outcomes[1].error.as_deref(),
            Some("recipient b@x.com rejected: mailbox unavailable")
        );

        let delivered = outbox.messages();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].from, "stock@example.com");
        assert_eq!(delivered[0].subject, batch.subject);
        assert_eq!(delivered[1].to, "c@x.com");
    }

    struct DownRelay;

    impl MailTransport for DownRelay {
        fn deliver(&self, _message: &MailMessage) -> Result<(), TransportError> {
            Err(TransportError::Timeout)
        }
    }

    #[test]
    fn all_failed_is_a_valid_result() {
        let shortage = shortage_of(&assessments(&[("B", 150)]));
        let batch = composer().compose(&shortage, "a@x.com,b@x.com");

        let outcomes = composer().send(&batch, &DownRelay);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.error.as_deref() == Some("delivery timed out")));
    }

    #[test]
    fn sending_an_empty_batch_does_nothing() {
        let outbox = OutboxTransport::new();
        assert!(composer().send(&NotificationBatch::default(), &outbox).is_empty());
        assert!(outbox.messages().is_empty());
    }
}
