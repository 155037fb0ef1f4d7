//! `restock-notifications`
//!
//! **Responsibility:** turn a shortage set into replenishment notices and
//! report what happened when they were handed to a mail transport.
//!
//! Mail delivery itself is behind the [`MailTransport`] trait; this crate
//! never opens a network connection.

pub mod compose;
pub mod config;
pub mod delivery;
pub mod recipients;
pub mod transport;

pub use compose::{Notification, NotificationBatch, NotificationComposer};
pub use config::{ConfigError, MailConfig};
pub use delivery::{DeliveryOutcome, DeliveryReport, DeliveryStatus};
pub use recipients::parse_recipients;
pub use transport::{MailMessage, MailTransport, OutboxTransport, TransportError};
