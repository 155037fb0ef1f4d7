//! Mail transport seam.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use thiserror::Error;

/// A fully addressed message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The relay refused this recipient.
    #[error("recipient {recipient} rejected: {reason}")]
    Rejected { recipient: String, reason: String },

    /// The relay could not be reached or dropped the connection.
    #[error("relay unavailable: {0}")]
    Unavailable(String),

    /// The transport gave up waiting.
    #[error("delivery timed out")]
    Timeout,
}

/// Delivers one message per call.
///
/// Implementations may block on network I/O and are expected to bound that
/// with their own timeout, surfacing it as [`TransportError::Timeout`].
pub trait MailTransport: Send + Sync {
    fn deliver(&self, message: &MailMessage) -> Result<(), TransportError>;

    /// Short label reported alongside delivery outcomes.
    fn name(&self) -> &'static str {
        "relay"
    }
}

impl<T: MailTransport + ?Sized> MailTransport for Arc<T> {
    fn deliver(&self, message: &MailMessage) -> Result<(), TransportError> {
        (**self).deliver(message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: MailTransport + ?Sized> MailTransport for &T {
    fn deliver(&self, message: &MailMessage) -> Result<(), TransportError> {
        (**self).deliver(message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// In-memory transport: keeps the most recent accepted messages.
///
/// Nothing leaves the process; this is the dev-mode transport and the test
/// double. Only the last `capacity` messages are kept, older ones are evicted.
/// Addresses registered with [`OutboxTransport::reject`] fail with
/// [`TransportError::Rejected`].
#[derive(Debug)]
pub struct OutboxTransport {
    sent: Mutex<VecDeque<MailMessage>>,
    capacity: usize,
    rejected: HashSet<String>,
}

impl Default for OutboxTransport {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl OutboxTransport {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    /// Outbox retaining at most `capacity` messages (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            sent: Mutex::new(VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY))),
            capacity,
            rejected: HashSet::new(),
        }
    }

    pub fn reject(mut self, address: impl Into<String>) -> Self {
        self.rejected.insert(address.into());
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained messages, oldest first.
    pub fn messages(&self) -> Vec<MailMessage> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .cloned()
            .collect()
    }
}

impl MailTransport for OutboxTransport {
    fn deliver(&self, message: &MailMessage) -> Result<(), TransportError> {
        if self.rejected.contains(&message.to) {
            return Err(TransportError::Rejected {
                recipient: message.to.clone(),
                reason: "mailbox unavailable".to_string(),
            });
        }
        let mut sent = self
            .sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if sent.len() == self.capacity {
            sent.pop_front();
        }
        sent.push_back(message.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "outbox"
    }
}
