use std::sync::Arc;

use restock_notifications::{MailConfig, MailTransport, NotificationComposer, OutboxTransport};

/// Everything handlers need, shared behind an `Arc`.
#[derive(Clone)]
pub struct AppServices {
    pub composer: NotificationComposer,
    pub transport: Arc<dyn MailTransport>,
    /// Set when the transport is the in-memory outbox, so it can be inspected.
    pub outbox: Option<Arc<OutboxTransport>>,
}

impl AppServices {
    /// Production wiring around a transport that actually relays mail.
    pub fn new(mail: MailConfig, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            composer: NotificationComposer::new(mail),
            transport,
            outbox: None,
        }
    }

    /// Dev mode: notices are kept in a bounded in-memory outbox and never relayed.
    pub fn with_outbox(mail: MailConfig, outbox: OutboxTransport) -> Self {
        tracing::warn!(
            from = %mail.from_address,
            capacity = outbox.capacity(),
            "dev mode: using in-memory outbox transport; notices are not relayed"
        );
        let outbox = Arc::new(outbox);
        Self {
            composer: NotificationComposer::new(mail),
            transport: outbox.clone(),
            outbox: Some(outbox),
        }
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }
}
