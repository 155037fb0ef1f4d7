//! Process configuration for the HTTP server.

use std::net::SocketAddr;

use thiserror::Error;

use restock_notifications::{ConfigError as MailConfigError, MailConfig, OutboxTransport};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid RESTOCK_API_ADDR {0:?}")]
    ListenAddr(String),

    #[error("invalid RESTOCK_OUTBOX_CAPACITY {0:?}")]
    OutboxCapacity(String),

    #[error(transparent)]
    Mail(#[from] MailConfigError),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub listen_addr: SocketAddr,
    pub mail: MailConfig,
    /// Messages retained by the in-memory outbox before the oldest are evicted.
    pub outbox_capacity: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            mail: MailConfig::default(),
            outbox_capacity: OutboxTransport::DEFAULT_CAPACITY,
        }
    }
}

impl ApiConfig {
    /// `RESTOCK_API_ADDR` (default `0.0.0.0:8080`), `RESTOCK_OUTBOX_CAPACITY`
    /// (default 256) plus the `RESTOCK_MAIL_*` set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("RESTOCK_API_ADDR") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|_| ConfigError::ListenAddr(raw))?,
            None => {
                tracing::debug!("RESTOCK_API_ADDR not set; using default");
                defaults.listen_addr
            }
        };

        let outbox_capacity = match lookup("RESTOCK_OUTBOX_CAPACITY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::OutboxCapacity(raw)),
            },
            None => defaults.outbox_capacity,
        };

        Ok(Self {
            listen_addr,
            mail: MailConfig::from_lookup(&lookup)?,
            outbox_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn outbox_capacity_defaults_to_the_transport_default() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.outbox_capacity, OutboxTransport::DEFAULT_CAPACITY);
        assert_eq!(config.listen_addr.port(), 8080);
    }

    #[test]
    fn outbox_capacity_must_be_positive() {
        let config = ApiConfig::from_lookup(lookup(&[("RESTOCK_OUTBOX_CAPACITY", " 16 ")])).unwrap();
        assert_eq!(config.outbox_capacity, 16);

        for bad in ["0", "-3", "many"] {
            let err = ApiConfig::from_lookup(lookup(&[("RESTOCK_OUTBOX_CAPACITY", bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::OutboxCapacity(_)));
        }
    }
}
