//! Mail configuration.
//!
//! Sender identity is passed explicitly to the composer. Nothing here is read
//! implicitly. Relay connection settings belong to whichever
//! [`crate::MailTransport`] implementation talks to the relay.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid mail configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MailConfig {
    /// Envelope sender for every notice.
    pub from_address: String,
    /// Prepended to every subject line.
    pub subject_prefix: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            from_address: "restock@localhost".to_string(),
            subject_prefix: "[Restock]".to_string(),
        }
    }
}

impl MailConfig {
    pub fn with_from_address(mut self, from: impl Into<String>) -> Self {
        self.from_address = from.into();
        self
    }

    pub fn with_subject_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.subject_prefix = prefix.into();
        self
    }

    /// Read `RESTOCK_MAIL_FROM` and `RESTOCK_MAIL_SUBJECT_PREFIX`, falling
    /// back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`MailConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            from_address: get("RESTOCK_MAIL_FROM")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.from_address),
            subject_prefix: get("RESTOCK_MAIL_SUBJECT_PREFIX").unwrap_or(defaults.subject_prefix),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.from_address.contains('@') {
            return Err(ConfigError::InvalidValue {
                key: "RESTOCK_MAIL_FROM",
                value: self.from_address.clone(),
            });
        }
        if self.from_address.contains(',') {
            return Err(ConfigError::Invalid(
                "from address must be a single mailbox".to_string(),
            ));
        }
        Ok(())
    }
}
