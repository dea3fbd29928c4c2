//! Signer configuration.

use serde::Deserialize;

use crate::error::{Result, SignError};

/// Default API endpoint hostname; part of every signed message.
pub const DEFAULT_HOSTNAME: &str = "api.transip.nl";

/// Access mode requested from the API.
///
/// Travels alongside the signature but is not itself signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    ReadOnly,
    ReadWrite,
}

impl Mode {
    /// Wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::ReadOnly => "readonly",
            Mode::ReadWrite => "readwrite",
        }
    }
}

/// Configuration for the [`RequestSigner`](crate::RequestSigner).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    /// Hostname signed as `__hostname`.
    pub hostname: String,
    /// Requested access mode.
    pub mode: Mode,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            mode: Mode::ReadOnly,
        }
    }
}

impl SignerConfig {
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Reject configurations the API could never accept.
    pub fn validate(&self) -> Result<()> {
        if self.hostname.trim().is_empty() {
            return Err(SignError::InvalidConfig("hostname is empty".into()));
        }
        if self.hostname.contains(char::is_whitespace) {
            return Err(SignError::InvalidConfig(format!(
                "hostname contains whitespace: {:?}",
                self.hostname
            )));
        }
        Ok(())
    }
}
