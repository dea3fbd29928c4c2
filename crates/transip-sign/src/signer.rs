//! The request signer: one private key plus configuration.

use std::sync::Arc;

use transip_sign_core::{sign_params, verify_params, PrivateKey, PublicKey};

use crate::config::{Mode, SignerConfig};
use crate::error::Result;
use crate::request::{Nonce, RequestParams};

/// Signs API calls with a fixed private key.
///
/// Cloning is cheap and clones share the key, so one signer can serve
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    key: Arc<PrivateKey>,
    config: SignerConfig,
}

impl RequestSigner {
    /// Create a signer, validating the configuration.
    pub fn new(key: PrivateKey, config: SignerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            key: Arc::new(key),
            config,
        })
    }

    /// Create a signer from a PEM encoded private key.
    pub fn from_pem(pem: &str, config: SignerConfig) -> Result<Self> {
        Self::new(PrivateKey::from_pem(pem)?, config)
    }

    pub fn config(&self) -> &SignerConfig {
        &self.config
    }

    /// The public half of the signing key.
    pub fn public_key(&self) -> PublicKey {
        self.key.public_key()
    }

    /// Sign a prepared request.
    ///
    /// Unset hostname, timestamp, and nonce are filled from the
    /// configuration, the clock, and a fresh nonce.
    pub fn sign(&self, request: &RequestParams) -> Result<SignedRequest> {
        let resolved = request.resolve(&self.config.hostname)?;

        tracing::debug!(
            service = request.service(),
            method = request.method(),
            timestamp = resolved.timestamp,
            "signing api call"
        );

        let signature = sign_params(&self.key, &resolved.pairs)?;

        Ok(SignedRequest {
            params: resolved.pairs,
            timestamp: resolved.timestamp,
            nonce: resolved.nonce,
            signature,
            mode: self.config.mode,
        })
    }

    /// Sign a call with positional arguments, current time and a fresh nonce.
    pub fn sign_call<I, S>(&self, service: &str, method: &str, args: I) -> Result<SignedRequest>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = args
            .into_iter()
            .fold(RequestParams::new(service, method), |req, arg| req.arg(arg));
        self.sign(&request)
    }
}

/// A signed request, holding everything the transport layer attaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    params: Vec<(String, String)>,
    timestamp: u64,
    nonce: Nonce,
    signature: String,
    mode: Mode,
}

impl SignedRequest {
    /// The exact ordered parameters that were signed.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// The percent-encoded signature, ready for a query string.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check the signature against the signed parameters.
    pub fn verify(&self, key: &PublicKey) -> Result<()> {
        verify_params(key, &self.params, &self.signature)?;
        Ok(())
    }
}
