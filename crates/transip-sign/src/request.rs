//! Request parameters: method arguments plus the signed envelope fields.
//!
//! The signed list is always laid out as:
//!
//! ```text
//! <args...> & __method & __service & __hostname & __timestamp & __nonce
//! ```
//!
//! Positional arguments are keyed by their zero-based index.

use rand::Rng;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::{Result, SignError};

/// Envelope keys.
pub mod keys {
    pub const METHOD: &str = "__method";
    pub const SERVICE: &str = "__service";
    pub const HOSTNAME: &str = "__hostname";
    pub const TIMESTAMP: &str = "__timestamp";
    pub const NONCE: &str = "__nonce";
}

/// A single-use request nonce.
///
/// Generated nonces look like `58f9b98ddd3999.86051758`: eight hex digits
/// of seconds, five hex digits of microseconds, then a random decimal in
/// `[0, 10)` with eight fraction digits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Nonce(String);

impl Nonce {
    /// Generate a nonce from the current time and thread RNG.
    pub fn generate() -> Result<Self> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| SignError::Clock)?;
        Ok(Self::from_parts(now, &mut rand::thread_rng()))
    }

    /// Build a nonce from a time since the epoch and a random source.
    pub fn from_parts<R: Rng + ?Sized>(since_epoch: Duration, rng: &mut R) -> Self {
        let whole: u8 = rng.gen_range(0..10);
        let fraction: u32 = rng.gen_range(0..100_000_000);
        Self(format!(
            "{:08x}{:05x}{}.{:08}",
            since_epoch.as_secs(),
            since_epoch.subsec_micros(),
            whole,
            fraction
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Nonce {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Nonce {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", self.0)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builder for the parameters of one API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    service: String,
    method: String,
    args: Vec<(String, String)>,
    next_index: usize,
    hostname: Option<String>,
    timestamp: Option<u64>,
    nonce: Option<Nonce>,
}

impl RequestParams {
    /// Start a call to `method` on `service`.
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
            args: Vec::new(),
            next_index: 0,
            hostname: None,
            timestamp: None,
            nonce: None,
        }
    }

    /// Append a positional argument, keyed by its index.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push((self.next_index.to_string(), value.into()));
        self.next_index += 1;
        self
    }

    /// Append an argument under an explicit key.
    pub fn named_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((key.into(), value.into()));
        self
    }

    /// Override the hostname from the signer configuration.
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Fix the timestamp (UNIX seconds) instead of using the clock.
    pub fn timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Fix the nonce instead of generating one.
    pub fn nonce(mut self, nonce: impl Into<Nonce>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Fill in whatever the caller left unset.
    pub(crate) fn resolve(&self, default_hostname: &str) -> Result<ResolvedParams> {
        let timestamp = match self.timestamp {
            Some(ts) => ts,
            None => now_secs()?,
        };
        let nonce = match &self.nonce {
            Some(nonce) => nonce.clone(),
            None => Nonce::generate()?,
        };
        let hostname = self
            .hostname
            .clone()
            .unwrap_or_else(|| default_hostname.to_string());

        let mut pairs = Vec::with_capacity(self.args.len() + 5);
        pairs.extend(self.args.iter().cloned());
        pairs.push((keys::METHOD.to_string(), self.method.clone()));
        pairs.push((keys::SERVICE.to_string(), self.service.clone()));
        pairs.push((keys::HOSTNAME.to_string(), hostname));
        pairs.push((keys::TIMESTAMP.to_string(), timestamp.to_string()));
        pairs.push((keys::NONCE.to_string(), nonce.to_string()));

        Ok(ResolvedParams {
            pairs,
            timestamp,
            nonce,
        })
    }
}

/// Parameters with every envelope field fixed, ready to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedParams {
    pub pairs: Vec<(String, String)>,
    pub timestamp: u64,
    pub nonce: Nonce,
}

fn now_secs() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| SignError::Clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_envelope_order() {
        let resolved = RequestParams::new("DomainService", "getDomainNames")
            .timestamp(1492760973)
            .nonce("58f9b98ddd3999.86051758")
            .resolve("api.transip.nl")
            .unwrap();

        assert_eq!(
            resolved.pairs,
            vec![
                pair("__method", "getDomainNames"),
                pair("__service", "DomainService"),
                pair("__hostname", "api.transip.nl"),
                pair("__timestamp", "1492760973"),
                pair("__nonce", "58f9b98ddd3999.86051758"),
            ]
        );
    }

    #[test]
    fn test_args_precede_envelope() {
        let resolved = RequestParams::new("DomainService", "getInfo")
            .arg("example.com")
            .named_arg("extra", "x")
            .arg("second")
            .hostname("api.transip.be")
            .timestamp(1)
            .nonce("n")
            .resolve("api.transip.nl")
            .unwrap();

        assert_eq!(resolved.pairs[0], pair("0", "example.com"));
        assert_eq!(resolved.pairs[1], pair("extra", "x"));
        assert_eq!(resolved.pairs[2], pair("1", "second"));
        assert_eq!(resolved.pairs[3], pair("__method", "getInfo"));
        assert_eq!(resolved.pairs[5], pair("__hostname", "api.transip.be"));
    }

    #[test]
    fn test_unset_fields_are_generated() {
        let resolved = RequestParams::new("DomainService", "getDomainNames")
            .resolve("api.transip.nl")
            .unwrap();

        assert!(resolved.timestamp > 1_492_760_973);
        assert_eq!(resolved.pairs[3].1, resolved.timestamp.to_string());
        assert_eq!(resolved.pairs[4].1, resolved.nonce.as_str());
    }

    #[test]
    fn test_nonce_format() {
        let mut rng = StdRng::seed_from_u64(1);
        let nonce = Nonce::from_parts(Duration::new(1492760973, 906_649_000), &mut rng);
        let (head, fraction) = nonce.as_str().split_once('.').unwrap();

        assert_eq!(head.len(), 14);
        assert!(head.starts_with("58f9b98ddd599"));
        assert_eq!(fraction.len(), 8);
        assert!(fraction.bytes().all(|b| b.is_ascii_digit()));
    }

    proptest! {
        #[test]
        fn test_nonce_shape(secs in 0u64..=0xffff_ffffu64, micros in 0u32..1_000_000, seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let nonce = Nonce::from_parts(Duration::new(secs, micros * 1000), &mut rng);
            let (head, fraction) = nonce.as_str().split_once('.').unwrap();

            prop_assert_eq!(head.len(), 14);
            prop_assert_eq!(&head[..8], format!("{:08x}", secs));
            prop_assert_eq!(u32::from_str_radix(&head[8..13], 16).unwrap(), micros);
            prop_assert_eq!(fraction.len(), 8);
        }
    }

    #[test]
    fn test_nonces_differ() {
        let a = Nonce::generate().unwrap();
        let b = Nonce::generate().unwrap();
        assert_ne!(a, b);
    }
}
