//! Extender configuration structures
//!
//! These are plain data handed to [`crate::HttpExtender::new`]. Field names
//! follow the camelCase policy-file form so an external loader can decode
//! them straight from JSON.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Static configuration for one extender, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtenderConfig {
    /// Base URL of the extender service, e.g. `http://ext:8888`.
    pub url_prefix: String,
    /// Verb for the filter exchange. Empty disables filtering.
    #[serde(default)]
    pub filter_verb: String,
    /// Verb for the prioritize exchange. Empty disables scoring.
    #[serde(default)]
    pub prioritize_verb: String,
    /// Multiplier the scheduler core applies to this extender's scores.
    #[serde(default)]
    pub weight: i64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub enable_https: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsClientConfig>,
    /// Per-request timeout, milliseconds on the wire. Zero means the default.
    #[serde(default, with = "duration_ms")]
    pub http_timeout: Duration,
}

/// TLS client settings: CA material, client identity and the insecure flag.
///
/// `*_data` fields hold inline PEM and take precedence over the matching
/// `*_file` path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_data: Option<String>,
    /// Skip server certificate verification.
    #[serde(default, skip_serializing_if = "is_false")]
    pub insecure: bool,
}

impl TlsClientConfig {
    pub fn has_ca(&self) -> bool {
        non_empty(&self.ca_file) || non_empty(&self.ca_data)
    }

    pub fn has_cert_auth(&self) -> bool {
        non_empty(&self.cert_file) || non_empty(&self.cert_data)
    }

    pub fn has_key(&self) -> bool {
        non_empty(&self.key_file) || non_empty(&self.key_data)
    }
}

fn non_empty(v: &Option<String>) -> bool {
    v.as_deref().map(|s| !s.is_empty()).unwrap_or(false)
}

fn is_false(b: &bool) -> bool {
    !*b
}

mod duration_ms {
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(d.as_millis())
            .map_err(|_| S::Error::custom("httpTimeout does not fit in u64 milliseconds"))?;
        s.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
