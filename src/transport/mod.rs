//! Network transport for extender exchanges.
//!
//! [`make_transport`] turns the security part of an [`ExtenderConfig`] into a
//! [`Transport`] description; [`HttpTransport`] binds that description and a
//! timeout to a blocking HTTP client.

mod http;
pub mod tls;

pub use http::HttpTransport;
pub use tls::{tls_config_for, TlsSettings};

use crate::config::ExtenderConfig;
use crate::Result;

/// Transport selected for an extender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Default client settings, no TLS customisation.
    Plain,
    /// TLS-enabled client seeded from the resolved settings.
    Tls(TlsSettings),
}

impl Transport {
    pub fn is_tls(&self) -> bool {
        matches!(self, Transport::Tls(_))
    }

    /// Whether server certificates go unverified.
    pub fn insecure_skip_verify(&self) -> bool {
        match self {
            Transport::Tls(tls) => tls.insecure,
            Transport::Plain => false,
        }
    }

    pub fn tls(&self) -> Option<&TlsSettings> {
        match self {
            Transport::Tls(tls) => Some(tls),
            Transport::Plain => None,
        }
    }
}

/// Build the transport for an extender.
///
/// When HTTPS is enabled but neither a CA file nor inline CA data is present,
/// server certificate verification is switched off. Deployments without a CA
/// bundle rely on this; supply CA material to get verified TLS.
pub fn make_transport(config: &ExtenderConfig) -> Result<Transport> {
    let mut tls_cfg = config.tls_config.clone().unwrap_or_default();
    if config.enable_https && !tls_cfg.has_ca() {
        tracing::warn!(
            url_prefix = %config.url_prefix,
            "HTTPS enabled without CA material; server certificates will not be verified"
        );
        tls_cfg.insecure = true;
    }

    Ok(match tls_config_for(&tls_cfg)? {
        Some(tls) => Transport::Tls(tls),
        None => Transport::Plain,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TlsClientConfig;

    fn config(enable_https: bool, tls: Option<TlsClientConfig>) -> ExtenderConfig {
        ExtenderConfig {
            url_prefix: "https://ext:8443".into(),
            enable_https,
            tls_config: tls,
            ..Default::default()
        }
    }

    #[test]
    fn no_tls_and_plain_http_uses_default_transport() {
        let transport = make_transport(&config(false, None)).unwrap();
        assert_eq!(transport, Transport::Plain);
        assert!(!transport.insecure_skip_verify());
    }

    #[test]
    fn https_without_ca_skips_verification() {
        let transport = make_transport(&config(true, None)).unwrap();
        assert!(transport.is_tls());
        assert!(transport.insecure_skip_verify());
    }

    #[test]
    fn https_with_empty_tls_settings_skips_verification() {
        let transport = make_transport(&config(true, Some(TlsClientConfig::default()))).unwrap();
        assert!(transport.insecure_skip_verify());
    }

    #[test]
    fn explicit_insecure_over_plain_http_is_honoured() {
        let tls = TlsClientConfig {
            insecure: true,
            ..Default::default()
        };
        let transport = make_transport(&config(false, Some(tls))).unwrap();
        assert!(transport.insecure_skip_verify());
    }

    #[test]
    fn malformed_ca_fails_without_transport() {
        let tls = TlsClientConfig {
            ca_data: Some("garbage".into()),
            ..Default::default()
        };
        assert!(make_transport(&config(true, Some(tls))).unwrap_err().is_config());
    }
}
