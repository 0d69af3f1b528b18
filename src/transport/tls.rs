//! TLS material resolution.
//!
//! Turns a [`TlsClientConfig`] into [`TlsSettings`]: file paths are read,
//! inline data takes precedence, and every PEM block is checked against the
//! TLS backend before a client is ever built.

use crate::config::TlsClientConfig;
use crate::{Error, ErrorContext, Result};

const PEM_CERT_MARKER: &str = "-----BEGIN CERTIFICATE-----";

/// Resolved TLS configuration for the extender transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsSettings {
    /// Skip server certificate verification.
    pub insecure: bool,
    /// PEM bundle that replaces the built-in root store.
    pub root_ca: Option<Vec<u8>>,
    /// Client certificate chain followed by its private key, PEM encoded.
    pub identity: Option<Vec<u8>>,
}

impl TlsSettings {
    pub(crate) fn root_certificate(&self) -> Result<Option<reqwest::Certificate>> {
        self.root_ca
            .as_deref()
            .map(|pem| {
                reqwest::Certificate::from_pem(pem).map_err(|e| {
                    Error::configuration_with_context(
                        "unable to load root certificates",
                        ErrorContext::tls("tlsConfig.caData").with_details(e.to_string()),
                    )
                })
            })
            .transpose()
    }

    pub(crate) fn client_identity(&self) -> Result<Option<reqwest::Identity>> {
        self.identity
            .as_deref()
            .map(|pem| {
                reqwest::Identity::from_pem(pem).map_err(|e| {
                    Error::configuration_with_context(
                        "invalid client certificate/key pair",
                        ErrorContext::tls("tlsConfig.certData").with_details(e.to_string()),
                    )
                })
            })
            .transpose()
    }
}

/// Resolve TLS settings. Returns `Ok(None)` when the configuration carries no
/// CA material, no client certificate and no insecure flag: the plain
/// transport should be used in that case.
pub fn tls_config_for(cfg: &TlsClientConfig) -> Result<Option<TlsSettings>> {
    if !cfg.has_ca() && !cfg.has_cert_auth() && !cfg.has_key() && !cfg.insecure {
        return Ok(None);
    }
    if cfg.has_ca() && cfg.insecure {
        return Err(Error::configuration_with_context(
            "specifying a root certificates file with the insecure flag is not allowed",
            ErrorContext::tls("tlsConfig.insecure"),
        ));
    }

    let root_ca = data_from_slice_or_file(&cfg.ca_data, &cfg.ca_file, "tlsConfig.caFile")?;
    if let Some(pem) = &root_ca {
        if !contains_certificate(pem) {
            return Err(Error::configuration_with_context(
                "unable to load root certificates",
                ErrorContext::tls("tlsConfig.caData").with_details("no PEM certificate block found"),
            ));
        }
    }

    let cert = data_from_slice_or_file(&cfg.cert_data, &cfg.cert_file, "tlsConfig.certFile")?;
    let key = data_from_slice_or_file(&cfg.key_data, &cfg.key_file, "tlsConfig.keyFile")?;
    let identity = match (cert, key) {
        (Some(mut cert), Some(key)) => {
            cert.push(b'\n');
            cert.extend_from_slice(&key);
            Some(cert)
        }
        (Some(_), None) => {
            return Err(Error::configuration_with_context(
                "client certificate provided without a private key",
                ErrorContext::tls("tlsConfig.keyFile"),
            ))
        }
        (None, Some(_)) => {
            return Err(Error::configuration_with_context(
                "private key provided without a client certificate",
                ErrorContext::tls("tlsConfig.certFile"),
            ))
        }
        (None, None) => None,
    };

    let settings = TlsSettings {
        insecure: cfg.insecure,
        root_ca,
        identity,
    };
    // Parse eagerly so a bad bundle fails here rather than on first use.
    settings.root_certificate()?;
    settings.client_identity()?;
    Ok(Some(settings))
}

fn data_from_slice_or_file(
    data: &Option<String>,
    file: &Option<String>,
    field: &str,
) -> Result<Option<Vec<u8>>> {
    if let Some(data) = data.as_deref().filter(|d| !d.is_empty()) {
        return Ok(Some(data.as_bytes().to_vec()));
    }
    match file.as_deref().filter(|f| !f.is_empty()) {
        Some(path) => std::fs::read(path).map(Some).map_err(|e| {
            Error::configuration_with_context(
                format!("unable to read {}", path),
                ErrorContext::tls(field).with_details(e.to_string()),
            )
        }),
        None => Ok(None),
    }
}

fn contains_certificate(pem: &[u8]) -> bool {
    String::from_utf8_lossy(pem).contains(PEM_CERT_MARKER)
}
