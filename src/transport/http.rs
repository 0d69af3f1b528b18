use super::{Transport, TransportError};
use crate::{Error, ErrorContext, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Blocking HTTP client bound to a [`Transport`] and a per-request timeout.
///
/// The inner client keeps its own connection pool; cloning is cheap and all
/// methods take `&self`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    transport: Transport,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(transport: Transport, timeout: Duration) -> Result<Self> {
        let mut builder = Client::builder().timeout(timeout);

        if let Transport::Tls(tls) = &transport {
            builder = builder.use_rustls_tls();
            if tls.insecure {
                builder = builder.danger_accept_invalid_certs(true);
            }
            if let Some(ca) = tls.root_certificate()? {
                builder = builder.tls_built_in_root_certs(false).add_root_certificate(ca);
            }
            if let Some(identity) = tls.client_identity()? {
                builder = builder.identity(identity);
            }
        }

        let client = builder.build().map_err(|e| {
            Error::configuration_with_context(
                "failed to create HTTP client",
                ErrorContext::transport().with_details(e.to_string()),
            )
        })?;

        Ok(Self {
            client,
            transport,
            timeout,
        })
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST a JSON body and return the full response body.
    ///
    /// The status code is not interpreted; callers decode whatever came back.
    pub fn post_json(&self, url: &str, body: Vec<u8>) -> std::result::Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        let bytes = response.bytes()?;
        tracing::debug!(url, status = status.as_u16(), len = bytes.len(), "extender responded");
        Ok(bytes.to_vec())
    }
}
