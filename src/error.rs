use crate::transport::TransportError;
use thiserror::Error;

/// Where a configuration error came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Offending key in its camelCase config form, e.g. `tlsConfig.caFile`.
    pub field_path: Option<String>,
    /// Message from the parser or I/O call underneath.
    pub details: Option<String>,
    /// Raising component: `tls` or `transport`.
    pub source: Option<String>,
}

impl ErrorContext {
    /// Context for a TLS setting identified by its config key.
    pub fn tls(field: impl Into<String>) -> Self {
        Self {
            field_path: Some(field.into()),
            source: Some("tls".to_string()),
            ..Self::default()
        }
    }

    /// Context for a failure while assembling the HTTP client.
    pub fn transport() -> Self {
        Self {
            source: Some("transport".to_string()),
            ..Self::default()
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Unified error type for the extender client.
///
/// Nothing here is recovered locally: every variant is handed back to the
/// scheduler core, which decides whether to drop this extender's contribution
/// for the cycle or abort placement.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed TLS/security configuration, raised while building the client.
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// Any failure of the request/response exchange, including timeouts.
    #[error("Extender transport error: {0}")]
    Transport(#[from] TransportError),

    /// The extender rejected the request through the `error` field of a
    /// filter result. Displays exactly the extender's message.
    #[error("{0}")]
    Extender(String),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a configuration error without context.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::default())
    }

    /// Create a configuration error with structured context.
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_extender(&self) -> bool {
        matches!(self, Error::Extender(_))
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
