use super::SchedulerExtender;
use crate::config::ExtenderConfig;
use crate::transport::{make_transport, HttpTransport, Transport};
use crate::types::{CandidateList, ExtenderArgs, PlacementRequest, ScoreList};
use crate::{Error, Result};
use std::time::Duration;
use tracing::info;

/// Timeout used when the configuration leaves `httpTimeout` at zero.
pub const DEFAULT_EXTENDER_TIMEOUT: Duration = Duration::from_secs(5);

/// Extender reached over HTTP.
///
/// Built once from an [`ExtenderConfig`] and never mutated afterwards, so a
/// single instance (or an `Arc` of it) can serve every scheduling cycle from
/// any number of threads.
#[derive(Debug, Clone)]
pub struct HttpExtender {
    pub(super) extender_url: String,
    pub(super) api_version: String,
    pub(super) filter_verb: String,
    pub(super) prioritize_verb: String,
    weight: i64,
    pub(super) http: HttpTransport,
}

impl HttpExtender {
    /// Build the client. Performs no network I/O.
    pub fn new(config: &ExtenderConfig, api_version: &str) -> Result<Self> {
        let timeout = if config.http_timeout.is_zero() {
            DEFAULT_EXTENDER_TIMEOUT
        } else {
            config.http_timeout
        };

        let transport = make_transport(config)?;
        let http = HttpTransport::new(transport, timeout)?;

        info!(
            url_prefix = %config.url_prefix,
            api_version,
            filter_verb = %config.filter_verb,
            prioritize_verb = %config.prioritize_verb,
            weight = config.weight,
            timeout_ms = timeout.as_millis() as u64,
            tls = http.transport().is_tls(),
            "extender configured"
        );

        Ok(Self {
            extender_url: config.url_prefix.clone(),
            api_version: api_version.to_string(),
            filter_verb: config.filter_verb.clone(),
            prioritize_verb: config.prioritize_verb.clone(),
            weight: config.weight,
            http,
        })
    }

    pub fn url_prefix(&self) -> &str {
        &self.extender_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn filter_verb(&self) -> &str {
        &self.filter_verb
    }

    pub fn prioritize_verb(&self) -> &str {
        &self.prioritize_verb
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Effective per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }

    pub fn transport(&self) -> &Transport {
        self.http.transport()
    }

    /// Filter based on extender-implemented predicates.
    ///
    /// With no filter verb configured the candidates come back unchanged and
    /// nothing is sent. The extender is trusted to return a subset of the
    /// input; that is not checked here.
    pub fn filter(
        &self,
        request: &PlacementRequest,
        candidates: &CandidateList,
    ) -> Result<CandidateList> {
        if self.filter_verb.is_empty() {
            return Ok(candidates.clone());
        }

        let args = ExtenderArgs {
            request,
            candidates,
        };
        let result = self.send_filter(&args)?;
        if !result.error.is_empty() {
            return Err(Error::Extender(result.error));
        }
        Ok(result.candidates)
    }

    /// Prioritize based on extender-implemented priority functions.
    ///
    /// Returns the scores together with the configured weight; the scheduler
    /// core multiplies and aggregates. With no prioritize verb every candidate
    /// scores zero at weight zero and nothing is sent.
    pub fn prioritize(
        &self,
        request: &PlacementRequest,
        candidates: &CandidateList,
    ) -> Result<(ScoreList, i64)> {
        if self.prioritize_verb.is_empty() {
            return Ok((ScoreList::zeroed(candidates), 0));
        }

        let args = ExtenderArgs {
            request,
            candidates,
        };
        let scores = self.send_prioritize(&args)?;
        Ok((scores, self.weight))
    }
}

impl SchedulerExtender for HttpExtender {
    fn name(&self) -> &str {
        &self.extender_url
    }

    fn filter(&self, request: &PlacementRequest, candidates: &CandidateList) -> Result<CandidateList> {
        HttpExtender::filter(self, request, candidates)
    }

    fn prioritize(
        &self,
        request: &PlacementRequest,
        candidates: &CandidateList,
    ) -> Result<(ScoreList, i64)> {
        HttpExtender::prioritize(self, request, candidates)
    }
}
