//! One POST per call: encode the args, hit `{prefix}/{version}/{verb}`,
//! decode the body. Every failure on the way is a transport error and there
//! is exactly one attempt.

use super::HttpExtender;
use crate::transport::TransportError;
use crate::types::{ExtenderArgs, FilterResult, ScoreList};
use crate::Result;
use tracing::debug;

impl HttpExtender {
    /// URL for `verb` on this extender.
    pub fn endpoint(&self, verb: &str) -> String {
        format!("{}/{}/{}", self.extender_url, self.api_version, verb)
    }

    pub(super) fn send_filter(&self, args: &ExtenderArgs<'_>) -> Result<FilterResult> {
        let body = self.round_trip(&self.filter_verb, args)?;
        let result = serde_json::from_slice(&body).map_err(TransportError::from)?;
        Ok(result)
    }

    pub(super) fn send_prioritize(&self, args: &ExtenderArgs<'_>) -> Result<ScoreList> {
        let body = self.round_trip(&self.prioritize_verb, args)?;
        let result = ScoreList::from_response(&body).map_err(TransportError::from)?;
        Ok(result)
    }

    fn round_trip(&self, verb: &str, args: &ExtenderArgs<'_>) -> Result<Vec<u8>> {
        let out = serde_json::to_vec(args).map_err(TransportError::from)?;
        let url = self.endpoint(verb);
        debug!(%url, verb, candidates = args.candidates.len(), "sending extender request");
        Ok(self.http.post_json(&url, out)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ExtenderConfig;
    use crate::HttpExtender;

    #[test]
    fn endpoint_joins_prefix_version_and_verb() {
        let cfg = ExtenderConfig {
            url_prefix: "http://ext:8888".into(),
            filter_verb: "filter".into(),
            ..Default::default()
        };
        let ext = HttpExtender::new(&cfg, "v1").unwrap();
        assert_eq!(ext.endpoint("filter"), "http://ext:8888/v1/filter");
    }

    #[test]
    fn endpoint_does_not_normalise_slashes() {
        let cfg = ExtenderConfig {
            url_prefix: "http://ext/".into(),
            ..Default::default()
        };
        let ext = HttpExtender::new(&cfg, "v1beta").unwrap();
        assert_eq!(ext.endpoint("prioritize"), "http://ext//v1beta/prioritize");
    }
}
