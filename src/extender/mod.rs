//! Scheduler extenders.
//!
//! The scheduler core programs against [`SchedulerExtender`]; [`HttpExtender`]
//! is the implementation that talks to a remote service over HTTP.

mod http;
mod send;

pub use http::{HttpExtender, DEFAULT_EXTENDER_TIMEOUT};

use crate::types::{CandidateList, PlacementRequest, ScoreList};
use crate::Result;

/// An external participant in placement decisions.
///
/// Implementations must be callable from several threads at once; the core
/// may fan out one call per extender.
pub trait SchedulerExtender: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Drop infeasible candidates. The result is expected to be a subset of
    /// `candidates`.
    fn filter(&self, request: &PlacementRequest, candidates: &CandidateList) -> Result<CandidateList>;

    /// Score candidates. Returns the raw scores and the weight the core should
    /// multiply them by before aggregating.
    fn prioritize(
        &self,
        request: &PlacementRequest,
        candidates: &CandidateList,
    ) -> Result<(ScoreList, i64)>;
}
