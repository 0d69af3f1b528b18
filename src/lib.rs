//! # sched-extender
//!
//! Client side of the scheduler extender protocol: lets a scheduler hand part
//! of its placement decision to independently deployed HTTP services.
//!
//! ## Overview
//!
//! An extender takes part in two synchronous exchanges:
//!
//! - **filter**: given a workload and its candidate targets, return the
//!   feasible subset, or reject the request with an error message;
//! - **prioritize**: score each candidate; the scheduler multiplies the
//!   scores by the extender's weight and aggregates them with its own.
//!
//! Each exchange is a single JSON `POST` to `{urlPrefix}/{apiVersion}/{verb}`.
//! There are no retries: a failed call is reported to the caller as-is.
//! Leaving a verb empty turns that exchange into a local no-op.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sched_extender::{Candidate, CandidateList, ExtenderConfig, HttpExtender, PlacementRequest};
//!
//! fn main() -> sched_extender::Result<()> {
//!     let config = ExtenderConfig {
//!         url_prefix: "http://ext:8888".into(),
//!         filter_verb: "filter".into(),
//!         prioritize_verb: "prioritize".into(),
//!         weight: 2,
//!         ..Default::default()
//!     };
//!     let extender = HttpExtender::new(&config, "v1")?;
//!
//!     let request = PlacementRequest::new(serde_json::json!({"name": "web-0"}));
//!     let nodes: CandidateList = ["A", "B", "C"].into_iter().map(Candidate::new).collect();
//!
//!     let feasible = extender.filter(&request, &nodes)?;
//!     let (scores, weight) = extender.prioritize(&request, &feasible)?;
//!     println!("{} feasible, {} scores at weight {}", feasible.len(), scores.len(), weight);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Extender and TLS configuration |
//! | [`transport`] | TLS resolution and the blocking HTTP transport |
//! | [`extender`] | The [`SchedulerExtender`] trait and [`HttpExtender`] |
//! | [`types`] | Wire types: requests, candidates, filter results, scores |

pub mod config;
pub mod extender;
pub mod transport;
pub mod types;

pub use config::{ExtenderConfig, TlsClientConfig};
pub use extender::{HttpExtender, SchedulerExtender, DEFAULT_EXTENDER_TIMEOUT};
pub use transport::{Transport, TransportError};
pub use types::{Candidate, CandidateList, FilterResult, PlacementRequest, ScoreEntry, ScoreList};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
