//! extender-probe — run one filter + prioritize cycle against an extender.
//!
//! Usage:
//!   extender-probe <config.json> <node> [<node> ...]
//!
//! The config file holds an `ExtenderConfig` in its JSON form. Each `<node>`
//! becomes a bare candidate. The placement request comes from the
//! `EXTENDER_PROBE_REQUEST` env var (JSON) or defaults to `{}`.

use anyhow::{bail, Context};
use sched_extender::{Candidate, CandidateList, ExtenderConfig, HttpExtender, PlacementRequest};

const API_VERSION: &str = "v1";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: extender-probe <config.json> <node> [<node> ...]");
        std::process::exit(1);
    }

    let raw = std::fs::read_to_string(&args[1])
        .with_context(|| format!("reading {}", args[1]))?;
    let config: ExtenderConfig =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", args[1]))?;

    let request = match std::env::var("EXTENDER_PROBE_REQUEST") {
        Ok(json) => PlacementRequest::new(
            serde_json::from_str(&json).context("parsing EXTENDER_PROBE_REQUEST")?,
        ),
        Err(_) => PlacementRequest::new(serde_json::json!({})),
    };
    let nodes: CandidateList = args[2..].iter().map(Candidate::new).collect();

    let extender = HttpExtender::new(&config, API_VERSION)?;

    let feasible = extender.filter(&request, &nodes)?;
    println!("filter: {:?}", feasible.ids());
    if feasible.is_empty() {
        bail!("extender left no feasible candidates");
    }

    let (scores, weight) = extender.prioritize(&request, &feasible)?;
    println!("prioritize (weight {}):", weight);
    for entry in scores.iter() {
        println!("  {:<24} {:>6} -> {}", entry.target_id, entry.score, weighted(entry.score, weight));
    }
    Ok(())
}

/// Score as the scheduler core would count it, clamped at the `i64` bounds.
fn weighted(score: i64, weight: i64) -> i64 {
    score.saturating_mul(weight)
}
