//! corridor — end-to-end demo for the nav lookahead router.
//!
//! Builds a small synthetic network, routes across it at the configured
//! lookahead depth, and prints each route's node list, encoded polyline,
//! and a JSON summary.
//!
//! Environment overrides:
//!
//! | Variable          | Default |
//! |-------------------|---------|
//! | `LOOKAHEAD_DEPTH` | 2       |
//! | `HEAP_ARITY`      | 4       |
//! | `RUST_LOG`        | `info`  |

mod network;

use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_core::NodeId;
use nav_polyline::build_polyline;
use nav_search::{LookaheadSearch, PathResult, SearchConfig, SearchStats};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_LOOKAHEAD_DEPTH: u32   = 2;
const DEFAULT_HEAP_ARITY:      usize = 4;

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Summary<'a> {
    from:     &'a str,
    to:       &'a str,
    found:    bool,
    nodes:    Vec<NodeId>,
    cost:     Option<f64>,
    polyline: String,
    stats:    SearchStats,
    reason:   Option<String>,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().with_context(|| format!("parsing {key}={raw:?}")),
        Err(_) => Ok(default),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== corridor — nav lookahead router ===");

    // 1. Build road network.
    let (network, nodes) = build_network();
    let [west_end, market, old_town, harbor, east_gate, island] = nodes;
    println!(
        "Road network: {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );

    // 2. Search config.
    let config = SearchConfig::new(
        env_or("LOOKAHEAD_DEPTH", DEFAULT_LOOKAHEAD_DEPTH)?,
        env_or("HEAP_ARITY", DEFAULT_HEAP_ARITY)?,
    );
    info!(config = %serde_json::to_string(&config)?, "search configured");
    let search = LookaheadSearch::new(config)?;

    // 3. Route a few trips.
    let trips = [
        ("west_end", west_end, "east_gate", east_gate),
        ("harbor",   harbor,   "old_town",  old_town),
        ("old_town", old_town, "harbor",    harbor),
        ("market",   market,   "island",    island),
    ];

    for (from_name, from, to_name, to) in trips {
        let t0 = Instant::now();
        let result = search.find_path(&network, from, to)?;
        let elapsed = t0.elapsed();

        let stats = result.stats();
        let summary = match result {
            PathResult::Found(route) => Summary {
                from: from_name,
                to: to_name,
                found: true,
                polyline: build_polyline(&network, &route.nodes)?,
                cost: Some(route.cost),
                nodes: route.nodes,
                stats,
                reason: None,
            },
            PathResult::NotFound { reason, .. } => Summary {
                from: from_name,
                to: to_name,
                found: false,
                nodes: Vec::new(),
                cost: None,
                polyline: String::new(),
                stats,
                reason: Some(reason),
            },
        };

        println!();
        println!("{from_name} → {to_name} ({:.3} ms)", elapsed.as_secs_f64() * 1e3);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
