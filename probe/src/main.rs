//! Ledger view probe
//!
//! Loads a scenario, builds the simulated ledger and oracle fixtures from
//! it, runs the scenario's queries through the view and prints one JSON
//! object per query on stdout.
//!
//! ```text
//! ledgerview-probe [SCENARIO]
//! ledgerview-probe --init-config [PATH]
//! ```

mod config;
mod scenario;

use anyhow::{Context, Result};
use config::Config;
use ledgerview_core::{MarkToMarketMargin, ViewError};
use scenario::{run_queries, Answer, Query, Scenario};
use serde::Serialize;
use std::path::PathBuf;

/// One output record
#[derive(Serialize)]
struct Line<'q> {
    query: &'q Query,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let first = args.next();

    if first.as_deref() == Some("--init-config") {
        let path = args.next().unwrap_or_else(Config::path);
        return Config::write_default(&path);
    }

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({}), using default local config", e);
        Config::default_local()
    });

    let scenario_path = first.map(PathBuf::from).unwrap_or_else(|| config.scenario_path());
    log::info!("Loading scenario {}", scenario_path.display());

    let scenario = Scenario::load(&scenario_path)?;
    let (ledger, oracle) = scenario.build()?;
    let margin = MarkToMarketMargin::new(&ledger, &oracle);

    let mut failed = 0usize;
    run_queries(&ledger, &oracle, &margin, &scenario.queries, |query, outcome| {
        let is_err = outcome.is_err();
        print_line(&config, query, outcome)?;
        if is_err {
            failed += 1;
            if config.stop_on_error {
                anyhow::bail!("Query failed, stopping: {:?}", query);
            }
        }
        Ok(())
    })?;

    log::info!(
        "Ran {} queries ({} failed, {} oracle calls)",
        scenario.queries.len(),
        failed,
        oracle.call_count()
    );
    Ok(())
}

fn print_line(config: &Config, query: &Query, outcome: Result<Answer, ViewError>) -> Result<()> {
    let line = match outcome {
        Ok(answer) => Line {
            query,
            result: Some(answer),
            error: None,
        },
        Err(e) => {
            log::error!("Query {:?} failed: {}", query, e);
            Line {
                query,
                result: None,
                error: Some(e.to_string()),
            }
        }
    };

    let text = if config.pretty {
        serde_json::to_string_pretty(&line)
    } else {
        serde_json::to_string(&line)
    }
    .context("Failed to serialize query result")?;

    println!("{}", text);
    Ok(())
}
