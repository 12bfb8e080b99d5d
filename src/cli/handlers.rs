// src/cli/handlers.rs
//! Handlers behind each subcommand.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use super::args::RankArgs;
use crate::config::{io, Config, CONFIG_FILE};
use crate::exit::LinkRankExit;
use crate::graph::parse;
use crate::graph::rank::RankEngine;
use crate::reporting;

/// Resolves the effective config: file (explicit or local) overlaid with flags.
///
/// # Errors
/// Returns error if the config file cannot be read or the result is invalid.
pub fn resolve_config(args: &RankArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => io::load_from(path)?,
        None => Config::load()?,
    };
    args.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}

/// Parses the link file, ranks it and prints the report.
///
/// # Errors
/// Returns error on config, input or convergence failures.
pub fn handle_rank(args: &RankArgs) -> Result<LinkRankExit> {
    let config = resolve_config(args)?;
    let graph = parse::parse_file(&args.file)?;
    info!(
        file = %args.file.display(),
        entities = graph.len(),
        edges = graph.edges.len(),
        "ranking"
    );

    let format = config.report.format;
    let report = RankEngine::new(config).rank(&graph)?;
    reporting::print_report(&report, format)?;
    Ok(LinkRankExit::Success)
}

/// Writes a default `linkrank.toml` unless one exists.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn handle_init() -> Result<LinkRankExit> {
    if io::write_default(Path::new(CONFIG_FILE))? {
        println!("{}", format!("Created {CONFIG_FILE}").green());
    } else {
        println!("{}", format!("{CONFIG_FILE} already exists.").yellow());
    }
    Ok(LinkRankExit::Success)
}
