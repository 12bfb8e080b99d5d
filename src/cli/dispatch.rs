//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::Commands;
use super::handlers::{handle_init, handle_rank};
use crate::exit::LinkRankExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<LinkRankExit> {
    match command {
        Commands::Rank(args) => handle_rank(&args),
        Commands::Init => handle_init(),
    }
}
