//! Message handlers module
//!
//! Turns one raw console line into a command and routes it

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, warn};

use crate::handlers::commands::{handle_command, ConsoleLine};
use crate::state::AppContext;
use crate::utils::errors::{HoopBuddyError, Result};
use crate::utils::helpers::split_args;

/// Outcome of one console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Reply(String),
    Empty,
    Quit,
}

/// Handle one line of console input
pub fn handle_line(ctx: &mut AppContext, line: &str) -> Result<LineOutcome> {
    let args = split_args(line)?;
    let Some(first) = args.first() else {
        return Ok(LineOutcome::Empty);
    };

    if matches!(first.as_str(), "quit" | "exit") {
        return Ok(LineOutcome::Quit);
    }

    debug!(command = %first, argc = args.len(), "Handling console line");

    let parsed = match ConsoleLine::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(LineOutcome::Reply(e.render().to_string()));
        }
        Err(e) => {
            warn!(command = %first, "Unparsable console line");
            return Err(HoopBuddyError::InvalidInput(e.render().to_string().trim_end().to_string()));
        }
    };

    handle_command(ctx, parsed.command).map(LineOutcome::Reply)
}
