//! Command handlers module
//!
//! This module contains the console commands and the dispatcher that routes
//! a parsed command to its handler.

pub mod start;
pub mod help;
pub mod host;
pub mod guest;

use clap::{Parser, Subcommand};
use chrono::{NaiveDate, NaiveTime};

use crate::state::AppContext;
use crate::utils::errors::{HoopBuddyError, Result};

/// One console line, parsed with the command name in first position
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct ConsoleLine {
    #[command(subcommand)]
    pub command: Command,
}

/// All available console commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Log in with a display name
    Login { name: String },
    /// Show, select or reset the role (host | guest | reset)
    Role { role: Option<String> },
    /// Show or edit the user profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Show help information
    Help,

    /// Host: post a new gathering
    Create(CreateArgs),
    /// Host: list my gatherings
    Mine,
    /// Show one gathering in detail
    Show { id: i64 },
    /// Host: record an incoming application
    Receive {
        id: i64,
        name: String,
        position: String,
        #[arg(long, default_value_t = 0.0)]
        skill: f32,
    },
    /// Host: approve a participant
    Approve { id: i64, participant: i64 },
    /// Host: reject a participant
    Reject { id: i64, participant: i64 },
    /// Host: stop recruiting
    Close { id: i64 },
    /// Host: rate an approved participant 1-5
    Rate { id: i64, participant: i64, stars: u8 },
    /// Host: toggle the no-show flag of a participant
    Noshow { id: i64, participant: i64 },
    /// Host: tag an approved participant
    Tag { id: i64, participant: i64, tag: String },
    /// Host: list participants still blocking completion
    Gate { id: i64 },
    /// Host: finish the evaluation and complete the gathering
    Complete { id: i64 },

    /// Guest: browse gatherings
    List(ListArgs),
    /// Guest: apply to a gathering
    Apply { id: i64 },
    /// Guest: cancel an application
    Cancel { id: i64 },
    /// Guest: mark an application as confirmed by the host
    Confirm { id: i64 },
    /// Guest: rate the host 1-5
    Review {
        id: i64,
        stars: u8,
        #[arg(long)]
        tag: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ProfileAction {
    /// Show the profile
    Show,
    /// Create or update the profile
    Set {
        #[arg(long)]
        experience: Option<u32>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Open the profile dialog
    Open,
    /// Close the profile dialog
    Close,
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct CreateArgs {
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub start: String,
    #[arg(long)]
    pub end: String,
    #[arg(long, default_value_t = 0)]
    pub guard: u32,
    #[arg(long, default_value_t = 0)]
    pub forward: u32,
    #[arg(long, default_value_t = 0)]
    pub center: u32,
    #[arg(long, default_value = "any")]
    pub gender: String,
    #[arg(long, default_value = "any")]
    pub level: String,
    #[arg(long)]
    pub court: String,
    #[arg(long, default_value = "")]
    pub cost: String,
    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct ListArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub hour: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub sort: Option<String>,
}

/// Main command dispatcher
pub fn handle_command(ctx: &mut AppContext, cmd: Command) -> Result<String> {
    match cmd {
        Command::Login { name } => start::handle_login(ctx, &name),
        Command::Role { role } => start::handle_role(ctx, role.as_deref()),
        Command::Profile { action } => start::handle_profile(ctx, action.unwrap_or(ProfileAction::Show)),
        Command::Help => Ok(help::help_text(ctx)),

        Command::Create(args) => host::handle_create(ctx, args),
        Command::Mine => host::handle_mine(ctx),
        Command::Show { id } => match ctx.session.role {
            Some(crate::models::UserRole::Guest) => guest::handle_show(ctx, id),
            _ => host::handle_show(ctx, id),
        },
        Command::Receive { id, name, position, skill } => host::handle_receive(ctx, id, name, &position, skill),
        Command::Approve { id, participant } => host::handle_approve(ctx, id, participant),
        Command::Reject { id, participant } => host::handle_reject(ctx, id, participant),
        Command::Close { id } => host::handle_close(ctx, id),
        Command::Rate { id, participant, stars } => host::handle_rate(ctx, id, participant, stars),
        Command::Noshow { id, participant } => host::handle_no_show(ctx, id, participant),
        Command::Tag { id, participant, tag } => host::handle_tag(ctx, id, participant, &tag),
        Command::Gate { id } => host::handle_gate(ctx, id),
        Command::Complete { id } => host::handle_complete(ctx, id),

        Command::List(args) => guest::handle_list(ctx, &args),
        Command::Apply { id } => guest::handle_apply(ctx, id),
        Command::Cancel { id } => guest::handle_cancel(ctx, id),
        Command::Confirm { id } => guest::handle_confirm(ctx, id),
        Command::Review { id, stars, tag } => guest::handle_review(ctx, id, stars, tag.as_deref()),
    }
}

/// Parse `YYYY-MM-DD`
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| HoopBuddyError::InvalidInput(format!("Invalid date: {}", value)))
}

/// Parse `HH:MM` or `HH:MM:SS`
pub(crate) fn parse_time(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| HoopBuddyError::InvalidInput(format!("Invalid time: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        ConsoleLine::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse(&["apply", "3"]), Command::Apply { id: 3 });
        assert_eq!(parse(&["rate", "1", "2", "5"]), Command::Rate { id: 1, participant: 2, stars: 5 });
        assert_eq!(parse(&["role"]), Command::Role { role: None });
    }

    #[test]
    fn test_parse_create_defaults() {
        let cmd = parse(&[
            "create", "--location", "강남구", "--date", "2026-10-30",
            "--start", "19:00", "--end", "21:00", "--guard", "2", "--court", "indoor",
        ]);
        match cmd {
            Command::Create(args) => {
                assert_eq!(args.guard, 2);
                assert_eq!(args.center, 0);
                assert_eq!(args.gender, "any");
                assert_eq!(args.message, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(ConsoleLine::try_parse_from(["dunk"]).is_err());
        assert!(ConsoleLine::try_parse_from(["rate", "1", "2", "many"]).is_err());
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("19:00").unwrap(), NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_eq!(parse_time("07:30:00").unwrap(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert!(parse_time("7pm").is_err());
        assert!(parse_date("2026/10/30").is_err());
    }
}
