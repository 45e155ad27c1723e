//! Console handlers module
//!
//! This module contains the console handlers organized by type:
//! - Command handlers for each console command
//! - Message handlers that parse a raw input line
//! - Rendering of gatherings as plain text

pub mod commands;
pub mod messages;
pub mod render;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command, ConsoleLine};
pub use messages::{handle_line, LineOutcome};
