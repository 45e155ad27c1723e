//! HoopBuddy pickup basketball organizer
//!
//! A console application for organizing pickup basketball games. Hosts post
//! gatherings, manage the roster and evaluate participants after the game;
//! guests browse, filter and apply to gatherings and rate the host.

#![allow(non_snake_case)]

pub mod config;
pub mod utils;
#[macro_use]
pub mod models;
pub mod database;
pub mod services;
pub mod state;
pub mod handlers;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{HoopBuddyError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;
pub use state::AppContext;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
