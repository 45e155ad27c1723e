//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the HoopBuddy application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{HoopBuddyError, Result};

/// Initialize logging based on configuration
///
/// Console output goes to stderr; the daily log file gets one JSON object
/// per event. The returned guard flushes the file writer on drop and must be
/// kept alive for the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().json().with_writer(non_blocking))
        .try_init()
        .map_err(|e| HoopBuddyError::Config(format!("Failed to install subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log host-side gathering lifecycle actions
pub fn log_gathering_action(gathering_id: i64, action: &str, host: &str, details: Option<&str>) {
    info!(
        gathering_id = gathering_id,
        action = action,
        host = host,
        details = details,
        "Gathering action performed"
    );
}

/// Log roster changes for a single participant
pub fn log_participant_action(gathering_id: i64, participant_id: i64, action: &str) {
    info!(
        gathering_id = gathering_id,
        participant_id = participant_id,
        action = action,
        "Participant action performed"
    );
}

/// Log guest application actions
pub fn log_guest_action(gathering_id: i64, action: &str, current_participants: u32, details: Option<&str>) {
    info!(
        gathering_id = gathering_id,
        action = action,
        current_participants = current_participants,
        details = details,
        "Guest action performed"
    );
}

/// Log evaluation draft edits and submissions
pub fn log_evaluation(gathering_id: i64, participant_id: Option<i64>, rating: Option<u8>, tag: Option<&str>) {
    debug!(
        gathering_id = gathering_id,
        participant_id = participant_id,
        rating = rating,
        tag = tag,
        "Evaluation updated"
    );
}

/// Log a refused action (an unmet precondition)
pub fn log_refused_action(action: &str, reason: &str) {
    warn!(
        action = action,
        reason = reason,
        "Action refused"
    );
}
