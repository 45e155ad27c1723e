//! Error handling for HoopBuddy
//!
//! This module defines the main error type used throughout the application.
//! Most variants are unmet preconditions of a host or guest action, which the
//! presentation layer shows as a disabled button rather than a failure.

use thiserror::Error;

/// Main error type for HoopBuddy application
#[derive(Error, Debug)]
pub enum HoopBuddyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Gathering not found: {gathering_id}")]
    GatheringNotFound { gathering_id: i64 },

    #[error("Participant {participant_id} not found in gathering {gathering_id}")]
    ParticipantNotFound { gathering_id: i64, participant_id: i64 },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Gathering {gathering_id} is no longer recruiting")]
    RecruitmentClosed { gathering_id: i64 },

    #[error("Gathering {gathering_id} is full")]
    GatheringFull { gathering_id: i64 },

    #[error("Already applied to gathering {gathering_id}")]
    AlreadyApplied { gathering_id: i64 },

    #[error("Participant {participant_id} is not approved")]
    ParticipantNotApproved { participant_id: i64 },

    #[error("Participant {participant_id} is marked as no-show")]
    NoShowLocked { participant_id: i64 },

    #[error("Evaluation incomplete, missing participants: {missing:?}")]
    EvaluationIncomplete { missing: Vec<i64> },

    #[error("Host of gathering {gathering_id} was already rated")]
    AlreadyRated { gathering_id: i64 },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for HoopBuddy operations
pub type Result<T> = std::result::Result<T, HoopBuddyError>;

impl HoopBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            HoopBuddyError::Config(_) => false,
            HoopBuddyError::ConfigLoad(_) => false,
            HoopBuddyError::GatheringNotFound { .. } => true,
            HoopBuddyError::ParticipantNotFound { .. } => true,
            HoopBuddyError::InvalidStateTransition { .. } => true,
            HoopBuddyError::RecruitmentClosed { .. } => true,
            HoopBuddyError::GatheringFull { .. } => true,
            HoopBuddyError::AlreadyApplied { .. } => true,
            HoopBuddyError::ParticipantNotApproved { .. } => true,
            HoopBuddyError::NoShowLocked { .. } => true,
            HoopBuddyError::EvaluationIncomplete { .. } => true,
            HoopBuddyError::AlreadyRated { .. } => true,
            HoopBuddyError::PermissionDenied(_) => true,
            HoopBuddyError::InvalidInput(_) => true,
            HoopBuddyError::Serialization(_) => false,
            HoopBuddyError::TomlParse(_) => false,
            HoopBuddyError::Io(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HoopBuddyError::Config(_) => ErrorSeverity::Critical,
            HoopBuddyError::ConfigLoad(_) => ErrorSeverity::Critical,
            HoopBuddyError::Serialization(_) => ErrorSeverity::Error,
            HoopBuddyError::TomlParse(_) => ErrorSeverity::Error,
            HoopBuddyError::Io(_) => ErrorSeverity::Error,
            HoopBuddyError::PermissionDenied(_) => ErrorSeverity::Warning,
            HoopBuddyError::GatheringNotFound { .. } => ErrorSeverity::Warning,
            HoopBuddyError::ParticipantNotFound { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_errors_are_recoverable_info() {
        let err = HoopBuddyError::GatheringFull { gathering_id: 3 };
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert_eq!(err.to_string(), "Gathering 3 is full");
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = HoopBuddyError::Config("bad".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().to_string(), "CRITICAL");
    }
}
