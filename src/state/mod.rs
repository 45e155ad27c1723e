//! State management module
//!
//! This module handles the session and user context

pub mod context;
pub mod storage;

// Re-export commonly used state components
pub use context::{AppContext, Session};
pub use storage::{ProfileStore, InMemoryProfileStore};
