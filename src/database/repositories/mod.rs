//! Repositories module
//!
//! This module contains all repository implementations for data access

pub mod gathering;

// Re-export repositories
pub use gathering::GatheringRepository;
