//! Data store module
//!
//! This module holds the in-memory gathering collections and the seed loader
//! that provisions them

pub mod repositories;
pub mod seed;
pub mod service;

// Re-export commonly used data store components
pub use repositories::GatheringRepository;
pub use seed::{SeedData, SeedFormat, load_seed, load_seed_file};
pub use service::DatabaseService;
