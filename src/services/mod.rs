//! Services module
//!
//! This module contains business logic services

pub mod evaluation;
pub mod guest;
pub mod host;
pub mod listing;

// Re-export commonly used services
pub use evaluation::{EvaluationDraft, DraftEntry};
pub use guest::GuestService;
pub use host::HostService;
pub use listing::{ListingQuery, ListingParams, SortKey, filter_and_sort};

use crate::config::settings::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub host_service: HostService,
    pub guest_service: GuestService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory over the two seeded datasets
    pub fn new(database: DatabaseService, settings: Settings) -> Self {
        let (host_gatherings, guest_gatherings) = database.into_parts();

        Self {
            host_service: HostService::new(host_gatherings, settings.clone()),
            guest_service: GuestService::new(guest_gatherings, settings),
        }
    }

    /// Summary counts for the startup log
    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            host_gatherings: self.host_service.gatherings().len(),
            guest_gatherings: self.guest_service.gatherings().len(),
        }
    }
}

/// Dataset sizes per role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStats {
    pub host_gatherings: usize,
    pub guest_gatherings: usize,
}
