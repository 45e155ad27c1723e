//! Data store service layer
//!
//! Holds the two independent datasets: the host's own listings and the
//! listings the guest browses. Nothing is shared between them.

use crate::database::GatheringRepository;
use crate::database::seed::SeedData;

#[derive(Debug, Clone, Default)]
pub struct DatabaseService {
    pub host_gatherings: GatheringRepository,
    pub guest_gatherings: GatheringRepository,
}

impl DatabaseService {
    pub fn new(seed: SeedData) -> Self {
        Self {
            host_gatherings: GatheringRepository::new(seed.host),
            guest_gatherings: GatheringRepository::new(seed.guest),
        }
    }

    /// Split into the host and guest repositories
    pub fn into_parts(self) -> (GatheringRepository, GatheringRepository) {
        (self.host_gatherings, self.guest_gatherings)
    }
}
