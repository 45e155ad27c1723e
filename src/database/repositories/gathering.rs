//! Gathering repository implementation
//!
//! An ordered in-memory collection. Newest listings are inserted at the
//! front; `update` runs a mutation on a copy of the record and stores it only
//! when the mutation succeeds.

use tracing::debug;

use crate::models::gathering::{Gathering, CreateGatheringRequest};
use crate::utils::errors::{HoopBuddyError, Result};

#[derive(Debug, Clone, Default)]
pub struct GatheringRepository {
    gatherings: Vec<Gathering>,
}

impl GatheringRepository {
    pub fn new(gatherings: Vec<Gathering>) -> Self {
        Self { gatherings }
    }

    /// Create a new gathering at the front of the list
    pub fn create(&mut self, host_name: String, host_rating: f32, request: CreateGatheringRequest) -> Gathering {
        let gathering = Gathering::new(self.next_id(), host_name, host_rating, request);
        self.gatherings.insert(0, gathering.clone());
        debug!(gathering_id = gathering.id, total = self.gatherings.len(), "Gathering stored");
        gathering
    }

    /// Find gathering by ID
    pub fn find_by_id(&self, id: i64) -> Option<&Gathering> {
        self.gatherings.iter().find(|g| g.id == id)
    }

    /// Find gathering by ID or fail
    pub fn get(&self, id: i64) -> Result<&Gathering> {
        self.find_by_id(id)
            .ok_or(HoopBuddyError::GatheringNotFound { gathering_id: id })
    }

    /// Apply a mutation and commit it only if it succeeds
    pub fn update<T, F>(&mut self, id: i64, mutation: F) -> Result<(Gathering, T)>
    where
        F: FnOnce(&mut Gathering) -> Result<T>,
    {
        let slot = self
            .gatherings
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(HoopBuddyError::GatheringNotFound { gathering_id: id })?;

        let mut draft = slot.clone();
        let outcome = mutation(&mut draft)?;
        *slot = draft.clone();

        Ok((draft, outcome))
    }

    /// All gatherings in stored order
    pub fn list(&self) -> &[Gathering] {
        &self.gatherings
    }

    pub fn count(&self) -> usize {
        self.gatherings.len()
    }

    fn next_id(&self) -> i64 {
        self.gatherings.iter().map(|g| g.id).max().unwrap_or(0) + 1
    }
}
