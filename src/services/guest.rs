//! Guest service implementation
//!
//! This service owns the guest's copy of the listings and handles browsing,
//! applying, cancelling, the confirmation hook and the one-time host review.

use chrono::Utc;
use tracing::debug;

use crate::config::settings::Settings;
use crate::database::repositories::GatheringRepository;
use crate::models::gathering::Gathering;
use crate::models::review::{validate_star_rating, HostReview, ReviewTag};
use crate::services::listing::{filter_and_sort, ListingQuery};
use crate::utils::errors::Result;
use crate::utils::logging;

/// Guest service for browsing and joining gatherings
#[derive(Debug, Clone)]
pub struct GuestService {
    repository: GatheringRepository,
    settings: Settings,
}

impl GuestService {
    /// Create a new GuestService instance
    pub fn new(repository: GatheringRepository, settings: Settings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Filtered and sorted view; the stored collection is untouched
    pub fn list(&self, query: &ListingQuery) -> Vec<&Gathering> {
        debug!(query = ?query, "Listing gatherings");
        filter_and_sort(self.repository.list(), query)
    }

    /// All gatherings in stored order
    pub fn gatherings(&self) -> &[Gathering] {
        self.repository.list()
    }

    pub fn get_gathering(&self, gathering_id: i64) -> Result<&Gathering> {
        self.repository.get(gathering_id)
    }

    /// Whether the apply action is disabled because every slot is taken
    pub fn is_full(&self, gathering_id: i64) -> Result<bool> {
        Ok(self.repository.get(gathering_id)?.is_full())
    }

    /// `none → applied`, taking a slot
    pub fn apply(&mut self, gathering_id: i64) -> Result<Gathering> {
        let result = self.repository.update(gathering_id, Gathering::apply);
        let (gathering, _) = result.inspect_err(|e| logging::log_refused_action("apply", &e.to_string()))?;

        logging::log_guest_action(gathering_id, "apply", gathering.current_participants, None);
        Ok(gathering)
    }

    /// `applied → none`
    ///
    /// The slot is only given back when `gatherings.decrement_on_cancel` is set.
    pub fn cancel(&mut self, gathering_id: i64) -> Result<Gathering> {
        let give_back_slot = self.settings.gatherings.decrement_on_cancel;
        let (gathering, _) = self
            .repository
            .update(gathering_id, |gathering| gathering.cancel_application(give_back_slot))?;

        let details = if give_back_slot { "slot released" } else { "slot kept" };
        logging::log_guest_action(gathering_id, "cancel", gathering.current_participants, Some(details));
        Ok(gathering)
    }

    /// `applied → confirmed`, called when the host's approval reaches the guest
    pub fn confirm(&mut self, gathering_id: i64) -> Result<Gathering> {
        let (gathering, _) = self.repository.update(gathering_id, Gathering::confirm_application)?;

        logging::log_guest_action(gathering_id, "confirm", gathering.current_participants, None);
        Ok(gathering)
    }

    /// Rate the host once, 1-5 stars with an optional tag
    pub fn rate_host(&mut self, gathering_id: i64, rating: u8, tag: Option<ReviewTag>) -> Result<Gathering> {
        let rating = validate_star_rating(rating)?;
        let review = HostReview {
            rating,
            tag,
            reviewed_at: Utc::now(),
        };

        let (gathering, _) = self
            .repository
            .update(gathering_id, |gathering| gathering.record_host_review(review))?;

        let details = format!("rating={} tag={}", rating, tag.map(|t| t.label()).unwrap_or("-"));
        logging::log_guest_action(gathering_id, "rate_host", gathering.current_participants, Some(&details));
        Ok(gathering)
    }
}
