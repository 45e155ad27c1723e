//! Evaluation draft
//!
//! The host's in-progress ratings and tags for a gathering that stopped
//! recruiting. The draft is frozen into the gathering when it completes.

use std::collections::BTreeMap;

use crate::models::review::{validate_star_rating, ParticipantEvaluation, ReviewTag, NO_SHOW_RATING};
use crate::utils::errors::{HoopBuddyError, Result};

/// One participant's row in the draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEntry {
    pub rating: Option<u8>,
    pub tag: Option<ReviewTag>,
    pub no_show: bool,
}

impl DraftEntry {
    /// A no-show needs no tag; everyone else needs both rating and tag
    pub fn is_complete(&self) -> bool {
        self.rating.is_some() && (self.no_show || self.tag.is_some())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvaluationDraft {
    entries: BTreeMap<i64, DraftEntry>,
}

impl EvaluationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, participant_id: i64) -> Option<&DraftEntry> {
        self.entries.get(&participant_id)
    }

    /// Set a 1-5 star rating; refused while the participant is a no-show
    pub fn rate(&mut self, participant_id: i64, rating: u8) -> Result<()> {
        let rating = validate_star_rating(rating)?;
        let entry = self.entries.entry(participant_id).or_default();
        if entry.no_show {
            return Err(HoopBuddyError::NoShowLocked { participant_id });
        }
        entry.rating = Some(rating);
        Ok(())
    }

    pub fn tag(&mut self, participant_id: i64, tag: ReviewTag) {
        self.entries.entry(participant_id).or_default().tag = Some(tag);
    }

    /// Pin the rating to 0 and lock star input
    pub fn mark_no_show(&mut self, participant_id: i64) {
        let entry = self.entries.entry(participant_id).or_default();
        entry.no_show = true;
        entry.rating = Some(NO_SHOW_RATING);
    }

    /// Clear the flag together with the pinned rating
    pub fn unmark_no_show(&mut self, participant_id: i64) {
        if let Some(entry) = self.entries.get_mut(&participant_id) {
            if entry.no_show {
                entry.no_show = false;
                entry.rating = None;
            }
        }
    }

    /// Flip the no-show flag, returning the new state
    pub fn toggle_no_show(&mut self, participant_id: i64) -> bool {
        let marked = self.entry(participant_id).map(|e| e.no_show).unwrap_or(false);
        if marked {
            self.unmark_no_show(participant_id);
        } else {
            self.mark_no_show(participant_id);
        }
        !marked
    }

    /// Participants, out of `required`, that still block completion
    pub fn missing<I>(&self, required: I) -> Vec<i64>
    where
        I: IntoIterator<Item = i64>,
    {
        required
            .into_iter()
            .filter(|id| !self.entries.get(id).map(DraftEntry::is_complete).unwrap_or(false))
            .collect()
    }

    /// Produce the immutable evaluation map for `required` participants
    pub fn freeze(&self, required: &[i64]) -> Result<BTreeMap<i64, ParticipantEvaluation>> {
        let missing = self.missing(required.iter().copied());
        if !missing.is_empty() {
            return Err(HoopBuddyError::EvaluationIncomplete { missing });
        }

        let mut frozen = BTreeMap::new();
        for id in required {
            if let Some(DraftEntry { rating: Some(rating), tag, no_show }) = self.entries.get(id) {
                frozen.insert(*id, ParticipantEvaluation {
                    rating: *rating,
                    tag: *tag,
                    no_show: *no_show,
                });
            }
        }
        Ok(frozen)
    }
}
