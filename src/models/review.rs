//! Rating and tag models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

labeled_enum! {
    /// Fixed vocabulary of qualitative feedback tags
    pub enum ReviewTag {
        GoodManners => ("good_manners", "#매너 좋음"),
        Communication => ("communication", "#소통"),
        Skilled => ("skilled", "#실력자"),
        Punctual => ("punctual", "#시간 약속"),
        Teamwork => ("teamwork", "#팀워크"),
        Friendly => ("friendly", "#친절"),
    }
}

/// Lowest star rating a person can be given; 0 is reserved for a no-show
pub const MIN_STAR_RATING: u8 = 1;
pub const MAX_STAR_RATING: u8 = 5;
pub const NO_SHOW_RATING: u8 = 0;

/// Frozen host evaluation of one approved participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantEvaluation {
    pub rating: u8,
    pub tag: Option<ReviewTag>,
    #[serde(default)]
    pub no_show: bool,
}

/// A guest's one-time rating of the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostReview {
    pub rating: u8,
    pub tag: Option<ReviewTag>,
    pub reviewed_at: DateTime<Utc>,
}

/// Check that a star rating is within 1..=5
pub fn validate_star_rating(rating: u8) -> crate::utils::errors::Result<u8> {
    if (MIN_STAR_RATING..=MAX_STAR_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(crate::utils::errors::HoopBuddyError::InvalidInput(format!(
            "Rating must be between {} and {}, got {}",
            MIN_STAR_RATING, MAX_STAR_RATING, rating
        )))
    }
}
