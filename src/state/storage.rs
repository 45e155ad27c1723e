//! Profile storage
//!
//! The user profile and the profile-modal flag are read and written through
//! `ProfileStore`, so callers get the store they were handed instead of
//! looking one up globally.

use tracing::debug;

use crate::models::profile::{UpdateProfileRequest, UserProfile};
use crate::utils::errors::{HoopBuddyError, Result};

/// Read/write access to the current user's profile
pub trait ProfileStore: Send + std::fmt::Debug {
    fn profile(&self) -> Option<&UserProfile>;

    fn set_profile(&mut self, profile: Option<UserProfile>);

    fn is_modal_open(&self) -> bool;

    fn set_modal_open(&mut self, open: bool);

    /// Apply a partial update to an existing profile
    fn update_profile(&mut self, request: UpdateProfileRequest) -> Result<UserProfile> {
        let mut profile = self
            .profile()
            .cloned()
            .ok_or_else(|| HoopBuddyError::InvalidInput("No profile to update".to_string()))?;
        profile.apply(request);
        self.set_profile(Some(profile.clone()));
        Ok(profile)
    }
}

/// Profile store that lives for one session
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profile: Option<UserProfile>,
    modal_open: bool,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
            modal_open: false,
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    fn set_profile(&mut self, profile: Option<UserProfile>) {
        debug!(has_profile = profile.is_some(), "Profile stored");
        self.profile = profile;
    }

    fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }
}
