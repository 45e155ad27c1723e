//! Application context
//!
//! Everything a command needs is passed in explicitly through `AppContext`:
//! settings, the services, the login session and the profile store.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::Settings;
use crate::ServiceFactory;
use crate::models::profile::UserRole;
use crate::state::storage::{InMemoryProfileStore, ProfileStore};
use crate::utils::errors::{HoopBuddyError, Result};
use crate::utils::helpers::generate_uuid;

/// Application-wide context containing services and settings
#[derive(Debug)]
pub struct AppContext {
    pub settings: Settings,
    pub services: ServiceFactory,
    pub session: Session,
    pub profiles: Box<dyn ProfileStore>,
}

impl AppContext {
    pub fn new(settings: Settings, services: ServiceFactory, profiles: Box<dyn ProfileStore>) -> Self {
        Self {
            settings,
            services,
            session: Session::new(),
            profiles,
        }
    }

    /// Context with a fresh in-memory profile store
    pub fn with_default_profiles(settings: Settings, services: ServiceFactory) -> Self {
        Self::new(settings, services, Box::new(InMemoryProfileStore::new()))
    }

    /// Log in under a display name, bounded by the configured length
    ///
    /// Switching to a different user drops the previous user's profile.
    pub fn login(&mut self, name: &str) -> Result<String> {
        let max_length = self.settings.app.max_user_name_length;
        let previous = self.session.user_name.clone();
        let name = self.session.login(name, max_length)?;

        if previous.as_deref() != Some(name.as_str()) {
            self.profiles.set_profile(None);
            self.profiles.set_modal_open(false);
        }
        Ok(name)
    }
}

/// The current user's login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub user_name: Option<String>,
    pub role: Option<UserRole>,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            session_id: generate_uuid(),
            user_name: None,
            role: None,
            started_at: Utc::now(),
        }
    }

    /// Store a trimmed display name of 1..=max_length characters
    pub fn login(&mut self, name: &str, max_length: usize) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HoopBuddyError::InvalidInput("Name is required".to_string()));
        }
        if name.chars().count() > max_length {
            return Err(HoopBuddyError::InvalidInput(format!(
                "Name cannot exceed {} characters", max_length
            )));
        }

        self.user_name = Some(name.to_string());
        info!(session_id = %self.session_id, user = %name, "User logged in");
        Ok(name.to_string())
    }

    pub fn select_role(&mut self, role: UserRole) -> Result<()> {
        if self.user_name.is_none() {
            return Err(HoopBuddyError::PermissionDenied("Log in first".to_string()));
        }

        self.role = Some(role);
        info!(session_id = %self.session_id, role = role.key(), "Role selected");
        Ok(())
    }

    pub fn reset_role(&mut self) {
        self.role = None;
    }

    /// User name, if logged in with the given role
    pub fn require_role(&self, role: UserRole) -> Result<&str> {
        let name = self
            .user_name
            .as_deref()
            .ok_or_else(|| HoopBuddyError::PermissionDenied("Log in first".to_string()))?;

        match self.role {
            Some(current) if current == role => Ok(name),
            _ => Err(HoopBuddyError::PermissionDenied(format!(
                "This action requires the {} role", role.key()
            ))),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
