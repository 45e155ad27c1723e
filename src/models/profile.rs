//! User profile model

use serde::{Deserialize, Serialize};
use super::participant::Position;

labeled_enum! {
    /// Which side of the app the user is acting on
    pub enum UserRole {
        Host => ("host", "호스트"),
        Guest => ("guest", "게스트"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Years of playing experience
    pub experience_years: u32,
    pub preferred_position: Position,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub experience_years: Option<u32>,
    pub preferred_position: Option<Position>,
    pub location: Option<String>,
}

impl UserProfile {
    pub fn new(name: String, experience_years: u32, preferred_position: Position) -> Self {
        Self {
            name,
            experience_years,
            preferred_position,
            location: None,
        }
    }

    /// Apply a partial update; only the listed fields can change
    pub fn apply(&mut self, request: UpdateProfileRequest) {
        if let Some(experience_years) = request.experience_years {
            self.experience_years = experience_years;
        }
        if let Some(preferred_position) = request.preferred_position {
            self.preferred_position = preferred_position;
        }
        if let Some(location) = request.location {
            let location = location.trim().to_string();
            self.location = if location.is_empty() { None } else { Some(location) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial_update() {
        let mut profile = UserProfile::new("지훈".to_string(), 3, Position::Guard);
        profile.apply(UpdateProfileRequest {
            location: Some("마포구".to_string()),
            ..Default::default()
        });
        assert_eq!(profile.experience_years, 3);
        assert_eq!(profile.location.as_deref(), Some("마포구"));

        profile.apply(UpdateProfileRequest {
            location: Some("  ".to_string()),
            preferred_position: Some(Position::Center),
            ..Default::default()
        });
        assert_eq!(profile.location, None);
        assert_eq!(profile.preferred_position, Position::Center);
    }

    #[test]
    fn test_role_parses() {
        assert_eq!("host".parse::<UserRole>().unwrap(), UserRole::Host);
        assert_eq!("게스트".parse::<UserRole>().unwrap(), UserRole::Guest);
    }
}
