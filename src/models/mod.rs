//! Data models module
//!
//! This module contains all data structures used throughout the application

/// Declares a closed vocabulary enum with a stable snake_case key (used in
/// seed files and console arguments) and a display label.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member of the vocabulary, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable machine key
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Human-facing label
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = crate::utils::errors::HoopBuddyError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.key().eq_ignore_ascii_case(s) || v.label() == s)
                    .ok_or_else(|| crate::utils::errors::HoopBuddyError::InvalidInput(
                        format!("Unknown {}: {}", stringify!($name), s)
                    ))
            }
        }
    };
}

pub mod gathering;
pub mod participant;
pub mod review;
pub mod profile;

// Re-export commonly used models
pub use gathering::{Gathering, CreateGatheringRequest, GatheringStatus, JoinStatus, GenderRestriction, SkillLevel, CourtType};
pub use participant::{Participant, Position, ApprovalStatus, ReceiveApplicationRequest};
pub use review::{ReviewTag, ParticipantEvaluation, HostReview};
pub use profile::{UserProfile, UserRole, UpdateProfileRequest};
