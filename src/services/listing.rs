//! Listing filter/sort view
//!
//! Pure functions over a gathering slice. Filters AND together, sorting runs
//! after filtering and is stable, and the input is never modified.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::gathering::{Gathering, GenderRestriction};
use crate::models::participant::Position;
use crate::utils::errors::{HoopBuddyError, Result};
use crate::utils::helpers::filter_value;

labeled_enum! {
    /// Ordering of the guest listing
    pub enum SortKey {
        Default => ("default", "기본순"),
        HostRating => ("host_rating", "평점순"),
        Latest => ("latest", "최신순"),
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Default
    }
}

/// Listing parameters; `None` means the dimension is not filtered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub start_hour: Option<String>,
    pub position: Option<Position>,
    pub gender: Option<GenderRestriction>,
    pub sort: SortKey,
}

/// Raw, unvalidated listing parameters as a form would submit them
#[derive(Debug, Clone, Default)]
pub struct ListingParams<'a> {
    pub search: Option<&'a str>,
    pub location: Option<&'a str>,
    pub start_hour: Option<&'a str>,
    pub position: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub sort: Option<&'a str>,
}

fn start_hour_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{1,2}(:\d{0,2})?$").expect("static pattern"))
}

impl ListingQuery {
    /// Build a query from raw values; empty, `all` and `전체` disable a filter
    pub fn from_params(params: ListingParams<'_>) -> Result<Self> {
        let start_hour = filter_value(params.start_hour);
        if let Some(ref prefix) = start_hour {
            if !start_hour_pattern().is_match(prefix) {
                return Err(HoopBuddyError::InvalidInput(format!(
                    "Invalid start hour filter: {}", prefix
                )));
            }
        }

        let position = filter_value(params.position)
            .map(|v| v.parse::<Position>())
            .transpose()?;
        let gender = filter_value(params.gender)
            .map(|v| v.parse::<GenderRestriction>())
            .transpose()?;
        let sort = filter_value(params.sort)
            .map(|v| v.parse::<SortKey>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            search: filter_value(params.search).map(|s| s.to_lowercase()),
            location: filter_value(params.location),
            start_hour,
            position,
            gender,
            sort,
        })
    }

    /// Whether a single gathering passes every active filter
    pub fn matches(&self, gathering: &Gathering) -> bool {
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            let hit = gathering.location.to_lowercase().contains(&term)
                || gathering.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if let Some(ref location) = self.location {
            if gathering.location != *location {
                return false;
            }
        }

        if let Some(ref prefix) = self.start_hour {
            if !gathering.start_time.format("%H:%M").to_string().starts_with(prefix.as_str()) {
                return false;
            }
        }

        if let Some(position) = self.position {
            if gathering.position_count(position) == 0 {
                return false;
            }
        }

        if let Some(gender) = self.gender {
            if gathering.gender != gender {
                return false;
            }
        }

        true
    }
}

/// Apply the query's filters, then its ordering
pub fn filter_and_sort<'a>(gatherings: &'a [Gathering], query: &ListingQuery) -> Vec<&'a Gathering> {
    let mut view: Vec<&Gathering> = gatherings.iter().filter(|g| query.matches(g)).collect();

    match query.sort {
        SortKey::Default => {}
        SortKey::HostRating => view.sort_by(|a, b| b.host_rating.total_cmp(&a.host_rating)),
        SortKey::Latest => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    view
}
