//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use uuid::Uuid;

use crate::utils::errors::{HoopBuddyError, Result};

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Format a gathering date the way listings show it, e.g. `10월 19일 (월)`
pub fn format_gathering_date(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    };
    format!("{}월 {}일 ({})", date.month(), date.day(), weekday)
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Whether a filter value means "no filter" for its dimension
pub fn is_unfiltered(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("all") || value == "전체"
}

/// Normalize a raw filter value: `None` when it means "no filter"
pub fn filter_value(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !is_unfiltered(v))
        .map(|v| v.trim().to_string())
}

/// Split a console line into arguments, keeping double-quoted groups together
pub fn split_args(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(HoopBuddyError::InvalidInput("Unterminated quote".to_string()));
    }
    if has_token {
        args.push(current);
    }

    Ok(args)
}
