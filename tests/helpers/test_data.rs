//! Test data helpers for creating test objects

use chrono::{NaiveDate, NaiveTime};

use HoopBuddy::models::{
    CourtType, CreateGatheringRequest, GenderRestriction, Position, ReceiveApplicationRequest, SkillLevel,
};

/// A valid weekday-evening listing: 2 guards, 1 forward, 1 center
pub fn create_test_request() -> CreateGatheringRequest {
    CreateGatheringRequest {
        location: "서초구 반포체육관".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
        start_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        guard_count: 2,
        forward_count: 1,
        center_count: 1,
        gender: GenderRestriction::Any,
        level: SkillLevel::Intermediate,
        court_type: CourtType::Indoor,
        cost: "8,000원".to_string(),
        description: "초보도 환영합니다".to_string(),
    }
}

pub fn create_test_applicant(name: &str, position: Position) -> ReceiveApplicationRequest {
    ReceiveApplicationRequest {
        name: name.to_string(),
        position,
        skill_rating: 3.5,
    }
}
