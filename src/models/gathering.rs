//! Gathering model
//!
//! A gathering is one listing created by a host. Every state change goes
//! through one of the update methods below; each of them names exactly the
//! fields it may touch and checks its own precondition before touching them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::participant::{ApprovalStatus, Participant, Position};
use super::review::{HostReview, ParticipantEvaluation};
use crate::utils::errors::{HoopBuddyError, Result};

labeled_enum! {
    /// Host-side lifecycle of a listing
    pub enum GatheringStatus {
        Recruiting => ("recruiting", "모집중"),
        Full => ("full", "모집완료"),
        Completed => ("completed", "운동완료"),
    }
}

impl Default for GatheringStatus {
    fn default() -> Self {
        GatheringStatus::Recruiting
    }
}

labeled_enum! {
    /// A guest's personal relationship to a listing
    pub enum JoinStatus {
        None => ("none", "미신청"),
        Applied => ("applied", "신청 완료"),
        Confirmed => ("confirmed", "참여 확정"),
        Completed => ("completed", "참여 완료"),
    }
}

impl Default for JoinStatus {
    fn default() -> Self {
        JoinStatus::None
    }
}

labeled_enum! {
    pub enum GenderRestriction {
        Any => ("any", "무관"),
        Male => ("male", "남"),
        Female => ("female", "여"),
    }
}

impl Default for GenderRestriction {
    fn default() -> Self {
        GenderRestriction::Any
    }
}

labeled_enum! {
    pub enum SkillLevel {
        Any => ("any", "실력 무관"),
        Beginner => ("beginner", "초보 환영"),
        Intermediate => ("intermediate", "중수"),
        Advanced => ("advanced", "고수"),
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Any
    }
}

labeled_enum! {
    pub enum CourtType {
        Indoor => ("indoor", "실내"),
        Outdoor => ("outdoor", "야외"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gathering {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub guard_count: u32,
    #[serde(default)]
    pub forward_count: u32,
    #[serde(default)]
    pub center_count: u32,
    #[serde(default)]
    pub gender: GenderRestriction,
    #[serde(default)]
    pub level: SkillLevel,
    pub court_type: CourtType,
    pub location: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub description: String,
    pub host_name: String,
    #[serde(default)]
    pub host_rating: f32,
    #[serde(default)]
    pub current_participants: u32,
    #[serde(default)]
    pub status: GatheringStatus,
    #[serde(default)]
    pub join_status: JoinStatus,
    #[serde(default)]
    pub host_review: Option<HostReview>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub evaluations: Option<BTreeMap<i64, ParticipantEvaluation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGatheringRequest {
    pub location: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub guard_count: u32,
    pub forward_count: u32,
    pub center_count: u32,
    pub gender: GenderRestriction,
    pub level: SkillLevel,
    pub court_type: CourtType,
    pub cost: String,
    pub description: String,
}

impl CreateGatheringRequest {
    /// Check the fields a listing cannot be posted without
    pub fn validate(&self, max_position_count: u32) -> Result<()> {
        if self.location.trim().is_empty() {
            return Err(HoopBuddyError::InvalidInput("Location is required".to_string()));
        }

        if self.guard_count + self.forward_count + self.center_count == 0 {
            return Err(HoopBuddyError::InvalidInput(
                "At least one position must be recruited".to_string()
            ));
        }

        for (position, count) in [
            (Position::Guard, self.guard_count),
            (Position::Forward, self.forward_count),
            (Position::Center, self.center_count),
        ] {
            if count > max_position_count {
                return Err(HoopBuddyError::InvalidInput(format!(
                    "{} count cannot exceed {}", position, max_position_count
                )));
            }
        }

        if self.end_time <= self.start_time {
            return Err(HoopBuddyError::InvalidInput(
                "End time must be after start time".to_string()
            ));
        }

        Ok(())
    }
}

impl Gathering {
    /// Build a fresh listing: `recruiting`, empty roster, zero counter
    pub fn new(id: i64, host_name: String, host_rating: f32, request: CreateGatheringRequest) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            guard_count: request.guard_count,
            forward_count: request.forward_count,
            center_count: request.center_count,
            gender: request.gender,
            level: request.level,
            court_type: request.court_type,
            location: request.location.trim().to_string(),
            cost: request.cost.trim().to_string(),
            description: request.description.trim().to_string(),
            host_name,
            host_rating,
            current_participants: 0,
            status: GatheringStatus::Recruiting,
            join_status: JoinStatus::None,
            host_review: None,
            participants: Vec::new(),
            evaluations: None,
        }
    }

    /// Sum of the per-position quotas
    pub fn total_slots(&self) -> u32 {
        self.guard_count
            .saturating_add(self.forward_count)
            .saturating_add(self.center_count)
    }

    /// Quota for a single position
    pub fn position_count(&self, position: Position) -> u32 {
        match position {
            Position::Guard => self.guard_count,
            Position::Forward => self.forward_count,
            Position::Center => self.center_count,
        }
    }

    /// Whether the apply action is disabled by the counter
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.total_slots()
    }

    pub fn is_recruiting(&self) -> bool {
        self.status == GatheringStatus::Recruiting
    }

    pub fn participant(&self, participant_id: i64) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == participant_id)
    }

    /// Approved participants in roster order
    pub fn approved_participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.is_approved())
    }

    /// Next free participant id within this gathering
    pub fn next_participant_id(&self) -> i64 {
        self.participants.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Roster edits require `recruiting`
    pub fn ensure_recruiting(&self) -> Result<()> {
        if self.is_recruiting() {
            Ok(())
        } else {
            Err(HoopBuddyError::RecruitmentClosed { gathering_id: self.id })
        }
    }

    fn transition_error(&self, to: GatheringStatus) -> HoopBuddyError {
        HoopBuddyError::InvalidStateTransition {
            from: self.status.key().to_string(),
            to: to.key().to_string(),
        }
    }

    fn join_transition_error(&self, to: JoinStatus) -> HoopBuddyError {
        HoopBuddyError::InvalidStateTransition {
            from: self.join_status.key().to_string(),
            to: to.key().to_string(),
        }
    }

    /// Add an incoming application. Touches `participants` and `current_participants`.
    pub fn add_participant(&mut self, participant: Participant) -> Result<()> {
        self.ensure_recruiting()?;
        if self.is_full() {
            return Err(HoopBuddyError::GatheringFull { gathering_id: self.id });
        }
        if self.participant(participant.id).is_some() {
            return Err(HoopBuddyError::InvalidInput(format!(
                "Participant {} already exists", participant.id
            )));
        }

        self.participants.push(participant);
        self.current_participants += 1;
        Ok(())
    }

    /// Approve or reject one participant. Touches that participant's `status`
    /// and `current_participants`.
    ///
    /// A rejected participant gives their slot back; approving them again
    /// takes a slot and is refused when none is left.
    pub fn set_participant_status(&mut self, participant_id: i64, status: ApprovalStatus) -> Result<()> {
        if status == ApprovalStatus::Pending {
            return Err(HoopBuddyError::InvalidInput(
                "A participant cannot be moved back to pending".to_string()
            ));
        }
        self.ensure_recruiting()?;

        let gathering_id = self.id;
        let current = self
            .participant(participant_id)
            .map(|p| p.status)
            .ok_or(HoopBuddyError::ParticipantNotFound { gathering_id, participant_id })?;

        match (current, status) {
            (ApprovalStatus::Rejected, ApprovalStatus::Approved) => {
                if self.is_full() {
                    return Err(HoopBuddyError::GatheringFull { gathering_id });
                }
                self.current_participants += 1;
            }
            (ApprovalStatus::Pending | ApprovalStatus::Approved, ApprovalStatus::Rejected) => {
                self.current_participants = self.current_participants.saturating_sub(1);
            }
            _ => {}
        }

        if let Some(participant) = self.participants.iter_mut().find(|p| p.id == participant_id) {
            participant.status = status;
        }
        Ok(())
    }

    /// `recruiting → full`. Touches `status`, pending participants' `status`
    /// and `current_participants`.
    ///
    /// Returns how many pending participants were rejected.
    pub fn close_recruitment(&mut self) -> Result<usize> {
        if self.status != GatheringStatus::Recruiting {
            return Err(self.transition_error(GatheringStatus::Full));
        }

        let mut rejected = 0;
        for participant in self.participants.iter_mut().filter(|p| p.is_pending()) {
            participant.status = ApprovalStatus::Rejected;
            rejected += 1;
        }
        self.current_participants = self.current_participants.saturating_sub(rejected as u32);

        self.status = GatheringStatus::Full;
        Ok(rejected)
    }

    /// `full → completed`. Touches `status` and `evaluations`.
    pub fn complete(&mut self, evaluations: BTreeMap<i64, ParticipantEvaluation>) -> Result<()> {
        if self.status != GatheringStatus::Full || self.evaluations.is_some() {
            return Err(self.transition_error(GatheringStatus::Completed));
        }

        self.evaluations = Some(evaluations);
        self.status = GatheringStatus::Completed;
        Ok(())
    }

    /// Guest `none → applied`. Touches `join_status` and `current_participants`.
    pub fn apply(&mut self) -> Result<()> {
        if self.join_status != JoinStatus::None {
            return Err(HoopBuddyError::AlreadyApplied { gathering_id: self.id });
        }
        self.ensure_recruiting()?;
        if self.is_full() {
            return Err(HoopBuddyError::GatheringFull { gathering_id: self.id });
        }

        self.current_participants += 1;
        self.join_status = JoinStatus::Applied;
        Ok(())
    }

    /// Guest `applied → none`. Touches `join_status`, and `current_participants`
    /// only when `give_back_slot` is set.
    pub fn cancel_application(&mut self, give_back_slot: bool) -> Result<()> {
        if self.join_status != JoinStatus::Applied {
            return Err(self.join_transition_error(JoinStatus::None));
        }

        if give_back_slot {
            self.current_participants = self.current_participants.saturating_sub(1);
        }
        self.join_status = JoinStatus::None;
        Ok(())
    }

    /// Guest `applied → confirmed`. Touches `join_status`.
    pub fn confirm_application(&mut self) -> Result<()> {
        if self.join_status != JoinStatus::Applied {
            return Err(self.join_transition_error(JoinStatus::Confirmed));
        }

        self.join_status = JoinStatus::Confirmed;
        Ok(())
    }

    /// Guest rates the host once. Touches `host_review` and `join_status`.
    pub fn record_host_review(&mut self, review: HostReview) -> Result<()> {
        if self.host_review.is_some() {
            return Err(HoopBuddyError::AlreadyRated { gathering_id: self.id });
        }
        if !matches!(self.join_status, JoinStatus::Confirmed | JoinStatus::Completed) {
            return Err(self.join_transition_error(JoinStatus::Completed));
        }

        self.host_review = Some(review);
        self.join_status = JoinStatus::Completed;
        Ok(())
    }
}
