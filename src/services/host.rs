//! Host service implementation
//!
//! This service owns the host's gathering collection and drives the listing
//! lifecycle: creation, roster approval, closing recruitment, the post-game
//! evaluation draft and the final completion.

use std::collections::HashMap;
use tracing::{info, debug};

use crate::config::settings::Settings;
use crate::database::repositories::GatheringRepository;
use crate::models::gathering::{Gathering, CreateGatheringRequest, GatheringStatus};
use crate::models::participant::{ApprovalStatus, Participant, ReceiveApplicationRequest};
use crate::models::review::ReviewTag;
use crate::services::evaluation::EvaluationDraft;
use crate::utils::errors::{HoopBuddyError, Result};
use crate::utils::logging;

/// Host service for managing gatherings a host created
#[derive(Debug, Clone)]
pub struct HostService {
    repository: GatheringRepository,
    drafts: HashMap<i64, EvaluationDraft>,
    settings: Settings,
}

impl HostService {
    /// Create a new HostService instance
    pub fn new(repository: GatheringRepository, settings: Settings) -> Self {
        Self {
            repository,
            drafts: HashMap::new(),
            settings,
        }
    }

    /// Post a new listing
    pub fn create_gathering(&mut self, host_name: &str, host_rating: f32, request: CreateGatheringRequest) -> Result<Gathering> {
        debug!(host = %host_name, location = %request.location, "Creating gathering");

        if host_name.trim().is_empty() {
            return Err(HoopBuddyError::InvalidInput("Host name is required".to_string()));
        }
        request.validate(self.settings.gatherings.max_position_count)?;

        let gathering = self.repository.create(host_name.trim().to_string(), host_rating, request);
        logging::log_gathering_action(gathering.id, "create", &gathering.host_name, Some(&gathering.location));

        Ok(gathering)
    }

    /// All of the host's gatherings, newest first
    pub fn gatherings(&self) -> &[Gathering] {
        self.repository.list()
    }

    pub fn get_gathering(&self, gathering_id: i64) -> Result<&Gathering> {
        self.repository.get(gathering_id)
    }

    /// Host's current aggregate rating, taken from their newest listing
    pub fn host_rating(&self, host_name: &str) -> f32 {
        self.repository
            .list()
            .iter()
            .filter(|g| g.host_name == host_name)
            .max_by_key(|g| g.created_at)
            .map(|g| g.host_rating)
            .unwrap_or(0.0)
    }

    /// Record an incoming application as a pending participant
    pub fn receive_application(&mut self, gathering_id: i64, request: ReceiveApplicationRequest) -> Result<Participant> {
        if request.name.trim().is_empty() {
            return Err(HoopBuddyError::InvalidInput("Participant name is required".to_string()));
        }

        let (_, participant) = self.repository.update(gathering_id, |gathering| {
            let participant = Participant::new(
                gathering.next_participant_id(),
                request.name.trim().to_string(),
                request.position,
                request.skill_rating,
            );
            gathering.add_participant(participant.clone())?;
            Ok(participant)
        })?;

        logging::log_participant_action(gathering_id, participant.id, "receive");
        Ok(participant)
    }

    /// Approve a participant; allowed while recruiting, any number of times
    pub fn approve_participant(&mut self, gathering_id: i64, participant_id: i64) -> Result<Gathering> {
        self.set_participant_status(gathering_id, participant_id, ApprovalStatus::Approved)
    }

    /// Reject a participant; allowed while recruiting, any number of times
    pub fn reject_participant(&mut self, gathering_id: i64, participant_id: i64) -> Result<Gathering> {
        self.set_participant_status(gathering_id, participant_id, ApprovalStatus::Rejected)
    }

    fn set_participant_status(&mut self, gathering_id: i64, participant_id: i64, status: ApprovalStatus) -> Result<Gathering> {
        let (gathering, _) = self.repository.update(gathering_id, |gathering| {
            gathering.set_participant_status(participant_id, status)
        })?;

        logging::log_participant_action(gathering_id, participant_id, status.key());
        Ok(gathering)
    }

    /// `recruiting → full`; pending applications are rejected
    pub fn close_recruitment(&mut self, gathering_id: i64) -> Result<Gathering> {
        let (gathering, rejected) = self.repository.update(gathering_id, Gathering::close_recruitment)?;

        self.drafts.insert(gathering_id, EvaluationDraft::new());
        let details = format!("{} pending auto-rejected", rejected);
        logging::log_gathering_action(gathering_id, "close_recruitment", &gathering.host_name, Some(&details));

        Ok(gathering)
    }

    /// Current draft for a gathering, if it has one
    pub fn draft(&self, gathering_id: i64) -> Option<&EvaluationDraft> {
        self.drafts.get(&gathering_id)
    }

    /// Give an approved participant 1-5 stars
    pub fn rate_participant(&mut self, gathering_id: i64, participant_id: i64, rating: u8) -> Result<()> {
        self.draft_for(gathering_id, participant_id)?.rate(participant_id, rating)?;
        logging::log_evaluation(gathering_id, Some(participant_id), Some(rating), None);
        Ok(())
    }

    /// Attach a feedback tag to an approved participant
    pub fn tag_participant(&mut self, gathering_id: i64, participant_id: i64, tag: ReviewTag) -> Result<()> {
        self.draft_for(gathering_id, participant_id)?.tag(participant_id, tag);
        logging::log_evaluation(gathering_id, Some(participant_id), None, Some(tag.label()));
        Ok(())
    }

    pub fn mark_no_show(&mut self, gathering_id: i64, participant_id: i64) -> Result<()> {
        self.draft_for(gathering_id, participant_id)?.mark_no_show(participant_id);
        logging::log_participant_action(gathering_id, participant_id, "no_show");
        Ok(())
    }

    pub fn unmark_no_show(&mut self, gathering_id: i64, participant_id: i64) -> Result<()> {
        self.draft_for(gathering_id, participant_id)?.unmark_no_show(participant_id);
        logging::log_participant_action(gathering_id, participant_id, "clear_no_show");
        Ok(())
    }

    /// Flip the no-show checkbox, returning whether it is now set
    pub fn toggle_no_show(&mut self, gathering_id: i64, participant_id: i64) -> Result<bool> {
        let marked = self.draft_for(gathering_id, participant_id)?.toggle_no_show(participant_id);
        let action = if marked { "no_show" } else { "clear_no_show" };
        logging::log_participant_action(gathering_id, participant_id, action);
        Ok(marked)
    }

    /// Approved participants still missing a rating or tag
    pub fn evaluation_gate(&self, gathering_id: i64) -> Result<Vec<i64>> {
        let gathering = self.evaluable(gathering_id)?;
        let approved = gathering.approved_participants().map(|p| p.id);

        Ok(match self.drafts.get(&gathering_id) {
            Some(draft) => draft.missing(approved),
            None => approved.collect(),
        })
    }

    /// Whether the "complete" action is enabled
    pub fn can_complete(&self, gathering_id: i64) -> Result<bool> {
        Ok(self.evaluation_gate(gathering_id)?.is_empty())
    }

    /// `full → completed`, freezing the evaluation draft onto the record
    pub fn complete_gathering(&mut self, gathering_id: i64) -> Result<Gathering> {
        let approved: Vec<i64> = self
            .evaluable(gathering_id)?
            .approved_participants()
            .map(|p| p.id)
            .collect();

        let frozen = self
            .drafts
            .get(&gathering_id)
            .cloned()
            .unwrap_or_default()
            .freeze(&approved)?;

        let (gathering, _) = self.repository.update(gathering_id, |gathering| gathering.complete(frozen))?;
        self.drafts.remove(&gathering_id);

        info!(gathering_id = gathering_id, evaluated = approved.len(), "Gathering completed");
        logging::log_gathering_action(gathering_id, "complete", &gathering.host_name, None);

        Ok(gathering)
    }

    /// The gathering, if it is in the evaluation phase
    fn evaluable(&self, gathering_id: i64) -> Result<&Gathering> {
        let gathering = self.repository.get(gathering_id)?;
        if gathering.status != GatheringStatus::Full {
            return Err(HoopBuddyError::InvalidStateTransition {
                from: gathering.status.key().to_string(),
                to: GatheringStatus::Completed.key().to_string(),
            });
        }
        Ok(gathering)
    }

    /// Draft to edit for an approved participant of a `full` gathering
    fn draft_for(&mut self, gathering_id: i64, participant_id: i64) -> Result<&mut EvaluationDraft> {
        let gathering = self.evaluable(gathering_id)?;
        let participant = gathering
            .participant(participant_id)
            .ok_or(HoopBuddyError::ParticipantNotFound { gathering_id, participant_id })?;
        if !participant.is_approved() {
            return Err(HoopBuddyError::ParticipantNotApproved { participant_id });
        }

        Ok(self.drafts.entry(gathering_id).or_default())
    }
}
