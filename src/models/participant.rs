//! Participant model

use serde::{Deserialize, Serialize};

labeled_enum! {
    /// Court position a participant applies for
    pub enum Position {
        Guard => ("guard", "가드"),
        Forward => ("forward", "포워드"),
        Center => ("center", "센터"),
    }
}

labeled_enum! {
    /// Host's decision on a single application
    pub enum ApprovalStatus {
        Pending => ("pending", "대기"),
        Approved => ("approved", "승인"),
        Rejected => ("rejected", "거절"),
    }
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        ApprovalStatus::Pending
    }
}

/// A guest's application record as the host sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub skill_rating: f32,
}

impl Participant {
    /// New application, always `pending`
    pub fn new(id: i64, name: String, position: Position, skill_rating: f32) -> Self {
        Self {
            id,
            name,
            position,
            status: ApprovalStatus::Pending,
            skill_rating,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiveApplicationRequest {
    pub name: String,
    pub position: Position,
    pub skill_rating: f32,
}
