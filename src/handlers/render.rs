//! Plain-text rendering of gatherings for the console

use crate::models::gathering::{Gathering, GatheringStatus, JoinStatus};
use crate::models::participant::Position;
use crate::services::evaluation::EvaluationDraft;
use crate::utils::helpers::{format_gathering_date, format_timestamp, truncate_text};

const DESCRIPTION_PREVIEW_LENGTH: usize = 40;

fn schedule(gathering: &Gathering) -> String {
    format!(
        "{} {}-{}",
        format_gathering_date(gathering.date),
        gathering.start_time.format("%H:%M"),
        gathering.end_time.format("%H:%M"),
    )
}

fn positions(gathering: &Gathering) -> String {
    Position::ALL
        .iter()
        .filter(|p| gathering.position_count(**p) > 0)
        .map(|p| format!("{} {}", p, gathering.position_count(*p)))
        .collect::<Vec<_>>()
        .join(" · ")
}

/// One line per gathering in the host's list
pub fn host_summary(gathering: &Gathering) -> String {
    let approved = gathering.approved_participants().count();
    let pending = gathering.participants.iter().filter(|p| p.is_pending()).count();

    format!(
        "[#{}] {} | {} | {} | 승인 {}/{} · 대기 {}",
        gathering.id,
        gathering.status,
        schedule(gathering),
        gathering.location,
        approved,
        gathering.total_slots(),
        pending,
    )
}

/// Host detail view with the roster and, while `full`, the evaluation state
pub fn host_detail(gathering: &Gathering, draft: Option<&EvaluationDraft>) -> String {
    let mut lines = vec![
        host_summary(gathering),
        format!("포지션: {}", positions(gathering)),
        format!(
            "조건: {} · {} · {} · 참가비 {}",
            gathering.gender, gathering.level, gathering.court_type,
            if gathering.cost.is_empty() { "-" } else { gathering.cost.as_str() },
        ),
    ];
    if !gathering.description.is_empty() {
        lines.push(format!("메시지: {}", gathering.description));
    }

    if gathering.participants.is_empty() {
        lines.push("신청자가 없습니다.".to_string());
    }

    for participant in &gathering.participants {
        let mut line = format!(
            "  ({}) {} · {} · {:.1} · {}",
            participant.id, participant.name, participant.position,
            participant.skill_rating, participant.status,
        );

        if participant.is_approved() {
            match gathering.status {
                GatheringStatus::Full => {
                    if let Some(entry) = draft.and_then(|d| d.entry(participant.id)) {
                        if entry.no_show {
                            line.push_str(" | 노쇼");
                        } else if let Some(rating) = entry.rating {
                            line.push_str(&format!(" | ★{}", rating));
                        }
                        if let Some(tag) = entry.tag {
                            line.push_str(&format!(" {}", tag));
                        }
                    }
                }
                GatheringStatus::Completed => {
                    if let Some(eval) = gathering.evaluations.as_ref().and_then(|e| e.get(&participant.id)) {
                        if eval.no_show {
                            line.push_str(" | 노쇼");
                        } else {
                            line.push_str(&format!(" | ★{}", eval.rating));
                        }
                        if let Some(tag) = eval.tag {
                            line.push_str(&format!(" {}", tag));
                        }
                    }
                }
                GatheringStatus::Recruiting => {}
            }
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Label of the guest's action button for a listing
pub fn guest_action_label(gathering: &Gathering) -> &'static str {
    match gathering.join_status {
        JoinStatus::None if gathering.is_full() => "모집 마감",
        JoinStatus::None => "참여 신청",
        JoinStatus::Applied => "신청 취소",
        JoinStatus::Confirmed | JoinStatus::Completed if gathering.host_review.is_none() => "호스트 평가",
        JoinStatus::Confirmed | JoinStatus::Completed => "평가 완료",
    }
}

/// Guest listing card
pub fn guest_card(gathering: &Gathering) -> String {
    let mut card = format!(
        "[#{}] {} | {} | {} · {} | {}/{}명 | 호스트 {} ★{:.1} | {} [{}]",
        gathering.id,
        schedule(gathering),
        gathering.location,
        gathering.gender,
        gathering.level,
        gathering.current_participants,
        gathering.total_slots(),
        gathering.host_name,
        gathering.host_rating,
        gathering.join_status,
        guest_action_label(gathering),
    );
    if !gathering.description.is_empty() {
        card.push_str("\n    ");
        card.push_str(&truncate_text(&gathering.description, DESCRIPTION_PREVIEW_LENGTH));
    }
    card
}

/// Guest detail view
pub fn guest_detail(gathering: &Gathering) -> String {
    let mut lines = vec![
        guest_card(gathering),
        format!("포지션: {}", positions(gathering)),
        format!(
            "코트: {} · 참가비 {}",
            gathering.court_type,
            if gathering.cost.is_empty() { "-" } else { gathering.cost.as_str() },
        ),
    ];
    if let Some(review) = &gathering.host_review {
        lines.push(format!(
            "내 평가: ★{} {} ({})",
            review.rating,
            review.tag.map(|t| t.label()).unwrap_or(""),
            format_timestamp(review.reviewed_at),
        ));
    }
    lines.join("\n")
}
