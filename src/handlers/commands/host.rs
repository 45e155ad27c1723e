//! Host command handlers
//!
//! Creating listings, managing the roster and the post-game evaluation

use tracing::{info, debug};

use crate::handlers::commands::{parse_date, parse_time, CreateArgs};
use crate::handlers::render;
use crate::models::gathering::CreateGatheringRequest;
use crate::models::participant::{Position, ReceiveApplicationRequest};
use crate::models::profile::UserRole;
use crate::models::review::ReviewTag;
use crate::state::AppContext;
use crate::utils::errors::Result;

fn require_host(ctx: &AppContext) -> Result<String> {
    ctx.session.require_role(UserRole::Host).map(str::to_string)
}

/// Handle `create ...`
pub fn handle_create(ctx: &mut AppContext, args: CreateArgs) -> Result<String> {
    let host_name = require_host(ctx)?;

    let request = CreateGatheringRequest {
        location: args.location,
        date: parse_date(&args.date)?,
        start_time: parse_time(&args.start)?,
        end_time: parse_time(&args.end)?,
        guard_count: args.guard,
        forward_count: args.forward,
        center_count: args.center,
        gender: args.gender.parse()?,
        level: args.level.parse()?,
        court_type: args.court.parse()?,
        cost: args.cost,
        description: args.message,
    };

    let host = &mut ctx.services.host_service;
    let host_rating = host.host_rating(&host_name);
    let gathering = host.create_gathering(&host_name, host_rating, request)?;

    info!(gathering_id = gathering.id, host = %host_name, "Gathering posted from console");
    Ok(format!("모임을 등록했습니다.\n{}", render::host_summary(&gathering)))
}

/// Handle `mine`
pub fn handle_mine(ctx: &mut AppContext) -> Result<String> {
    require_host(ctx)?;

    let gatherings = ctx.services.host_service.gatherings();
    if gatherings.is_empty() {
        return Ok("등록한 모임이 없습니다.".to_string());
    }

    Ok(gatherings
        .iter()
        .map(render::host_summary)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Handle `show <id>` in host mode
pub fn handle_show(ctx: &mut AppContext, gathering_id: i64) -> Result<String> {
    require_host(ctx)?;

    let host = &ctx.services.host_service;
    let gathering = host.get_gathering(gathering_id)?;
    Ok(render::host_detail(gathering, host.draft(gathering_id)))
}

/// Handle `receive <id> <name> <position>`
pub fn handle_receive(
    ctx: &mut AppContext,
    gathering_id: i64,
    name: String,
    position: &str,
    skill_rating: f32,
) -> Result<String> {
    require_host(ctx)?;

    let position: Position = position.parse()?;
    let participant = ctx.services.host_service.receive_application(
        gathering_id,
        ReceiveApplicationRequest { name, position, skill_rating },
    )?;

    Ok(format!(
        "#{} 모임에 {}({}) 님의 신청이 접수되었습니다. 참가자 번호: {}",
        gathering_id, participant.name, participant.position, participant.id
    ))
}

/// Handle `approve <id> <participant>`
pub fn handle_approve(ctx: &mut AppContext, gathering_id: i64, participant_id: i64) -> Result<String> {
    require_host(ctx)?;
    let gathering = ctx.services.host_service.approve_participant(gathering_id, participant_id)?;
    Ok(render::host_detail(&gathering, None))
}

/// Handle `reject <id> <participant>`
pub fn handle_reject(ctx: &mut AppContext, gathering_id: i64, participant_id: i64) -> Result<String> {
    require_host(ctx)?;
    let gathering = ctx.services.host_service.reject_participant(gathering_id, participant_id)?;
    Ok(render::host_detail(&gathering, None))
}

/// Handle `close <id>`
pub fn handle_close(ctx: &mut AppContext, gathering_id: i64) -> Result<String> {
    require_host(ctx)?;

    let host = &mut ctx.services.host_service;
    let gathering = host.close_recruitment(gathering_id)?;
    Ok(format!(
        "모집을 마감했습니다. 승인된 참가자를 평가해 주세요.\n{}",
        render::host_detail(&gathering, host.draft(gathering_id))
    ))
}

/// Handle `rate <id> <participant> <stars>`
pub fn handle_rate(ctx: &mut AppContext, gathering_id: i64, participant_id: i64, stars: u8) -> Result<String> {
    require_host(ctx)?;
    ctx.services.host_service.rate_participant(gathering_id, participant_id, stars)?;
    gate_status(ctx, gathering_id)
}

/// Handle `tag <id> <participant> <tag>`
pub fn handle_tag(ctx: &mut AppContext, gathering_id: i64, participant_id: i64, tag: &str) -> Result<String> {
    require_host(ctx)?;
    let tag: ReviewTag = tag.parse()?;
    ctx.services.host_service.tag_participant(gathering_id, participant_id, tag)?;
    gate_status(ctx, gathering_id)
}

/// Handle `noshow <id> <participant>`
pub fn handle_no_show(ctx: &mut AppContext, gathering_id: i64, participant_id: i64) -> Result<String> {
    require_host(ctx)?;
    let marked = ctx.services.host_service.toggle_no_show(gathering_id, participant_id)?;
    debug!(gathering_id = gathering_id, participant_id = participant_id, marked = marked, "No-show toggled");
    gate_status(ctx, gathering_id)
}

/// Handle `gate <id>`
pub fn handle_gate(ctx: &mut AppContext, gathering_id: i64) -> Result<String> {
    require_host(ctx)?;
    gate_status(ctx, gathering_id)
}

/// Handle `complete <id>`
pub fn handle_complete(ctx: &mut AppContext, gathering_id: i64) -> Result<String> {
    require_host(ctx)?;
    let gathering = ctx.services.host_service.complete_gathering(gathering_id)?;
    Ok(format!("평가를 완료했습니다.\n{}", render::host_detail(&gathering, None)))
}

fn gate_status(ctx: &AppContext, gathering_id: i64) -> Result<String> {
    let host = &ctx.services.host_service;
    let missing = host.evaluation_gate(gathering_id)?;
    let detail = render::host_detail(host.get_gathering(gathering_id)?, host.draft(gathering_id));

    let status = if missing.is_empty() {
        "모든 참가자 평가가 끝났습니다. 'complete'로 완료할 수 있습니다.".to_string()
    } else {
        let ids = missing.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ");
        format!("평가가 남은 참가자: {}", ids)
    };

    Ok(format!("{}\n{}", detail, status))
}
