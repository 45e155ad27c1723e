//! Guest command handlers
//!
//! Browsing, applying and reviewing the host

use crate::handlers::commands::ListArgs;
use crate::handlers::render;
use crate::models::profile::UserRole;
use crate::models::review::ReviewTag;
use crate::services::listing::{ListingParams, ListingQuery};
use crate::state::AppContext;
use crate::utils::errors::Result;

fn require_guest(ctx: &AppContext) -> Result<()> {
    ctx.session.require_role(UserRole::Guest).map(|_| ())
}

/// Handle `list [filters]`
pub fn handle_list(ctx: &mut AppContext, args: &ListArgs) -> Result<String> {
    require_guest(ctx)?;

    let query = ListingQuery::from_params(ListingParams {
        search: args.search.as_deref(),
        location: args.location.as_deref(),
        start_hour: args.hour.as_deref(),
        position: args.position.as_deref(),
        gender: args.gender.as_deref(),
        sort: args.sort.as_deref(),
    })?;

    let results = ctx.services.guest_service.list(&query);
    if results.is_empty() {
        return Ok("조건에 맞는 모임이 없습니다.".to_string());
    }

    let cards = results.into_iter().map(render::guest_card).collect::<Vec<_>>();
    Ok(format!("{}개의 모임\n{}", cards.len(), cards.join("\n")))
}

/// Handle `show <id>` in guest mode
pub fn handle_show(ctx: &mut AppContext, gathering_id: i64) -> Result<String> {
    require_guest(ctx)?;
    let gathering = ctx.services.guest_service.get_gathering(gathering_id)?;
    Ok(render::guest_detail(gathering))
}

/// Handle `apply <id>`
pub fn handle_apply(ctx: &mut AppContext, gathering_id: i64) -> Result<String> {
    require_guest(ctx)?;
    let gathering = ctx.services.guest_service.apply(gathering_id)?;
    Ok(format!("참여 신청이 완료되었습니다.\n{}", render::guest_card(&gathering)))
}

/// Handle `cancel <id>`
pub fn handle_cancel(ctx: &mut AppContext, gathering_id: i64) -> Result<String> {
    require_guest(ctx)?;
    let gathering = ctx.services.guest_service.cancel(gathering_id)?;
    Ok(format!("신청을 취소했습니다.\n{}", render::guest_card(&gathering)))
}

/// Handle `confirm <id>`
pub fn handle_confirm(ctx: &mut AppContext, gathering_id: i64) -> Result<String> {
    require_guest(ctx)?;
    let gathering = ctx.services.guest_service.confirm(gathering_id)?;
    Ok(format!("참여가 확정되었습니다.\n{}", render::guest_card(&gathering)))
}

/// Handle `review <id> <stars> [--tag T]`
pub fn handle_review(ctx: &mut AppContext, gathering_id: i64, stars: u8, tag: Option<&str>) -> Result<String> {
    require_guest(ctx)?;
    let tag = tag.map(str::parse::<ReviewTag>).transpose()?;
    let gathering = ctx.services.guest_service.rate_host(gathering_id, stars, tag)?;
    Ok(format!("호스트 평가를 남겼습니다.\n{}", render::guest_detail(&gathering)))
}
