//! Session command handlers
//!
//! Login, role selection and the user profile

use tracing::{info, debug};

use crate::handlers::commands::ProfileAction;
use crate::models::participant::Position;
use crate::models::profile::{UpdateProfileRequest, UserProfile, UserRole};
use crate::state::AppContext;
use crate::utils::errors::{HoopBuddyError, Result};

/// Handle `login <name>`
pub fn handle_login(ctx: &mut AppContext, name: &str) -> Result<String> {
    let name = ctx.login(name)?;
    ctx.session.reset_role();

    Ok(format!(
        "{}님, 환영합니다! 'role host' 또는 'role guest'로 역할을 선택하세요.",
        name
    ))
}

/// Handle `role [host|guest|reset]`
pub fn handle_role(ctx: &mut AppContext, role: Option<&str>) -> Result<String> {
    match role.map(str::trim) {
        None => Ok(match ctx.session.role {
            Some(role) => format!("현재 역할: {}", role),
            None => "선택된 역할이 없습니다.".to_string(),
        }),
        Some("reset") => {
            ctx.session.reset_role();
            Ok("역할 선택을 초기화했습니다.".to_string())
        }
        Some(value) => {
            let role: UserRole = value.parse()?;
            ctx.session.select_role(role)?;
            Ok(format!("{} 모드로 전환했습니다.", role))
        }
    }
}

/// Handle `profile [show|set|open|close]`
pub fn handle_profile(ctx: &mut AppContext, action: ProfileAction) -> Result<String> {
    let name = ctx
        .session
        .user_name
        .clone()
        .ok_or_else(|| HoopBuddyError::PermissionDenied("Log in first".to_string()))?;

    match action {
        ProfileAction::Show => Ok(match ctx.profiles.profile() {
            Some(profile) => render_profile(profile),
            None => "등록된 프로필이 없습니다. 'profile set'으로 만들어 주세요.".to_string(),
        }),
        ProfileAction::Set { experience, position, location } => {
            let preferred_position = position.as_deref().map(str::parse::<Position>).transpose()?;
            let request = UpdateProfileRequest {
                experience_years: experience,
                preferred_position,
                location,
            };

            let profile = if ctx.profiles.profile().is_some() {
                ctx.profiles.update_profile(request)?
            } else {
                let mut profile = UserProfile::new(
                    name,
                    request.experience_years.unwrap_or(0),
                    request.preferred_position.unwrap_or(Position::Guard),
                );
                profile.apply(UpdateProfileRequest { location: request.location, ..Default::default() });
                ctx.profiles.set_profile(Some(profile.clone()));
                profile
            };

            info!(user = %profile.name, "Profile saved");
            ctx.profiles.set_modal_open(false);
            Ok(format!("프로필을 저장했습니다.\n{}", render_profile(&profile)))
        }
        ProfileAction::Open => {
            ctx.profiles.set_modal_open(true);
            debug!("Profile dialog opened");
            Ok("프로필 편집을 시작합니다. 'profile set --experience N --position P --location L'".to_string())
        }
        ProfileAction::Close => {
            ctx.profiles.set_modal_open(false);
            Ok("프로필 편집을 닫았습니다.".to_string())
        }
    }
}

fn render_profile(profile: &UserProfile) -> String {
    format!(
        "👤 {}\n경력: {}년\n선호 포지션: {}\n활동 지역: {}",
        profile.name,
        profile.experience_years,
        profile.preferred_position,
        profile.location.as_deref().unwrap_or("-"),
    )
}
