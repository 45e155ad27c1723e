//! Console command scenarios
//!
//! Drives the application through `handle_line` the way the interactive
//! console does.

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use HoopBuddy::handlers::{handle_line, LineOutcome};
use HoopBuddy::models::{GatheringStatus, JoinStatus};
use HoopBuddy::HoopBuddyError;

#[test]
fn test_role_gates_commands() {
    let mut ctx = seeded_context();
    assert_matches!(handle_line(&mut ctx, "mine"), Err(HoopBuddyError::PermissionDenied(_)));
    assert_matches!(handle_line(&mut ctx, "role host"), Err(HoopBuddyError::PermissionDenied(_)));

    run(&mut ctx, "login 하늘");
    run(&mut ctx, "role guest");
    assert_matches!(handle_line(&mut ctx, "mine"), Err(HoopBuddyError::PermissionDenied(_)));
    assert!(run(&mut ctx, "list").contains("4개의 모임"));

    run(&mut ctx, "role reset");
    assert_matches!(handle_line(&mut ctx, "list"), Err(HoopBuddyError::PermissionDenied(_)));
}

#[test]
fn test_login_name_limits() {
    let mut ctx = seeded_context();
    assert_matches!(handle_line(&mut ctx, "login \"   \""), Err(HoopBuddyError::InvalidInput(_)));
    assert_matches!(
        handle_line(&mut ctx, "login 가나다라마바사아자차카타파"),
        Err(HoopBuddyError::InvalidInput(_))
    );
    assert!(run(&mut ctx, "login \"  농구 좋아  \"").contains("농구 좋아님"));
}

#[test]
fn test_host_console_lifecycle() {
    let mut ctx = logged_in_context("민준", "host");

    let reply = run(
        &mut ctx,
        "create --location \"서초구 반포체육관\" --date 2026-11-03 --start 19:00 --end 21:00 \
         --guard 1 --center 1 --court indoor --message \"초보 환영\"",
    );
    assert!(reply.contains("[#3]"));

    run(&mut ctx, "receive 3 에이 guard");
    run(&mut ctx, "receive 3 비 center --skill 4.5");
    run(&mut ctx, "approve 3 1");
    run(&mut ctx, "approve 3 2");
    run(&mut ctx, "close 3");

    run(&mut ctx, "rate 3 1 5");
    run(&mut ctx, "tag 3 1 \"#매너 좋음\"");
    let gate = run(&mut ctx, "noshow 3 2");
    assert!(gate.contains("노쇼"));
    assert!(gate.contains("complete"));

    run(&mut ctx, "complete 3");
    let gathering = ctx.services.host_service.get_gathering(3).unwrap();
    assert_eq!(gathering.status, GatheringStatus::Completed);
    assert_eq!(gathering.host_name, "민준");

    assert_matches!(handle_line(&mut ctx, "complete 3"), Err(HoopBuddyError::InvalidStateTransition { .. }));
}

#[test]
fn test_incomplete_evaluation_is_reported() {
    let mut ctx = logged_in_context("김호스트", "host");

    run(&mut ctx, "rate 1 1 4");
    assert!(run(&mut ctx, "gate 1").contains("1, 2, 3"));
    assert_matches!(
        handle_line(&mut ctx, "complete 1"),
        Err(HoopBuddyError::EvaluationIncomplete { missing }) if missing == vec![1, 2, 3]
    );
}

#[test]
fn test_guest_console_flow() {
    let mut ctx = logged_in_context("서연", "guest");

    let listing = run(&mut ctx, "list --location 마포구 --sort latest");
    assert!(listing.starts_with("1개의 모임"));
    assert!(listing.contains("[#3]"));

    assert!(run(&mut ctx, "list --hour 99").contains("조건에 맞는 모임이 없습니다"));
    assert_matches!(handle_line(&mut ctx, "list --hour 저녁"), Err(HoopBuddyError::InvalidInput(_)));

    run(&mut ctx, "apply 3");
    assert_matches!(handle_line(&mut ctx, "apply 2"), Err(HoopBuddyError::GatheringFull { .. }));
    run(&mut ctx, "confirm 3");
    run(&mut ctx, "review 3 5 --tag \"#친절\"");

    let gathering = ctx.services.guest_service.get_gathering(3).unwrap();
    assert_eq!(gathering.join_status, JoinStatus::Completed);
    assert_eq!(gathering.current_participants, 1);
    assert_matches!(handle_line(&mut ctx, "review 3 4"), Err(HoopBuddyError::AlreadyRated { .. }));
}

#[test]
fn test_profile_commands() {
    let mut ctx = logged_in_context("지훈", "guest");

    assert!(run(&mut ctx, "profile").contains("등록된 프로필이 없습니다"));
    run(&mut ctx, "profile open");
    assert!(ctx.profiles.is_modal_open());

    let reply = run(&mut ctx, "profile set --experience 4 --position center --location 마포구");
    assert!(reply.contains("센터"));
    assert!(!ctx.profiles.is_modal_open());

    run(&mut ctx, "profile set --experience 5");
    let profile = ctx.profiles.profile().unwrap();
    assert_eq!(profile.name, "지훈");
    assert_eq!(profile.experience_years, 5);
    assert_eq!(profile.location.as_deref(), Some("마포구"));
}

#[test]
fn test_new_login_starts_without_profile() {
    let mut ctx = logged_in_context("지훈", "guest");
    run(&mut ctx, "profile set --experience 4 --position center");

    run(&mut ctx, "login 서연");
    assert!(run(&mut ctx, "profile").contains("등록된 프로필이 없습니다"));

    run(&mut ctx, "profile set --experience 2");
    let profile = ctx.profiles.profile().unwrap();
    assert_eq!(profile.name, "서연");
    assert_eq!(profile.experience_years, 2);
}

#[test]
fn test_help_and_parse_errors() {
    let mut ctx = seeded_context();
    let help = run(&mut ctx, "help");
    assert!(help.contains("[호스트]"));
    assert!(help.contains("[게스트]"));

    assert_matches!(handle_line(&mut ctx, "apply"), Err(HoopBuddyError::InvalidInput(_)));
    assert_matches!(handle_line(&mut ctx, "apply \"3"), Err(HoopBuddyError::InvalidInput(_)));
    assert_eq!(handle_line(&mut ctx, "").unwrap(), LineOutcome::Empty);
}
