//! Host-side gathering lifecycle
//!
//! Creation, roster approval, closing recruitment, the evaluation draft and
//! completion, driven through `HostService`.

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use HoopBuddy::models::{ApprovalStatus, GatheringStatus, Position, ReviewTag};
use HoopBuddy::HoopBuddyError;

#[test]
fn test_create_prepends_with_fresh_id() {
    let mut services = seeded_services();
    let host = &mut services.host_service;
    let before = host.gatherings().len();

    let gathering = host.create_gathering("김호스트", 4.5, create_test_request()).unwrap();

    assert_eq!(gathering.id, 3);
    assert_eq!(gathering.status, GatheringStatus::Recruiting);
    assert_eq!(gathering.current_participants, 0);
    assert!(gathering.participants.is_empty());
    assert_eq!(host.gatherings().len(), before + 1);
    assert_eq!(host.gatherings()[0].id, gathering.id);
}

#[test]
fn test_create_rejects_invalid_requests() {
    let mut services = services_with_config(TestConfig { use_seed: false, ..Default::default() });
    let host = &mut services.host_service;

    let mut no_slots = create_test_request();
    no_slots.guard_count = 0;
    no_slots.forward_count = 0;
    no_slots.center_count = 0;
    assert_matches!(host.create_gathering("민준", 0.0, no_slots), Err(HoopBuddyError::InvalidInput(_)));

    let mut backwards = create_test_request();
    std::mem::swap(&mut backwards.start_time, &mut backwards.end_time);
    assert_matches!(host.create_gathering("민준", 0.0, backwards), Err(HoopBuddyError::InvalidInput(_)));

    let mut no_location = create_test_request();
    no_location.location = "  ".to_string();
    assert_matches!(host.create_gathering("민준", 0.0, no_location), Err(HoopBuddyError::InvalidInput(_)));

    assert!(host.gatherings().is_empty());
}

#[test]
fn test_close_recruitment_rejects_pending() {
    let mut services = seeded_services();
    let host = &mut services.host_service;

    host.approve_participant(2, 1).unwrap();
    let gathering = host.close_recruitment(2).unwrap();

    assert_eq!(gathering.status, GatheringStatus::Full);
    assert!(gathering.participants.iter().all(|p| p.status != ApprovalStatus::Pending));
    assert_eq!(gathering.participant(1).map(|p| p.status), Some(ApprovalStatus::Approved));
    assert_eq!(gathering.participant(3).map(|p| p.status), Some(ApprovalStatus::Rejected));
}

#[test]
fn test_roster_flips_only_while_recruiting() {
    let mut services = seeded_services();
    let host = &mut services.host_service;

    host.approve_participant(2, 3).unwrap();
    host.reject_participant(2, 3).unwrap();
    host.approve_participant(2, 3).unwrap();
    assert_eq!(
        host.get_gathering(2).unwrap().participant(3).map(|p| p.status),
        Some(ApprovalStatus::Approved)
    );

    host.close_recruitment(2).unwrap();
    assert_matches!(host.reject_participant(2, 3), Err(HoopBuddyError::RecruitmentClosed { gathering_id: 2 }));
    assert_matches!(host.close_recruitment(2), Err(HoopBuddyError::InvalidStateTransition { .. }));
}

#[test]
fn test_receive_application_respects_quota() {
    let mut services = services_with_config(TestConfig { use_seed: false, ..Default::default() });
    let host = &mut services.host_service;

    let mut request = create_test_request();
    request.guard_count = 1;
    request.forward_count = 0;
    request.center_count = 1;
    let gathering = host.create_gathering("민준", 0.0, request).unwrap();

    host.receive_application(gathering.id, create_test_applicant("가드", Position::Guard)).unwrap();
    host.receive_application(gathering.id, create_test_applicant("센터", Position::Center)).unwrap();
    assert_matches!(
        host.receive_application(gathering.id, create_test_applicant("늦은", Position::Guard)),
        Err(HoopBuddyError::GatheringFull { .. })
    );

    let stored = host.get_gathering(gathering.id).unwrap();
    assert_eq!(stored.current_participants, 2);
    assert_eq!(stored.participants.len(), 2);
    assert!(stored.participants.iter().all(|p| p.is_pending()));
}

#[test]
fn test_rejecting_frees_the_slot() {
    let mut services = services_with_config(TestConfig { use_seed: false, ..Default::default() });
    let host = &mut services.host_service;

    let mut request = create_test_request();
    request.guard_count = 1;
    request.forward_count = 0;
    request.center_count = 0;
    let id = host.create_gathering("민준", 0.0, request).unwrap().id;

    let first = host.receive_application(id, create_test_applicant("에이", Position::Guard)).unwrap().id;
    host.reject_participant(id, first).unwrap();
    assert_eq!(host.get_gathering(id).unwrap().current_participants, 0);

    let second = host.receive_application(id, create_test_applicant("비", Position::Guard)).unwrap().id;
    host.approve_participant(id, second).unwrap();
    assert_matches!(host.approve_participant(id, first), Err(HoopBuddyError::GatheringFull { .. }));

    let stored = host.get_gathering(id).unwrap();
    assert_eq!(stored.current_participants, 1);
    assert_eq!(stored.participant(first).map(|p| p.status), Some(ApprovalStatus::Rejected));
    assert_eq!(stored.participant(second).map(|p| p.status), Some(ApprovalStatus::Approved));
}

#[test]
fn test_completion_gate_with_no_show() {
    let mut services = services_with_config(TestConfig { use_seed: false, ..Default::default() });
    let host = &mut services.host_service;

    let gathering = host.create_gathering("민준", 0.0, create_test_request()).unwrap();
    let id = gathering.id;
    let a = host.receive_application(id, create_test_applicant("에이", Position::Guard)).unwrap().id;
    let b = host.receive_application(id, create_test_applicant("비", Position::Guard)).unwrap().id;
    let c = host.receive_application(id, create_test_applicant("씨", Position::Center)).unwrap().id;
    for pid in [a, b, c] {
        host.approve_participant(id, pid).unwrap();
    }
    host.close_recruitment(id).unwrap();

    host.rate_participant(id, a, 5).unwrap();
    host.rate_participant(id, b, 4).unwrap();
    assert!(host.toggle_no_show(id, c).unwrap());

    assert_eq!(host.evaluation_gate(id).unwrap(), vec![a, b]);
    assert_matches!(
        host.complete_gathering(id),
        Err(HoopBuddyError::EvaluationIncomplete { missing }) if missing == vec![a, b]
    );

    host.tag_participant(id, a, ReviewTag::GoodManners).unwrap();
    assert!(!host.can_complete(id).unwrap());
    host.tag_participant(id, b, ReviewTag::Communication).unwrap();
    assert!(host.can_complete(id).unwrap());

    let done = host.complete_gathering(id).unwrap();
    assert_eq!(done.status, GatheringStatus::Completed);

    let evaluations = done.evaluations.unwrap();
    assert_eq!(evaluations.len(), 3);
    assert_eq!(evaluations[&a].rating, 5);
    assert_eq!(evaluations[&a].tag, Some(ReviewTag::GoodManners));
    assert_eq!(evaluations[&b].rating, 4);
    assert_eq!(evaluations[&b].tag, Some(ReviewTag::Communication));
    assert_eq!(evaluations[&c].rating, 0);
    assert!(evaluations[&c].no_show);
    assert_eq!(evaluations[&c].tag, None);

    assert_matches!(host.complete_gathering(id), Err(HoopBuddyError::InvalidStateTransition { .. }));
}

#[test]
fn test_no_show_locks_and_unlocks_rating() {
    let mut services = seeded_services();
    let host = &mut services.host_service;

    // seeded gathering 1 is already full with three approved participants
    host.rate_participant(1, 2, 3).unwrap();
    host.mark_no_show(1, 2).unwrap();

    let entry = host.draft(1).and_then(|d| d.entry(2)).cloned().unwrap();
    assert!(entry.no_show);
    assert_eq!(entry.rating, Some(0));
    assert_matches!(host.rate_participant(1, 2, 5), Err(HoopBuddyError::NoShowLocked { participant_id: 2 }));

    host.unmark_no_show(1, 2).unwrap();
    let entry = host.draft(1).and_then(|d| d.entry(2)).cloned().unwrap();
    assert!(!entry.no_show);
    assert_eq!(entry.rating, None);
    host.rate_participant(1, 2, 5).unwrap();
}

#[test]
fn test_rating_out_of_range() {
    let mut services = seeded_services();
    let host = &mut services.host_service;

    assert_matches!(host.rate_participant(1, 1, 0), Err(HoopBuddyError::InvalidInput(_)));
    assert_matches!(host.rate_participant(1, 1, 6), Err(HoopBuddyError::InvalidInput(_)));
    assert_matches!(host.rate_participant(42, 1, 3), Err(HoopBuddyError::GatheringNotFound { gathering_id: 42 }));
}
