//! Listing filter/sort properties
//!
//! Property tests over generated gathering lists, plus a few fixed cases over
//! the built-in guest dataset.

mod helpers;

use chrono::{Duration, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;

use helpers::*;
use HoopBuddy::models::{Gathering, GenderRestriction, Position};
use HoopBuddy::services::{filter_and_sort, ListingParams, ListingQuery, SortKey};

const LOCATIONS: &[&str] = &["강남구", "마포구", "성동구", "송파구"];

fn arb_gathering() -> impl Strategy<Value = Gathering> {
    (
        0usize..LOCATIONS.len(),
        0u32..24,
        0u32..3,
        0u32..3,
        0u32..3,
        0usize..GenderRestriction::ALL.len(),
        0u32..=50,
        0i64..10_000,
    )
        .prop_map(|(loc, hour, guard, forward, center, gender, rating, minutes)| {
            let mut request = create_test_request();
            request.location = LOCATIONS[loc].to_string();
            request.start_time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
            request.guard_count = guard;
            request.forward_count = forward;
            request.center_count = center;
            request.gender = GenderRestriction::ALL[gender];

            let mut gathering = Gathering::new(0, "호스트".to_string(), rating as f32 / 10.0, request);
            gathering.created_at = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap()
                + Duration::minutes(minutes);
            gathering
        })
}

fn arb_gatherings() -> impl Strategy<Value = Vec<Gathering>> {
    prop::collection::vec(arb_gathering(), 0..12).prop_map(|mut gatherings| {
        for (index, gathering) in gatherings.iter_mut().enumerate() {
            gathering.id = index as i64 + 1;
        }
        gatherings
    })
}

fn ids(view: &[&Gathering]) -> Vec<i64> {
    view.iter().map(|g| g.id).collect()
}

fn sort_only(sort: &str) -> ListingQuery {
    ListingQuery::from_params(ListingParams { sort: Some(sort), ..Default::default() }).unwrap()
}

proptest! {
    #[test]
    fn prop_unfiltered_values_are_noops(gatherings in arb_gatherings(), blank in prop::sample::select(vec!["", "all", "전체"])) {
        let query = ListingQuery::from_params(ListingParams {
            search: Some(blank),
            location: Some(blank),
            start_hour: Some(blank),
            position: Some(blank),
            gender: Some(blank),
            sort: Some(blank),
        }).unwrap();

        let view = filter_and_sort(&gatherings, &query);
        let expected: Vec<i64> = gatherings.iter().map(|g| g.id).collect();
        prop_assert_eq!(ids(&view), expected);
    }

    #[test]
    fn prop_host_rating_sort_is_non_increasing(gatherings in arb_gatherings()) {
        let view = filter_and_sort(&gatherings, &sort_only("host_rating"));
        prop_assert_eq!(view.len(), gatherings.len());
        prop_assert!(view.windows(2).all(|w| w[0].host_rating >= w[1].host_rating));
    }

    #[test]
    fn prop_latest_sort_is_non_increasing(gatherings in arb_gatherings()) {
        let view = filter_and_sort(&gatherings, &sort_only("latest"));
        prop_assert!(view.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn prop_filters_and_together(
        gatherings in arb_gatherings(),
        loc in 0usize..LOCATIONS.len(),
        position in 0usize..Position::ALL.len(),
    ) {
        let query = ListingQuery {
            location: Some(LOCATIONS[loc].to_string()),
            position: Some(Position::ALL[position]),
            ..Default::default()
        };

        let view = filter_and_sort(&gatherings, &query);
        let expected: Vec<i64> = gatherings
            .iter()
            .filter(|g| g.location == LOCATIONS[loc] && g.position_count(Position::ALL[position]) > 0)
            .map(|g| g.id)
            .collect();
        prop_assert_eq!(ids(&view), expected);
    }

    #[test]
    fn prop_listing_is_idempotent(
        gatherings in arb_gatherings(),
        sort in 0usize..SortKey::ALL.len(),
        position in 0usize..Position::ALL.len(),
    ) {
        let query = ListingQuery {
            position: Some(Position::ALL[position]),
            sort: SortKey::ALL[sort],
            ..Default::default()
        };
        let before = gatherings.clone();

        let first = filter_and_sort(&gatherings, &query);
        let second = filter_and_sort(&gatherings, &query);

        prop_assert_eq!(ids(&first), ids(&second));
        prop_assert_eq!(&gatherings, &before);
    }
}

#[test]
fn test_guest_listing_over_seed() {
    let services = seeded_services();
    let guest = &services.guest_service;

    let by_rating = guest.list(&sort_only("host_rating"));
    assert_eq!(ids(&by_rating), vec![3, 1, 2, 4]);

    let women_only = ListingQuery::from_params(ListingParams {
        gender: Some("여"),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(ids(&guest.list(&women_only)), vec![3]);

    // the stored order is untouched by listing
    let stored: Vec<i64> = guest.gatherings().iter().map(|g| g.id).collect();
    assert_eq!(stored, vec![1, 2, 3, 4]);
}

#[test]
fn test_invalid_hour_filter() {
    let result = ListingQuery::from_params(ListingParams {
        start_hour: Some("저녁"),
        ..Default::default()
    });
    assert!(result.is_err());
}
