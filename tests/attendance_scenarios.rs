//! End-to-end check-in quota scenarios over in-memory adapters.

mod common;

use common::{at, member, plan, Harness};
use gympoint_ledger::application::handlers::{
    EnrollSubscriptionCommand, ListCheckInsQuery, RecordCheckInCommand,
};
use gympoint_ledger::domain::attendance::AttendanceError;

async fn subscribe(h: &Harness, member_id: i64) {
    h.state
        .enroll_subscription
        .handle(EnrollSubscriptionCommand {
            member_id: member(member_id),
            plan_id: plan(2),
            start_date: at(2024, 1, 10, 0, 0, 0),
        })
        .await
        .unwrap();
}

fn check_in(member_id: i64) -> RecordCheckInCommand {
    RecordCheckInCommand {
        member_id: member(member_id),
    }
}

#[tokio::test]
async fn five_a_week_then_rejected_until_the_oldest_ages_out() {
    let h = Harness::new();
    subscribe(&h, 7).await;

    // Days 1..=5 at 08:00.
    for (i, day) in (11..=15).enumerate() {
        h.clock.set(at(2024, 1, day, 8, 0, 0));
        let result = h.state.record_check_in.handle(check_in(7)).await.unwrap();
        assert_eq!(result.running_count, i as u64 + 1);
    }

    // Day 6.
    h.clock.set(at(2024, 1, 16, 8, 0, 0));
    let err = h.state.record_check_in.handle(check_in(7)).await.unwrap_err();
    assert_eq!(err, AttendanceError::quota_exceeded(member(7), 5, 7));

    // Day 8 in the evening: day 1 is outside the trailing window.
    h.clock.set(at(2024, 1, 18, 18, 0, 0));
    let result = h.state.record_check_in.handle(check_in(7)).await.unwrap();
    assert_eq!(result.running_count, 5);

    assert_eq!(h.check_ins.all_for_member(&member(7)).await.len(), 6);
}

#[tokio::test]
async fn check_in_before_subscription_starts_is_rejected() {
    let h = Harness::new();
    h.state
        .enroll_subscription
        .handle(EnrollSubscriptionCommand {
            member_id: member(7),
            plan_id: plan(1),
            start_date: at(2024, 2, 1, 0, 0, 0),
        })
        .await
        .unwrap();

    let err = h.state.record_check_in.handle(check_in(7)).await.unwrap_err();
    assert_eq!(err, AttendanceError::no_active_subscription(member(7)));

    h.clock.set(at(2024, 2, 1, 7, 30, 0));
    assert!(h.state.record_check_in.handle(check_in(7)).await.is_ok());
}

#[tokio::test]
async fn check_in_after_subscription_ends_is_rejected() {
    let h = Harness::new();
    subscribe(&h, 7).await;

    h.clock.set(at(2024, 4, 11, 0, 0, 0));
    let err = h.state.record_check_in.handle(check_in(7)).await.unwrap_err();
    assert_eq!(err, AttendanceError::no_active_subscription(member(7)));
}

#[tokio::test]
async fn history_is_paginated_newest_first() {
    let h = Harness::new();
    subscribe(&h, 7).await;

    // Twelve check-ins spaced two days apart stay under the quota.
    for n in 0..12 {
        h.clock.set(at(2024, 1, 10, 9, 0, 0).add_days(n * 2));
        h.state.record_check_in.handle(check_in(7)).await.unwrap();
    }

    let first = h
        .state
        .list_check_ins
        .handle(ListCheckInsQuery {
            member_id: member(7),
            page: None,
        })
        .await
        .unwrap();
    assert_eq!(first.check_ins.total, 12);
    assert_eq!(first.check_ins.items.len(), 10);
    assert_eq!(first.check_ins.items[0].created_at, at(2024, 2, 1, 9, 0, 0));

    let second = h
        .state
        .list_check_ins
        .handle(ListCheckInsQuery {
            member_id: member(7),
            page: Some(2),
        })
        .await
        .unwrap();
    assert_eq!(second.check_ins.items.len(), 2);
    assert_eq!(second.check_ins.items[1].created_at, at(2024, 1, 10, 9, 0, 0));
    assert_eq!(second.member.name, "Ana Lima");
}

#[tokio::test]
async fn history_for_unknown_member_is_not_found() {
    let h = Harness::new();
    let err = h
        .state
        .list_check_ins
        .handle(ListCheckInsQuery {
            member_id: member(404),
            page: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err, AttendanceError::member_not_found(member(404)));
}
