//! End-to-end subscription ledger scenarios over in-memory adapters.

mod common;

use chrono::NaiveDate;

use common::{at, member, plan, Harness};
use gympoint_ledger::application::handlers::{
    CancelSubscriptionCommand, EditSubscriptionCommand, EnrollSubscriptionCommand,
    GetSubscriptionQuery, ListSubscriptionsQuery,
};
use gympoint_ledger::domain::foundation::Timestamp;
use gympoint_ledger::domain::ledger::LedgerError;

fn enroll_cmd(member_id: i64, plan_id: i64, start: Timestamp) -> EnrollSubscriptionCommand {
    EnrollSubscriptionCommand {
        member_id: member(member_id),
        plan_id: plan(plan_id),
        start_date: start,
    }
}

#[tokio::test]
async fn one_month_plan_blocks_until_the_day_after_it_ends() {
    let h = Harness::new();
    let enroll = &h.state.enroll_subscription;

    let first = enroll
        .handle(enroll_cmd(7, 1, Timestamp::from_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())))
        .await
        .unwrap()
        .subscription;
    assert_eq!(first.start_date, at(2024, 1, 10, 0, 0, 0));
    assert_eq!(first.end_date, at(2024, 2, 10, 0, 0, 0).end_of_day());
    assert_eq!(first.total_price_cents, 100);

    let err = enroll
        .handle(enroll_cmd(7, 1, at(2024, 1, 20, 0, 0, 0)))
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::overlapping(member(7)));

    let second = enroll
        .handle(enroll_cmd(7, 1, at(2024, 2, 11, 0, 0, 0)))
        .await
        .unwrap()
        .subscription;
    assert!(second.start_date > first.end_date);
    assert_eq!(h.subscriptions.all_for_member(&member(7)).await.len(), 2);
}

#[tokio::test]
async fn start_today_at_any_hour_is_accepted_but_yesterday_is_not() {
    let h = Harness::new();
    let enroll = &h.state.enroll_subscription;

    let err = enroll
        .handle(enroll_cmd(7, 1, at(2024, 1, 9, 23, 59, 59)))
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidStartDate { .. }));

    // 00:00 today is earlier than the 09:00 clock but still today.
    let sub = enroll
        .handle(enroll_cmd(7, 1, at(2024, 1, 10, 0, 0, 0)))
        .await
        .unwrap()
        .subscription;
    assert_eq!(sub.start_date, at(2024, 1, 10, 0, 0, 0));
}

#[tokio::test]
async fn is_active_follows_the_clock_across_the_period() {
    let h = Harness::new();
    let check = &h.state.check_active_subscription;

    h.state
        .enroll_subscription
        .handle(enroll_cmd(7, 1, at(2024, 1, 15, 0, 0, 0)))
        .await
        .unwrap();

    assert!(!check.handle(member(7)).await.unwrap(), "future subscription is not active");

    h.clock.set(at(2024, 1, 15, 0, 0, 0));
    assert!(check.handle(member(7)).await.unwrap());

    h.clock.set(at(2024, 2, 15, 23, 59, 59));
    assert!(check.handle(member(7)).await.unwrap());

    h.clock.set(at(2024, 2, 16, 0, 0, 0));
    assert!(!check.handle(member(7)).await.unwrap());
}

#[tokio::test]
async fn listing_hides_ended_subscriptions() {
    let h = Harness::new();
    let enroll = &h.state.enroll_subscription;
    enroll.handle(enroll_cmd(7, 1, at(2024, 1, 10, 0, 0, 0))).await.unwrap();
    enroll.handle(enroll_cmd(8, 2, at(2024, 1, 10, 0, 0, 0))).await.unwrap();

    let page = h
        .state
        .list_subscriptions
        .handle(ListSubscriptionsQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total, 2);
    // Latest end date first.
    assert_eq!(page.items[0].subscription.member_id, Some(member(8)));
    assert!(page.items.iter().all(|v| v.is_active));

    h.clock.set(at(2024, 3, 1, 9, 0, 0));
    let page = h
        .state
        .list_subscriptions
        .handle(ListSubscriptionsQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].subscription.member_id, Some(member(8)));
}

#[tokio::test]
async fn edit_then_cancel_round_trip() {
    let h = Harness::new();
    let sub = h
        .state
        .enroll_subscription
        .handle(enroll_cmd(7, 1, at(2024, 1, 10, 0, 0, 0)))
        .await
        .unwrap()
        .subscription;

    let edited = h
        .state
        .edit_subscription
        .handle(EditSubscriptionCommand {
            subscription_id: sub.id,
            plan_id: plan(2),
            start_date: at(2024, 1, 31, 0, 0, 0),
        })
        .await
        .unwrap()
        .subscription;
    // Jan 31 + 3 months clamps to Apr 30.
    assert_eq!(edited.end_date.date(), NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
    assert_eq!(edited.total_price_cents, 24_000);

    let view = h
        .state
        .get_subscription
        .handle(GetSubscriptionQuery { subscription_id: sub.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.subscription, edited);
    assert!(!view.is_active);
    assert_eq!(view.plan.map(|p| p.title), Some("Gold".to_string()));

    h.state
        .cancel_subscription
        .handle(CancelSubscriptionCommand { subscription_id: sub.id })
        .await
        .unwrap();
    let err = h
        .state
        .cancel_subscription
        .handle(CancelSubscriptionCommand { subscription_id: sub.id })
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::subscription_not_found(sub.id));

    let gone = h
        .state
        .get_subscription
        .handle(GetSubscriptionQuery { subscription_id: sub.id })
        .await
        .unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn welcome_notification_is_sent_once_per_enrollment() {
    let h = Harness::new();
    h.state
        .enroll_subscription
        .handle(enroll_cmd(7, 2, at(2024, 1, 10, 0, 0, 0)))
        .await
        .unwrap();
    let _ = h
        .state
        .enroll_subscription
        .handle(enroll_cmd(7, 2, at(2024, 1, 11, 0, 0, 0)))
        .await;

    let delivered = h.sink.events_of_type("subscription.created.v1").await;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].payload["member"]["name"], "Ana Lima");
}
