//! Shared wiring for integration tests: every port backed in memory, clock
//! pinned to 2024-01-10 09:00 UTC.
//!
//! Plans: 1 = "Start" (1 month, 100/month), 2 = "Gold" (3 months, 8000/month).
//! Members: 7 = Ana Lima, 8 = Bo Reis.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use gympoint_ledger::adapters::http::{AppDependencies, AppState};
use gympoint_ledger::adapters::memory::{
    InMemoryCheckInRepository, InMemoryMemberDirectory, InMemoryPlanCatalog,
    InMemorySubscriptionRepository, InProcessMemberLock,
};
use gympoint_ledger::adapters::notifications::InMemoryNotificationSink;
use gympoint_ledger::adapters::FixedClock;
use gympoint_ledger::domain::attendance::QuotaPolicy;
use gympoint_ledger::domain::foundation::{MemberId, PlanId, Timestamp};
use gympoint_ledger::domain::ledger::{MemberSummary, Plan};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap())
}

pub fn member(id: i64) -> MemberId {
    MemberId::new(id).unwrap()
}

pub fn plan(id: i64) -> PlanId {
    PlanId::new(id).unwrap()
}

pub struct Harness {
    pub clock: Arc<FixedClock>,
    pub subscriptions: Arc<InMemorySubscriptionRepository>,
    pub check_ins: Arc<InMemoryCheckInRepository>,
    pub sink: Arc<InMemoryNotificationSink>,
    pub state: AppState,
}

impl Harness {
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::at(at(2024, 1, 10, 9, 0, 0)));
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let check_ins = Arc::new(InMemoryCheckInRepository::new());
        let sink = Arc::new(InMemoryNotificationSink::new());

        let state = AppState::new(AppDependencies {
            subscription_repository: subscriptions.clone(),
            check_in_repository: check_ins.clone(),
            plan_catalog: Arc::new(InMemoryPlanCatalog::with_plans([
                Plan::new(plan(1), "Start", 1, 100).unwrap(),
                Plan::new(plan(2), "Gold", 3, 8_000).unwrap(),
            ])),
            member_directory: Arc::new(InMemoryMemberDirectory::with_members([
                MemberSummary::new(member(7), "Ana Lima", "ana@example.com"),
                MemberSummary::new(member(8), "Bo Reis", "bo@example.com"),
            ])),
            member_lock: Arc::new(InProcessMemberLock::new()),
            notifications: sink.clone(),
            clock: clock.clone(),
            quota_policy: QuotaPolicy::default(),
            subscriptions_per_page: 20,
            check_ins_per_page: 10,
        });

        Self {
            clock,
            subscriptions,
            check_ins,
            sink,
            state,
        }
    }
}
