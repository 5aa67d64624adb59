//! Shared wiring for handler unit tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::adapters::clock::FixedClock;
use crate::adapters::memory::{
    InMemoryCheckInRepository, InMemoryMemberDirectory, InMemoryPlanCatalog,
    InMemorySubscriptionRepository, InProcessMemberLock,
};
use crate::adapters::notifications::InMemoryNotificationSink;
use crate::domain::attendance::QuotaPolicy;
use crate::domain::foundation::{MemberId, PlanId, Timestamp};
use crate::domain::ledger::{MemberSummary, Plan};

use super::attendance::{ListCheckInsHandler, RecordCheckInHandler};
use super::ledger::{
    CancelSubscriptionHandler, CheckActiveSubscriptionHandler, EditSubscriptionHandler,
    EnrollSubscriptionHandler, GetSubscriptionHandler, ListSubscriptionsHandler,
    SubscriptionEnricher,
};

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Timestamp {
    Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap())
}

pub fn member(id: i64) -> MemberId {
    MemberId::new(id).unwrap()
}

pub fn plan(id: i64) -> PlanId {
    PlanId::new(id).unwrap()
}

/// In-memory adapters with a clock pinned to 2024-01-10 09:00 UTC.
///
/// Plans: 1 = one month at 100, 2 = three months at 8000.
/// Members: 7 (Ana), 8 (Bo).
pub struct Fixture {
    pub clock: Arc<FixedClock>,
    pub subscriptions: Arc<InMemorySubscriptionRepository>,
    pub check_ins: Arc<InMemoryCheckInRepository>,
    pub catalog: Arc<InMemoryPlanCatalog>,
    pub directory: Arc<InMemoryMemberDirectory>,
    pub locks: Arc<InProcessMemberLock>,
    pub sink: Arc<InMemoryNotificationSink>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_sink(InMemoryNotificationSink::new())
    }

    pub fn with_sink(sink: InMemoryNotificationSink) -> Self {
        Self {
            clock: Arc::new(FixedClock::at(at(2024, 1, 10, 9, 0, 0))),
            subscriptions: Arc::new(InMemorySubscriptionRepository::new()),
            check_ins: Arc::new(InMemoryCheckInRepository::new()),
            catalog: Arc::new(InMemoryPlanCatalog::with_plans([
                Plan::new(plan(1), "Start", 1, 100).unwrap(),
                Plan::new(plan(2), "Gold", 3, 8_000).unwrap(),
            ])),
            directory: Arc::new(InMemoryMemberDirectory::with_members([
                MemberSummary::new(member(7), "Ana Lima", "ana@example.com"),
                MemberSummary::new(member(8), "Bo Reis", "bo@example.com"),
            ])),
            locks: Arc::new(InProcessMemberLock::new()),
            sink: Arc::new(sink),
        }
    }

    pub fn enroll(&self) -> EnrollSubscriptionHandler {
        EnrollSubscriptionHandler::new(
            self.subscriptions.clone(),
            self.catalog.clone(),
            self.directory.clone(),
            self.locks.clone(),
            self.sink.clone(),
            self.clock.clone(),
        )
    }

    pub fn edit(&self) -> EditSubscriptionHandler {
        EditSubscriptionHandler::new(
            self.subscriptions.clone(),
            self.catalog.clone(),
            self.directory.clone(),
            self.locks.clone(),
            self.clock.clone(),
        )
    }

    pub fn cancel(&self) -> CancelSubscriptionHandler {
        CancelSubscriptionHandler::new(self.subscriptions.clone())
    }

    pub fn enricher(&self) -> SubscriptionEnricher {
        SubscriptionEnricher::new(self.catalog.clone(), self.directory.clone())
    }

    pub fn list(&self, per_page: u32) -> ListSubscriptionsHandler {
        ListSubscriptionsHandler::new(
            self.subscriptions.clone(),
            self.enricher(),
            self.clock.clone(),
            per_page,
        )
    }

    pub fn get(&self) -> GetSubscriptionHandler {
        GetSubscriptionHandler::new(self.subscriptions.clone(), self.enricher(), self.clock.clone())
    }

    pub fn check_active(&self) -> CheckActiveSubscriptionHandler {
        CheckActiveSubscriptionHandler::new(self.subscriptions.clone(), self.clock.clone())
    }

    pub fn record_check_in(&self) -> RecordCheckInHandler {
        RecordCheckInHandler::new(
            self.check_ins.clone(),
            Arc::new(self.check_active()),
            self.locks.clone(),
            self.clock.clone(),
            QuotaPolicy::default(),
        )
    }

    pub fn list_check_ins(&self, per_page: u32) -> ListCheckInsHandler {
        ListCheckInsHandler::new(self.check_ins.clone(), self.directory.clone(), per_page)
    }
}
