//! Shared application state for the HTTP routes.

use std::sync::Arc;

use crate::application::handlers::{
    CancelSubscriptionHandler, CheckActiveSubscriptionHandler, EditSubscriptionHandler,
    EnrollSubscriptionHandler, GetSubscriptionHandler, ListCheckInsHandler,
    ListSubscriptionsHandler, RecordCheckInHandler, SubscriptionEnricher,
};
use crate::domain::attendance::QuotaPolicy;
use crate::ports::{
    CheckInRepository, Clock, MemberDirectory, MemberLock, NotificationSink, PlanCatalog,
    SubscriptionRepository,
};

/// Ports and settings the handlers are built from.
pub struct AppDependencies {
    pub subscription_repository: Arc<dyn SubscriptionRepository>,
    pub check_in_repository: Arc<dyn CheckInRepository>,
    pub plan_catalog: Arc<dyn PlanCatalog>,
    pub member_directory: Arc<dyn MemberDirectory>,
    pub member_lock: Arc<dyn MemberLock>,
    pub notifications: Arc<dyn NotificationSink>,
    pub clock: Arc<dyn Clock>,
    pub quota_policy: QuotaPolicy,
    pub subscriptions_per_page: u32,
    pub check_ins_per_page: u32,
}

/// Handlers built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub enroll_subscription: Arc<EnrollSubscriptionHandler>,
    pub edit_subscription: Arc<EditSubscriptionHandler>,
    pub cancel_subscription: Arc<CancelSubscriptionHandler>,
    pub list_subscriptions: Arc<ListSubscriptionsHandler>,
    pub get_subscription: Arc<GetSubscriptionHandler>,
    pub check_active_subscription: Arc<CheckActiveSubscriptionHandler>,
    pub record_check_in: Arc<RecordCheckInHandler>,
    pub list_check_ins: Arc<ListCheckInsHandler>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(deps: AppDependencies) -> Self {
        let enricher =
            SubscriptionEnricher::new(deps.plan_catalog.clone(), deps.member_directory.clone());
        let check_active = Arc::new(CheckActiveSubscriptionHandler::new(
            deps.subscription_repository.clone(),
            deps.clock.clone(),
        ));

        Self {
            enroll_subscription: Arc::new(EnrollSubscriptionHandler::new(
                deps.subscription_repository.clone(),
                deps.plan_catalog.clone(),
                deps.member_directory.clone(),
                deps.member_lock.clone(),
                deps.notifications.clone(),
                deps.clock.clone(),
            )),
            edit_subscription: Arc::new(EditSubscriptionHandler::new(
                deps.subscription_repository.clone(),
                deps.plan_catalog.clone(),
                deps.member_directory.clone(),
                deps.member_lock.clone(),
                deps.clock.clone(),
            )),
            cancel_subscription: Arc::new(CancelSubscriptionHandler::new(
                deps.subscription_repository.clone(),
            )),
            list_subscriptions: Arc::new(ListSubscriptionsHandler::new(
                deps.subscription_repository.clone(),
                enricher.clone(),
                deps.clock.clone(),
                deps.subscriptions_per_page,
            )),
            get_subscription: Arc::new(GetSubscriptionHandler::new(
                deps.subscription_repository.clone(),
                enricher,
                deps.clock.clone(),
            )),
            check_active_subscription: check_active.clone(),
            record_check_in: Arc::new(RecordCheckInHandler::new(
                deps.check_in_repository.clone(),
                check_active.clone(),
                deps.member_lock.clone(),
                deps.clock.clone(),
                deps.quota_policy,
            )),
            list_check_ins: Arc::new(ListCheckInsHandler::new(
                deps.check_in_repository,
                deps.member_directory,
                deps.check_ins_per_page,
            )),
            clock: deps.clock,
        }
    }
}
