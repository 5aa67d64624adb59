//! Ledger domain events.
//!
//! Events are named in past tense. They are handed to the notification sink,
//! which feeds the welcome mail sent when a member enrolls.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainEvent, EventId, SubscriptionId, Timestamp};

use super::{MemberSummary, Plan, Subscription};

/// Plan details carried in event payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub title: String,
    pub duration_months: u32,
    pub monthly_price_cents: i64,
}

impl From<&Plan> for PlanSnapshot {
    fn from(plan: &Plan) -> Self {
        Self {
            title: plan.title.clone(),
            duration_months: plan.duration_months,
            monthly_price_cents: plan.monthly_price_cents,
        }
    }
}

/// Events emitted by the subscription ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubscriptionEvent {
    /// A member enrolled in a plan.
    Created {
        event_id: EventId,
        subscription_id: SubscriptionId,
        member: MemberSummary,
        plan: PlanSnapshot,
        start_date: Timestamp,
        end_date: Timestamp,
        total_price_cents: i64,
        occurred_at: Timestamp,
    },
}

impl SubscriptionEvent {
    /// Builds the event raised after a successful enrollment.
    pub fn created(subscription: &Subscription, plan: &Plan, member: &MemberSummary) -> Self {
        SubscriptionEvent::Created {
            event_id: EventId::new(),
            subscription_id: subscription.id,
            member: member.clone(),
            plan: PlanSnapshot::from(plan),
            start_date: subscription.start_date,
            end_date: subscription.end_date,
            total_price_cents: subscription.total_price_cents,
            occurred_at: subscription.created_at,
        }
    }

    pub fn subscription_id(&self) -> SubscriptionId {
        match self {
            SubscriptionEvent::Created { subscription_id, .. } => *subscription_id,
        }
    }
}

impl DomainEvent for SubscriptionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SubscriptionEvent::Created { .. } => "subscription.created.v1",
        }
    }

    fn aggregate_id(&self) -> String {
        self.subscription_id().to_string()
    }

    fn aggregate_type(&self) -> &'static str {
        "Subscription"
    }

    fn occurred_at(&self) -> Timestamp {
        match self {
            SubscriptionEvent::Created { occurred_at, .. } => *occurred_at,
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            SubscriptionEvent::Created { event_id, .. } => event_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MemberId, PlanId, SerializableDomainEvent};
    use chrono::{TimeZone, Utc};

    fn fixture() -> (Subscription, Plan, MemberSummary) {
        let now = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap());
        let plan = Plan::new(PlanId::new(1).unwrap(), "Gold", 3, 12_900).unwrap();
        let member = MemberSummary::new(MemberId::new(7).unwrap(), "Ana Lima", "ana@example.com");
        let sub = Subscription::enroll(member.id, &plan, now, now).unwrap();
        (sub, plan, member)
    }

    #[test]
    fn created_event_carries_welcome_details() {
        let (sub, plan, member) = fixture();
        let event = SubscriptionEvent::created(&sub, &plan, &member);

        match &event {
            SubscriptionEvent::Created {
                member: m,
                plan: p,
                end_date,
                total_price_cents,
                ..
            } => {
                assert_eq!(m.email, "ana@example.com");
                assert_eq!(p.title, "Gold");
                assert_eq!(p.monthly_price_cents, 12_900);
                assert_eq!(*end_date, sub.end_date);
                assert_eq!(*total_price_cents, 38_700);
            }
        }
        assert_eq!(event.occurred_at(), sub.created_at);
    }

    #[test]
    fn envelope_is_versioned_and_keyed_by_subscription() {
        let (sub, plan, member) = fixture();
        let envelope = SubscriptionEvent::created(&sub, &plan, &member).to_envelope();

        assert_eq!(envelope.event_type, "subscription.created.v1");
        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.aggregate_type, "Subscription");
        assert_eq!(envelope.aggregate_id, sub.id.to_string());
        assert_eq!(envelope.payload["kind"], "created");
    }

    #[test]
    fn payload_roundtrips() {
        let (sub, plan, member) = fixture();
        let event = SubscriptionEvent::created(&sub, &plan, &member);
        let restored: SubscriptionEvent = event.to_envelope().payload_as().unwrap();
        assert_eq!(restored, event);
    }
}
