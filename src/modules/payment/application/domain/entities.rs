use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::cold_investor::application::domain::entities::DecisionMakerContact;
use crate::modules::vc::application::domain::entities::VcContact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    VcUnlock,
    IntroRequest,
    ProjectVisibility,
    DecisionMakerUnlock,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::VcUnlock => "vc_unlock",
            PaymentKind::IntroRequest => "intro_request",
            PaymentKind::ProjectVisibility => "project_visibility",
            PaymentKind::DecisionMakerUnlock => "decision_maker_unlock",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vc_unlock" => Ok(PaymentKind::VcUnlock),
            "intro_request" => Ok(PaymentKind::IntroRequest),
            "project_visibility" => Ok(PaymentKind::ProjectVisibility),
            "decision_maker_unlock" => Ok(PaymentKind::DecisionMakerUnlock),
            other => Err(format!("unknown payment kind '{}'", other)),
        }
    }
}

/// Only ever moves `Pending -> Completed` or `Pending -> Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(format!("unknown payment status '{}'", other)),
        }
    }
}

/// Ledger row keyed by the processor's intent id. Amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub founder_id: Uuid,
    pub vc_id: Option<Uuid>,
    pub decision_maker_id: Option<Uuid>,
    pub kind: PaymentKind,
    pub amount: i32,
    pub currency: String,
    pub status: PaymentStatus,
    pub intro_template: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub id: String,
    pub founder_id: Uuid,
    pub target: PaymentTarget,
    pub amount: i32,
    pub currency: String,
}

/// What a payment buys, with the id it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentTarget {
    VcUnlock { vc_id: Uuid },
    IntroRequest { vc_id: Uuid },
    ProjectVisibility,
    DecisionMakerUnlock { decision_maker_id: Uuid },
}

impl PaymentTarget {
    /// Pairs a kind with the id field it requires.
    pub fn from_parts(
        kind: PaymentKind,
        vc_id: Option<Uuid>,
        decision_maker_id: Option<Uuid>,
    ) -> Result<Self, String> {
        match kind {
            PaymentKind::VcUnlock => vc_id
                .map(|vc_id| PaymentTarget::VcUnlock { vc_id })
                .ok_or_else(|| "vcId is required for vc_unlock".to_string()),
            PaymentKind::IntroRequest => vc_id
                .map(|vc_id| PaymentTarget::IntroRequest { vc_id })
                .ok_or_else(|| "vcId is required for intro_request".to_string()),
            PaymentKind::ProjectVisibility => Ok(PaymentTarget::ProjectVisibility),
            PaymentKind::DecisionMakerUnlock => decision_maker_id
                .map(|decision_maker_id| PaymentTarget::DecisionMakerUnlock { decision_maker_id })
                .ok_or_else(|| "decisionMakerId is required for decision_maker_unlock".to_string()),
        }
    }

    pub fn kind(&self) -> PaymentKind {
        match self {
            PaymentTarget::VcUnlock { .. } => PaymentKind::VcUnlock,
            PaymentTarget::IntroRequest { .. } => PaymentKind::IntroRequest,
            PaymentTarget::ProjectVisibility => PaymentKind::ProjectVisibility,
            PaymentTarget::DecisionMakerUnlock { .. } => PaymentKind::DecisionMakerUnlock,
        }
    }

    pub fn vc_id(&self) -> Option<Uuid> {
        match self {
            PaymentTarget::VcUnlock { vc_id } | PaymentTarget::IntroRequest { vc_id } => {
                Some(*vc_id)
            }
            _ => None,
        }
    }

    pub fn decision_maker_id(&self) -> Option<Uuid> {
        match self {
            PaymentTarget::DecisionMakerUnlock { decision_maker_id } => Some(*decision_maker_id),
            _ => None,
        }
    }
}

impl Payment {
    pub fn target(&self) -> Result<PaymentTarget, String> {
        PaymentTarget::from_parts(self.kind, self.vc_id, self.decision_maker_id)
    }
}

/// The signed-in founder paying.
#[derive(Debug, Clone, PartialEq)]
pub struct Payer {
    pub user_id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub payment_id: String,
    pub client_secret: String,
    pub amount: i32,
    pub currency: String,
}

/// Processor-side state of an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentStatus {
    Succeeded,
    Canceled,
    Other(String),
}

impl From<&str> for IntentStatus {
    fn from(s: &str) -> Self {
        match s {
            "succeeded" => IntentStatus::Succeeded,
            "canceled" => IntentStatus::Canceled,
            other => IntentStatus::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorIntent {
    pub id: String,
    pub client_secret: Option<String>,
    pub status: IntentStatus,
}

/// What confirming a payment delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fulfilment {
    #[serde(rename_all = "camelCase")]
    VcUnlocked {
        vc_id: Uuid,
        contact: VcContact,
        intro_template: String,
    },
    #[serde(rename_all = "camelCase")]
    IntroRequested { vc_id: Uuid },
    #[serde(rename_all = "camelCase")]
    ProjectVisible { founder_id: Uuid },
    #[serde(rename_all = "camelCase")]
    DecisionMakerUnlocked { contact: DecisionMakerContact },
}

impl Fulfilment {
    pub fn intro_template(&self) -> Option<String> {
        match self {
            Fulfilment::VcUnlocked { intro_template, .. } => Some(intro_template.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub payment: Payment,
    pub fulfilment: Fulfilment,
}

/// Flat prices for kinds not priced by a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    pub project_visibility_price: i32,
    pub decision_maker_unlock_price: i32,
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            project_visibility_price: 49,
            decision_maker_unlock_price: 1,
            currency: "usd".to_string(),
        }
    }
}

/// Processor amounts are in the smallest currency unit.
pub fn to_minor_units(amount: i32) -> i64 {
    i64::from(amount) * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_requires_matching_id() {
        let vc_id = Uuid::new_v4();

        assert_eq!(
            PaymentTarget::from_parts(PaymentKind::VcUnlock, Some(vc_id), None).unwrap(),
            PaymentTarget::VcUnlock { vc_id }
        );
        assert!(PaymentTarget::from_parts(PaymentKind::IntroRequest, None, None).is_err());
        assert!(PaymentTarget::from_parts(PaymentKind::DecisionMakerUnlock, Some(vc_id), None).is_err());
        assert_eq!(
            PaymentTarget::from_parts(PaymentKind::ProjectVisibility, None, None).unwrap(),
            PaymentTarget::ProjectVisibility
        );
    }

    #[test]
    fn test_target_ids() {
        let id = Uuid::new_v4();
        let target = PaymentTarget::DecisionMakerUnlock { decision_maker_id: id };

        assert_eq!(target.kind(), PaymentKind::DecisionMakerUnlock);
        assert_eq!(target.decision_maker_id(), Some(id));
        assert_eq!(target.vc_id(), None);
    }

    #[test]
    fn test_intent_status_parsing() {
        assert_eq!(IntentStatus::from("succeeded"), IntentStatus::Succeeded);
        assert_eq!(IntentStatus::from("canceled"), IntentStatus::Canceled);
        assert_eq!(
            IntentStatus::from("requires_payment_method"),
            IntentStatus::Other("requires_payment_method".to_string())
        );
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(to_minor_units(150), 15_000);
        assert_eq!(to_minor_units(1), 100);
    }

    #[test]
    fn test_fulfilment_is_tagged_by_kind() {
        let founder_id = Uuid::new_v4();
        let json = serde_json::to_value(Fulfilment::ProjectVisible { founder_id }).unwrap();

        assert_eq!(json["kind"], "project_visible");
        assert_eq!(json["founderId"], founder_id.to_string());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("vc_unlock".parse::<PaymentKind>().unwrap(), PaymentKind::VcUnlock);
        assert!("refund".parse::<PaymentKind>().is_err());
    }
}
