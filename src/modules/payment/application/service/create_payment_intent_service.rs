use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::payment::application::domain::entities::{
    to_minor_units, IntentStatus, NewPayment, Payer, PaymentIntent, PaymentTarget, PricingConfig,
};
use crate::modules::payment::application::ports::incoming::use_cases::{
    CreatePaymentIntentError, CreatePaymentIntentUseCase,
};
use crate::modules::payment::application::ports::outgoing::IntentRequest;
use crate::modules::payment::application::service::PaymentPorts;
use crate::shared::email::normalize_email;

pub struct CreatePaymentIntentService {
    ports: PaymentPorts,
    pricing: PricingConfig,
}

impl CreatePaymentIntentService {
    pub fn new(ports: PaymentPorts, pricing: PricingConfig) -> Self {
        Self { ports, pricing }
    }

    /// Hands back the founder's open intent for the same target so one
    /// purchase never has two chargeable intents. A canceled one is closed
    /// out and a fresh intent is opened instead.
    async fn reuse_pending(
        &self,
        founder_id: Uuid,
        target: &PaymentTarget,
    ) -> Result<Option<PaymentIntent>, CreatePaymentIntentError> {
        let pending = match self
            .ports
            .payments
            .find_pending(founder_id, target)
            .await
            .map_err(repo_err)?
        {
            Some(pending) => pending,
            None => return Ok(None),
        };

        let intent = self
            .ports
            .gateway
            .retrieve_intent(&pending.id)
            .await
            .map_err(provider_err)?;

        match (intent.status, intent.client_secret) {
            (IntentStatus::Canceled, _) => {
                self.ports
                    .payments
                    .mark_failed(&pending.id)
                    .await
                    .map_err(repo_err)?;
                Ok(None)
            }
            (_, Some(client_secret)) => {
                tracing::info!(
                    payment_id = %pending.id,
                    founder_id = %founder_id,
                    kind = %pending.kind,
                    "Reusing pending payment intent"
                );
                Ok(Some(PaymentIntent {
                    payment_id: pending.id,
                    client_secret,
                    amount: pending.amount,
                    currency: pending.currency,
                }))
            }
            (_, None) => Err(provider_err("intent has no client secret")),
        }
    }
}

fn repo_err(e: impl ToString) -> CreatePaymentIntentError {
    CreatePaymentIntentError::RepositoryError(e.to_string())
}

fn provider_err(e: impl ToString) -> CreatePaymentIntentError {
    CreatePaymentIntentError::ProviderError(e.to_string())
}

#[async_trait]
impl CreatePaymentIntentUseCase for CreatePaymentIntentService {
    async fn execute(
        &self,
        payer: Payer,
        target: PaymentTarget,
    ) -> Result<PaymentIntent, CreatePaymentIntentError> {
        let founder = self
            .ports
            .founders
            .ensure_for_user(payer.user_id)
            .await
            .map_err(repo_err)?;

        let amount = match target {
            PaymentTarget::VcUnlock { vc_id } => {
                let vc = self
                    .ports
                    .vcs
                    .find_by_id(vc_id)
                    .await
                    .map_err(repo_err)?
                    .ok_or(CreatePaymentIntentError::VcNotFound)?;

                if self
                    .ports
                    .unlocks
                    .has_unlocked(founder.id, vc_id)
                    .await
                    .map_err(repo_err)?
                {
                    return Err(CreatePaymentIntentError::AlreadyUnlocked);
                }
                vc.card.price
            }
            PaymentTarget::IntroRequest { vc_id } => {
                let vc = self
                    .ports
                    .vcs
                    .find_by_id(vc_id)
                    .await
                    .map_err(repo_err)?
                    .ok_or(CreatePaymentIntentError::VcNotFound)?;

                vc.card
                    .intro_price
                    .ok_or(CreatePaymentIntentError::IntroNotOffered)?
            }
            PaymentTarget::ProjectVisibility => {
                if founder.is_visible {
                    return Err(CreatePaymentIntentError::AlreadyVisible);
                }
                self.pricing.project_visibility_price
            }
            PaymentTarget::DecisionMakerUnlock { decision_maker_id } => {
                self.ports
                    .cold_investors
                    .find_decision_maker(decision_maker_id)
                    .await
                    .map_err(repo_err)?
                    .ok_or(CreatePaymentIntentError::DecisionMakerNotFound)?;

                let email = normalize_email(&payer.email).map_err(repo_err)?;
                if self
                    .ports
                    .cold_investors
                    .is_unlocked(&email, decision_maker_id)
                    .await
                    .map_err(repo_err)?
                {
                    return Err(CreatePaymentIntentError::AlreadyUnlocked);
                }
                self.pricing.decision_maker_unlock_price
            }
        };

        if let Some(intent) = self.reuse_pending(founder.id, &target).await? {
            return Ok(intent);
        }

        let intent = self
            .ports
            .gateway
            .create_intent(IntentRequest {
                amount_minor: to_minor_units(amount),
                currency: self.pricing.currency.clone(),
                kind: target.kind(),
                founder_id: founder.id,
                target_id: target.vc_id().or(target.decision_maker_id()),
            })
            .await
            .map_err(provider_err)?;

        let client_secret = intent
            .client_secret
            .clone()
            .ok_or_else(|| provider_err("intent has no client secret"))?;

        let payment = self
            .ports
            .payments
            .insert(NewPayment {
                id: intent.id,
                founder_id: founder.id,
                target,
                amount,
                currency: self.pricing.currency.clone(),
            })
            .await
            .map_err(repo_err)?;

        tracing::info!(
            payment_id = %payment.id,
            founder_id = %founder.id,
            kind = %payment.kind,
            amount,
            "Payment intent created"
        );

        Ok(PaymentIntent {
            payment_id: payment.id,
            client_secret,
            amount,
            currency: payment.currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::payment::application::domain::entities::{PaymentKind, PaymentStatus};
    use crate::tests::support::fixtures::{founder_profile, vc_listing};
    use crate::tests::support::mock_ports::{MockVcUnlockQuery, PaymentHarness};
    use uuid::Uuid;

    fn payer() -> Payer {
        Payer {
            user_id: Uuid::new_v4(),
            email: "founder@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_vc_unlock_charges_listing_price() {
        let listing = vc_listing();
        let vc_id = listing.card.id;
        let harness = PaymentHarness::new(founder_profile(false)).with_vcs(vec![listing]);
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let intent = service
            .execute(payer(), PaymentTarget::VcUnlock { vc_id })
            .await
            .unwrap();

        assert_eq!(intent.amount, 150);
        assert_eq!(intent.currency, "usd");
        assert!(!intent.client_secret.is_empty());

        let request = harness.gateway.last_request().unwrap();
        assert_eq!(request.amount_minor, 15_000);
        assert_eq!(request.target_id, Some(vc_id));

        let stored = harness.payments.get(&intent.payment_id).unwrap();
        assert_eq!(stored.kind, PaymentKind::VcUnlock);
        assert_eq!(stored.status, PaymentStatus::Pending);
        assert_eq!(stored.vc_id, Some(vc_id));
    }

    #[tokio::test]
    async fn test_vc_unlock_rejected_when_already_unlocked() {
        let listing = vc_listing();
        let vc_id = listing.card.id;
        let harness = PaymentHarness::new(founder_profile(false))
            .with_vcs(vec![listing])
            .with_unlocks(MockVcUnlockQuery::unlocked(vec![vc_id]));
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let err = service
            .execute(payer(), PaymentTarget::VcUnlock { vc_id })
            .await
            .unwrap_err();

        assert!(matches!(err, CreatePaymentIntentError::AlreadyUnlocked));
        assert!(harness.gateway.last_request().is_none());
    }

    #[tokio::test]
    async fn test_unknown_vc() {
        let harness = PaymentHarness::new(founder_profile(false));
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let err = service
            .execute(payer(), PaymentTarget::VcUnlock { vc_id: Uuid::new_v4() })
            .await
            .unwrap_err();

        assert!(matches!(err, CreatePaymentIntentError::VcNotFound));
    }

    #[tokio::test]
    async fn test_intro_request_requires_intro_price() {
        let mut listing = vc_listing();
        listing.card.intro_price = None;
        let vc_id = listing.card.id;
        let harness = PaymentHarness::new(founder_profile(false)).with_vcs(vec![listing]);
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let err = service
            .execute(payer(), PaymentTarget::IntroRequest { vc_id })
            .await
            .unwrap_err();

        assert!(matches!(err, CreatePaymentIntentError::IntroNotOffered));
    }

    #[tokio::test]
    async fn test_intro_request_charges_intro_price() {
        let mut listing = vc_listing();
        listing.card.intro_price = Some(75);
        let vc_id = listing.card.id;
        let harness = PaymentHarness::new(founder_profile(false)).with_vcs(vec![listing]);
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let intent = service
            .execute(payer(), PaymentTarget::IntroRequest { vc_id })
            .await
            .unwrap();

        assert_eq!(intent.amount, 75);
    }

    #[tokio::test]
    async fn test_project_visibility_uses_flat_price() {
        let harness = PaymentHarness::new(founder_profile(false));
        let pricing = PricingConfig {
            project_visibility_price: 29,
            ..PricingConfig::default()
        };
        let service = CreatePaymentIntentService::new(harness.ports(), pricing);

        let intent = service
            .execute(payer(), PaymentTarget::ProjectVisibility)
            .await
            .unwrap();

        assert_eq!(intent.amount, 29);
    }

    #[tokio::test]
    async fn test_project_visibility_rejected_when_visible() {
        let harness = PaymentHarness::new(founder_profile(true));
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let err = service
            .execute(payer(), PaymentTarget::ProjectVisibility)
            .await
            .unwrap_err();

        assert!(matches!(err, CreatePaymentIntentError::AlreadyVisible));
    }

    #[tokio::test]
    async fn test_decision_maker_unlock() {
        let harness = PaymentHarness::new(founder_profile(false));
        let decision_maker_id = harness.decision_maker_id();
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let intent = service
            .execute(payer(), PaymentTarget::DecisionMakerUnlock { decision_maker_id })
            .await
            .unwrap();

        assert_eq!(intent.amount, 1);
        let stored = harness.payments.get(&intent.payment_id).unwrap();
        assert_eq!(stored.decision_maker_id, Some(decision_maker_id));
    }

    #[tokio::test]
    async fn test_decision_maker_already_unlocked_by_email() {
        let harness = PaymentHarness::new(founder_profile(false));
        let decision_maker_id = harness.decision_maker_id();
        harness.unlock_decision_maker("founder@example.com", decision_maker_id);
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let err = service
            .execute(payer(), PaymentTarget::DecisionMakerUnlock { decision_maker_id })
            .await
            .unwrap_err();

        assert!(matches!(err, CreatePaymentIntentError::AlreadyUnlocked));
    }

    #[tokio::test]
    async fn test_unknown_decision_maker() {
        let harness = PaymentHarness::new(founder_profile(false));
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let err = service
            .execute(
                payer(),
                PaymentTarget::DecisionMakerUnlock {
                    decision_maker_id: Uuid::new_v4(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CreatePaymentIntentError::DecisionMakerNotFound));
    }

    #[tokio::test]
    async fn test_processor_failure_stores_nothing() {
        let harness = PaymentHarness::new(founder_profile(false)).with_failing_gateway();
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let err = service
            .execute(payer(), PaymentTarget::ProjectVisibility)
            .await
            .unwrap_err();

        assert!(matches!(err, CreatePaymentIntentError::ProviderError(_)));
        assert_eq!(harness.payments.len(), 0);
    }

    #[tokio::test]
    async fn test_second_intent_for_same_vc_reuses_pending() {
        let listing = vc_listing();
        let vc_id = listing.card.id;
        let harness = PaymentHarness::new(founder_profile(false)).with_vcs(vec![listing]);
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let first = service
            .execute(payer(), PaymentTarget::VcUnlock { vc_id })
            .await
            .unwrap();
        let second = service
            .execute(payer(), PaymentTarget::VcUnlock { vc_id })
            .await
            .unwrap();

        assert_eq!(second.payment_id, first.payment_id);
        assert_eq!(second.client_secret, first.client_secret);
        assert_eq!(second.amount, 150);
        assert_eq!(harness.gateway.created(), 1);
        assert_eq!(harness.payments.len(), 1);
    }

    #[tokio::test]
    async fn test_pending_intent_for_other_target_is_not_reused() {
        let first_vc = vc_listing();
        let second_vc = vc_listing();
        let (first_id, second_id) = (first_vc.card.id, second_vc.card.id);
        let harness =
            PaymentHarness::new(founder_profile(false)).with_vcs(vec![first_vc, second_vc]);
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let first = service
            .execute(payer(), PaymentTarget::VcUnlock { vc_id: first_id })
            .await
            .unwrap();
        let second = service
            .execute(payer(), PaymentTarget::VcUnlock { vc_id: second_id })
            .await
            .unwrap();

        assert_ne!(second.payment_id, first.payment_id);
        assert_eq!(harness.gateway.created(), 2);
    }

    #[tokio::test]
    async fn test_canceled_pending_intent_is_replaced() {
        let harness = PaymentHarness::new(founder_profile(false));
        let service = CreatePaymentIntentService::new(harness.ports(), PricingConfig::default());

        let first = service
            .execute(payer(), PaymentTarget::ProjectVisibility)
            .await
            .unwrap();
        harness.gateway.set_status("canceled");
        let second = service
            .execute(payer(), PaymentTarget::ProjectVisibility)
            .await
            .unwrap();

        assert_ne!(second.payment_id, first.payment_id);
        assert_eq!(
            harness.payments.get(&first.payment_id).unwrap().status,
            PaymentStatus::Failed
        );
        assert_eq!(
            harness.payments.get(&second.payment_id).unwrap().status,
            PaymentStatus::Pending
        );
    }
}
