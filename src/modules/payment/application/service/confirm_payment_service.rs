use async_trait::async_trait;

use crate::modules::founder::application::domain::entities::FounderProfile;
use crate::modules::payment::application::domain::entities::{
    Fulfilment, IntentStatus, Payer, Payment, PaymentConfirmation, PaymentStatus, PaymentTarget,
};
use crate::modules::payment::application::domain::intro_template::{
    static_intro_template, IntroContext,
};
use crate::modules::payment::application::ports::incoming::use_cases::{
    ConfirmPaymentError, ConfirmPaymentUseCase,
};
use crate::modules::payment::application::service::PaymentPorts;
use crate::modules::vc_request::application::domain::entities::VcRequestKind;
use crate::shared::email::normalize_email;

pub struct ConfirmPaymentService {
    ports: PaymentPorts,
}

impl ConfirmPaymentService {
    pub fn new(ports: PaymentPorts) -> Self {
        Self { ports }
    }

    async fn intro_template(&self, ctx: &IntroContext) -> String {
        match self.ports.intro_templates.generate(ctx).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Intro template generation failed, using fallback: {}", e);
                static_intro_template(ctx)
            }
        }
    }

    /// True when an earlier payment already delivered what `target` buys.
    async fn already_fulfilled(
        &self,
        founder: &FounderProfile,
        payer: &Payer,
        target: &PaymentTarget,
    ) -> Result<bool, ConfirmPaymentError> {
        match *target {
            PaymentTarget::VcUnlock { vc_id } => self
                .ports
                .unlocks
                .has_unlocked(founder.id, vc_id)
                .await
                .map_err(repo_err),
            PaymentTarget::IntroRequest { .. } => Ok(false),
            PaymentTarget::ProjectVisibility => Ok(founder.is_visible),
            PaymentTarget::DecisionMakerUnlock { decision_maker_id } => {
                let email = normalize_email(&payer.email).map_err(ConfirmPaymentError::RepositoryError)?;
                self.ports
                    .cold_investors
                    .is_unlocked(&email, decision_maker_id)
                    .await
                    .map_err(repo_err)
            }
        }
    }

    async fn fulfil(
        &self,
        founder: &FounderProfile,
        payer: &Payer,
        payment: &Payment,
        target: PaymentTarget,
    ) -> Result<Fulfilment, ConfirmPaymentError> {
        match target {
            PaymentTarget::VcUnlock { vc_id } => {
                let vc = self
                    .ports
                    .vcs
                    .find_by_id(vc_id)
                    .await
                    .map_err(repo_err)?
                    .ok_or_else(|| {
                        ConfirmPaymentError::RepositoryError(format!("vc {} vanished", vc_id))
                    })?;

                let intro_template = self
                    .intro_template(&IntroContext::new(founder, &vc.card))
                    .await;

                self.ports
                    .vc_requests
                    .record(founder.id, vc_id, VcRequestKind::Unlock)
                    .await
                    .map_err(repo_err)?;

                Ok(Fulfilment::VcUnlocked {
                    vc_id,
                    contact: vc.contact,
                    intro_template,
                })
            }
            PaymentTarget::IntroRequest { vc_id } => {
                self.ports
                    .vc_requests
                    .record(founder.id, vc_id, VcRequestKind::IntroRequest)
                    .await
                    .map_err(repo_err)?;

                Ok(Fulfilment::IntroRequested { vc_id })
            }
            PaymentTarget::ProjectVisibility => {
                self.ports
                    .founders
                    .mark_visible(founder.id)
                    .await
                    .map_err(repo_err)?;

                Ok(Fulfilment::ProjectVisible {
                    founder_id: founder.id,
                })
            }
            PaymentTarget::DecisionMakerUnlock { decision_maker_id } => {
                let decision_maker = self
                    .ports
                    .cold_investors
                    .find_decision_maker(decision_maker_id)
                    .await
                    .map_err(repo_err)?
                    .ok_or_else(|| {
                        ConfirmPaymentError::RepositoryError(format!(
                            "decision maker {} vanished",
                            decision_maker_id
                        ))
                    })?;

                let email = normalize_email(&payer.email).map_err(ConfirmPaymentError::RepositoryError)?;
                self.ports
                    .decision_maker_unlocks
                    .record_unlock(&email, decision_maker_id, &payment.id)
                    .await
                    .map_err(repo_err)?;

                Ok(Fulfilment::DecisionMakerUnlocked {
                    contact: (&decision_maker).into(),
                })
            }
        }
    }
}

fn repo_err(e: impl ToString) -> ConfirmPaymentError {
    ConfirmPaymentError::RepositoryError(e.to_string())
}

#[async_trait]
impl ConfirmPaymentUseCase for ConfirmPaymentService {
    async fn execute(
        &self,
        payer: Payer,
        payment_id: &str,
    ) -> Result<PaymentConfirmation, ConfirmPaymentError> {
        let founder = self
            .ports
            .founders
            .ensure_for_user(payer.user_id)
            .await
            .map_err(repo_err)?;

        let mut payment = self
            .ports
            .payments
            .find_by_id(payment_id)
            .await
            .map_err(repo_err)?
            .filter(|p| p.founder_id == founder.id)
            .ok_or(ConfirmPaymentError::NotFound)?;

        if payment.status != PaymentStatus::Pending {
            return Err(ConfirmPaymentError::AlreadyProcessed);
        }

        let intent = self
            .ports
            .gateway
            .retrieve_intent(payment_id)
            .await
            .map_err(|e| ConfirmPaymentError::ProviderError(e.to_string()))?;

        match intent.status {
            IntentStatus::Succeeded => {}
            IntentStatus::Canceled => {
                self.ports
                    .payments
                    .mark_failed(payment_id)
                    .await
                    .map_err(repo_err)?;
                tracing::warn!(payment_id = %payment_id, "Payment canceled at processor");
                return Err(ConfirmPaymentError::PaymentFailed);
            }
            IntentStatus::Other(status) => {
                return Err(ConfirmPaymentError::NotCompleted(status));
            }
        }

        let target = payment.target().map_err(ConfirmPaymentError::RepositoryError)?;
        if self.already_fulfilled(&founder, &payer, &target).await? {
            self.ports
                .payments
                .mark_failed(payment_id)
                .await
                .map_err(repo_err)?;
            tracing::warn!(
                payment_id = %payment_id,
                founder_id = %founder.id,
                kind = %payment.kind,
                "Duplicate purchase settled at processor, needs a refund"
            );
            return Err(ConfirmPaymentError::AlreadyFulfilled(payment.kind));
        }

        let fulfilment = self.fulfil(&founder, &payer, &payment, target).await?;
        let intro_template = fulfilment.intro_template();

        let transitioned = self
            .ports
            .payments
            .mark_completed(payment_id, intro_template.clone())
            .await
            .map_err(repo_err)?;
        if !transitioned {
            // A concurrent confirmation completed it first; fulfilment is idempotent.
            tracing::warn!(payment_id = %payment_id, "Payment was completed concurrently");
        }

        tracing::info!(
            payment_id = %payment_id,
            founder_id = %founder.id,
            kind = %payment.kind,
            "Payment completed"
        );

        payment.status = PaymentStatus::Completed;
        payment.intro_template = intro_template;

        Ok(PaymentConfirmation {
            payment,
            fulfilment,
        })
    }
}
