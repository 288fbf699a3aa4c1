use std::sync::Arc;

use crate::modules::cold_investor::application::ports::outgoing::{
    ColdInvestorQuery, ColdInvestorRepository,
};
use crate::modules::founder::application::ports::outgoing::FounderRepository;
use crate::modules::payment::application::ports::outgoing::{
    IntroTemplateGenerator, PaymentGateway, PaymentRepository,
};
use crate::modules::vc::application::ports::outgoing::{VcQuery, VcUnlockQuery};
use crate::modules::vc_request::application::ports::outgoing::VcRequestRepository;

/// Everything the payment services reach into.
#[derive(Clone)]
pub struct PaymentPorts {
    pub payments: Arc<dyn PaymentRepository + Send + Sync>,
    pub unlocks: Arc<dyn VcUnlockQuery + Send + Sync>,
    pub gateway: Arc<dyn PaymentGateway + Send + Sync>,
    pub intro_templates: Arc<dyn IntroTemplateGenerator + Send + Sync>,
    pub founders: Arc<dyn FounderRepository + Send + Sync>,
    pub vcs: Arc<dyn VcQuery + Send + Sync>,
    pub cold_investors: Arc<dyn ColdInvestorQuery + Send + Sync>,
    pub decision_maker_unlocks: Arc<dyn ColdInvestorRepository + Send + Sync>,
    pub vc_requests: Arc<dyn VcRequestRepository + Send + Sync>,
}
