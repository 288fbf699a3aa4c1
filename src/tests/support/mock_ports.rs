//! In-memory outgoing ports for service tests. Clones share state so a test
//! can hand one copy to a service and inspect the other.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::modules::cold_investor::application::domain::entities::{
    ColdInvestor, ColdInvestorRecord, DecisionMaker, NewColdInvestor, NewDecisionMaker,
};
use crate::modules::cold_investor::application::ports::outgoing::{
    ColdInvestorQuery, ColdInvestorQueryError, ColdInvestorRepository,
    ColdInvestorRepositoryError,
};
use crate::modules::directory::application::domain::entities::DirectoryEntry;
use crate::modules::directory::application::ports::outgoing::{
    DirectorySourceError, VcDirectorySource,
};
use crate::modules::email_gate::application::ports::outgoing::{
    EmailSubmissionRepository, EmailSubmissionRepositoryError,
};
use crate::modules::founder::application::domain::entities::{
    FounderPatch, FounderProfile, ScoutProject, ScoutSort,
};
use crate::modules::founder::application::ports::outgoing::{
    FounderQuery, FounderQueryError, FounderRepository, FounderRepositoryError,
};
use crate::modules::payment::application::domain::entities::{
    NewPayment, Payment, PaymentKind, PaymentStatus, PaymentTarget, ProcessorIntent,
};
use crate::modules::payment::application::domain::intro_template::IntroContext;
use crate::modules::payment::application::ports::outgoing::{
    IntentRequest, IntroTemplateError, IntroTemplateGenerator, PaymentGateway,
    PaymentGatewayError, PaymentRepository, PaymentRepositoryError,
};
use crate::modules::payment::application::service::PaymentPorts;
use crate::modules::vc::application::domain::entities::{
    NewVc, VcCard, VcChanges, VcFilter, VcListing,
};
use crate::modules::vc::application::ports::outgoing::{
    VcQuery, VcQueryError, VcRepository, VcRepositoryError, VcUnlockQuery, VcUnlockQueryError,
    VcUnlockRecord,
};
use crate::modules::vc_request::application::domain::entities::{VcRequestKind, VcRequestStats};
use crate::modules::vc_request::application::ports::outgoing::{
    VcRequestRepository, VcRequestRepositoryError,
};
use crate::modules::vote::application::ports::outgoing::{VoteRepository, VoteRepositoryError};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::tests::support::fixtures::cold_investor_record;

fn page_of<T>(items: Vec<T>, page: &PageRequest) -> PageResult<T> {
    PageResult {
        total: items.len() as u64,
        items,
        page: page.page,
        per_page: page.per_page,
    }
}

// ---------------------------------------------------------------------------
// vc
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCall {
    Apply,
    Discard,
}

#[derive(Default)]
struct VcRepositoryCalls {
    created: Option<NewVc>,
    changes: Option<VcChanges>,
    review: Option<ReviewCall>,
}

/// Every write returns the same canned result and remembers its input.
/// Built with `over`, verification writes land in a shared `MockVcQuery`.
#[derive(Clone)]
pub struct MockVcRepository {
    result: Result<VcListing, VcRepositoryError>,
    calls: Arc<Mutex<VcRepositoryCalls>>,
    store: Option<MockVcQuery>,
}

impl MockVcRepository {
    pub fn returning(result: Result<VcListing, VcRepositoryError>) -> Self {
        Self {
            result,
            calls: Arc::new(Mutex::new(VcRepositoryCalls::default())),
            store: None,
        }
    }

    pub fn over(store: MockVcQuery) -> Self {
        Self {
            store: Some(store),
            ..Self::returning(Err(VcRepositoryError::NotFound))
        }
    }

    pub fn last_created(&self) -> Option<NewVc> {
        self.calls.lock().unwrap().created.clone()
    }

    pub fn last_changes(&self) -> Option<VcChanges> {
        self.calls.lock().unwrap().changes.clone()
    }

    pub fn last_review(&self) -> Option<ReviewCall> {
        self.calls.lock().unwrap().review
    }
}

#[async_trait]
impl VcRepository for MockVcRepository {
    async fn create_vc(&self, _user_id: Uuid, data: NewVc) -> Result<VcListing, VcRepositoryError> {
        self.calls.lock().unwrap().created = Some(data);
        self.result.clone()
    }

    async fn store_pending_changes(
        &self,
        _user_id: Uuid,
        changes: VcChanges,
    ) -> Result<VcListing, VcRepositoryError> {
        self.calls.lock().unwrap().changes = Some(changes);
        self.result.clone()
    }

    async fn set_verified(&self, vc_id: Uuid, is_verified: bool) -> Result<VcListing, VcRepositoryError> {
        match &self.store {
            Some(store) => store
                .set_verified(vc_id, is_verified)
                .ok_or(VcRepositoryError::NotFound),
            None => self.result.clone(),
        }
    }

    async fn apply_pending_changes(&self, _vc_id: Uuid) -> Result<VcListing, VcRepositoryError> {
        self.calls.lock().unwrap().review = Some(ReviewCall::Apply);
        self.result.clone()
    }

    async fn discard_pending_changes(&self, _vc_id: Uuid) -> Result<VcListing, VcRepositoryError> {
        self.calls.lock().unwrap().review = Some(ReviewCall::Discard);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct MockVcQuery {
    listings: Arc<Mutex<Vec<VcListing>>>,
    last_filter: Arc<Mutex<Option<VcFilter>>>,
}

impl MockVcQuery {
    pub fn with(listings: Vec<VcListing>) -> Self {
        Self {
            listings: Arc::new(Mutex::new(listings)),
            last_filter: Arc::new(Mutex::new(None)),
        }
    }

    fn snapshot(&self) -> Vec<VcListing> {
        self.listings.lock().unwrap().clone()
    }

    fn set_verified(&self, vc_id: Uuid, is_verified: bool) -> Option<VcListing> {
        let mut listings = self.listings.lock().unwrap();
        let listing = listings.iter_mut().find(|l| l.card.id == vc_id)?;
        listing.card.is_verified = is_verified;
        Some(listing.clone())
    }

    pub fn last_filter(&self) -> Option<VcFilter> {
        self.last_filter.lock().unwrap().clone()
    }
}

#[async_trait]
impl VcQuery for MockVcQuery {
    async fn find_by_id(&self, vc_id: Uuid) -> Result<Option<VcListing>, VcQueryError> {
        Ok(self.snapshot().into_iter().find(|l| l.card.id == vc_id))
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<VcListing>, VcQueryError> {
        Ok(self.snapshot().into_iter().find(|l| l.user_id == user_id))
    }

    async fn list_public(
        &self,
        filter: VcFilter,
        page: &PageRequest,
    ) -> Result<PageResult<VcCard>, VcQueryError> {
        let verified_only = filter.verified_only;
        *self.last_filter.lock().unwrap() = Some(filter);

        let cards = self
            .snapshot()
            .into_iter()
            .filter(|l| !verified_only || l.card.is_verified)
            .map(|l| l.card)
            .collect();
        Ok(page_of(cards, page))
    }

    async fn list_all(&self, page: &PageRequest) -> Result<PageResult<VcListing>, VcQueryError> {
        Ok(page_of(self.snapshot(), page))
    }

    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<VcListing>, VcQueryError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|l| ids.contains(&l.card.id))
            .collect())
    }
}

#[derive(Clone)]
enum UnlockSource {
    Fixed(Arc<Vec<VcUnlockRecord>>),
    Ledger(MockPaymentRepository),
}

/// Either a fixed list of unlocks or a view over completed `vc_unlock` rows
/// of a payment ledger.
#[derive(Clone)]
pub struct MockVcUnlockQuery {
    source: UnlockSource,
}

impl MockVcUnlockQuery {
    /// Records in the given order, newest first, each with a stored template.
    pub fn unlocked(vc_ids: Vec<Uuid>) -> Self {
        let now = Utc::now();
        let records = vc_ids
            .into_iter()
            .enumerate()
            .map(|(i, vc_id)| VcUnlockRecord {
                vc_id,
                intro_template: Some(format!("Hi, intro #{}", i + 1)),
                unlocked_at: now - Duration::minutes(i as i64),
            })
            .collect();
        Self {
            source: UnlockSource::Fixed(Arc::new(records)),
        }
    }

    pub fn ledger(payments: MockPaymentRepository) -> Self {
        Self {
            source: UnlockSource::Ledger(payments),
        }
    }

    fn records(&self, founder_id: Uuid) -> Vec<VcUnlockRecord> {
        match &self.source {
            UnlockSource::Fixed(records) => records.to_vec(),
            UnlockSource::Ledger(payments) => {
                let mut seen = HashSet::new();
                payments
                    .list_rows()
                    .into_iter()
                    .rev()
                    .filter(|p| {
                        p.founder_id == founder_id
                            && p.kind == PaymentKind::VcUnlock
                            && p.status == PaymentStatus::Completed
                    })
                    .filter_map(|p| {
                        let vc_id = p.vc_id?;
                        seen.insert(vc_id).then(|| VcUnlockRecord {
                            vc_id,
                            intro_template: p.intro_template,
                            unlocked_at: p.updated_at,
                        })
                    })
                    .collect()
            }
        }
    }
}

#[async_trait]
impl VcUnlockQuery for MockVcUnlockQuery {
    async fn has_unlocked(&self, founder_id: Uuid, vc_id: Uuid) -> Result<bool, VcUnlockQueryError> {
        Ok(self.records(founder_id).iter().any(|r| r.vc_id == vc_id))
    }

    async fn unlocked_vcs(&self, founder_id: Uuid) -> Result<Vec<VcUnlockRecord>, VcUnlockQueryError> {
        Ok(self.records(founder_id))
    }
}

// ---------------------------------------------------------------------------
// founder
// ---------------------------------------------------------------------------

/// Hands out one founder row regardless of the user id asked for.
#[derive(Clone)]
pub struct MockFounderRepository {
    profile: Arc<Mutex<FounderProfile>>,
}

impl MockFounderRepository {
    pub fn new(profile: FounderProfile) -> Self {
        Self {
            profile: Arc::new(Mutex::new(profile)),
        }
    }

    pub fn profile(&self) -> FounderProfile {
        self.profile.lock().unwrap().clone()
    }
}

#[async_trait]
impl FounderRepository for MockFounderRepository {
    async fn ensure_for_user(&self, _user_id: Uuid) -> Result<FounderProfile, FounderRepositoryError> {
        Ok(self.profile())
    }

    async fn apply_patch(
        &self,
        _user_id: Uuid,
        _patch: FounderPatch,
    ) -> Result<FounderProfile, FounderRepositoryError> {
        Ok(self.profile())
    }

    async fn mark_visible(&self, founder_id: Uuid) -> Result<(), FounderRepositoryError> {
        let mut profile = self.profile.lock().unwrap();
        if profile.id != founder_id {
            return Err(FounderRepositoryError::NotFound);
        }
        profile.is_visible = true;
        Ok(())
    }
}

/// One founder, visible or hidden on Scout.
#[derive(Clone)]
pub struct MockFounderQuery {
    profile: FounderProfile,
}

impl MockFounderQuery {
    pub fn new(is_visible: bool) -> Self {
        Self {
            profile: crate::tests::support::fixtures::founder_profile(is_visible),
        }
    }

    pub fn project_id(&self) -> Uuid {
        self.profile.id
    }

    fn visible(&self) -> Option<ScoutProject> {
        self.profile
            .is_visible
            .then(|| ScoutProject::from_profile(self.profile.clone(), 0))
    }
}

#[async_trait]
impl FounderQuery for MockFounderQuery {
    async fn find_by_id(&self, founder_id: Uuid) -> Result<Option<FounderProfile>, FounderQueryError> {
        Ok((founder_id == self.profile.id).then(|| self.profile.clone()))
    }

    async fn list_visible(
        &self,
        _sort: ScoutSort,
        page: &PageRequest,
    ) -> Result<PageResult<ScoutProject>, FounderQueryError> {
        Ok(page_of(self.visible().into_iter().collect(), page))
    }

    async fn find_visible(&self, founder_id: Uuid) -> Result<Option<ScoutProject>, FounderQueryError> {
        Ok(self.visible().filter(|p| p.id == founder_id))
    }
}

// ---------------------------------------------------------------------------
// vote
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MockVoteRepository {
    votes: Arc<Mutex<Vec<(Uuid, String, DateTime<Utc>)>>>,
}

impl MockVoteRepository {
    pub fn seed(&self, founder_id: Uuid, email: &str, at: DateTime<Utc>) {
        self.votes
            .lock()
            .unwrap()
            .push((founder_id, email.to_string(), at));
    }

    pub fn contains(&self, founder_id: Uuid, email: &str) -> bool {
        self.votes
            .lock()
            .unwrap()
            .iter()
            .any(|(id, e, _)| *id == founder_id && e == email)
    }
}

#[async_trait]
impl VoteRepository for MockVoteRepository {
    async fn insert_vote(&self, founder_id: Uuid, email: &str) -> Result<(), VoteRepositoryError> {
        if self.contains(founder_id, email) {
            return Err(VoteRepositoryError::AlreadyVoted);
        }
        self.seed(founder_id, email, Utc::now());
        Ok(())
    }

    async fn delete_vote(&self, founder_id: Uuid, email: &str) -> Result<bool, VoteRepositoryError> {
        let mut votes = self.votes.lock().unwrap();
        let before = votes.len();
        votes.retain(|(id, e, _)| !(*id == founder_id && e == email));
        Ok(votes.len() < before)
    }

    async fn has_voted(&self, founder_id: Uuid, email: &str) -> Result<bool, VoteRepositoryError> {
        Ok(self.contains(founder_id, email))
    }

    async fn last_vote_at(&self, email: &str) -> Result<Option<DateTime<Utc>>, VoteRepositoryError> {
        Ok(self
            .votes
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, e, _)| e == email)
            .map(|(_, _, at)| *at)
            .max())
    }

    async fn count_for(&self, founder_id: Uuid) -> Result<u64, VoteRepositoryError> {
        Ok(self
            .votes
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _, _)| *id == founder_id)
            .count() as u64)
    }
}

// ---------------------------------------------------------------------------
// email gate
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MockEmailSubmissionRepository {
    rows: Arc<Mutex<HashSet<(String, String)>>>,
}

impl MockEmailSubmissionRepository {
    pub fn seed(&self, email: &str, source: &str) {
        self.rows
            .lock()
            .unwrap()
            .insert((email.to_string(), source.to_string()));
    }

    pub fn contains(&self, email: &str, source: &str) -> bool {
        self.rows
            .lock()
            .unwrap()
            .contains(&(email.to_string(), source.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailSubmissionRepository for MockEmailSubmissionRepository {
    async fn record(&self, email: &str, source: &str) -> Result<(), EmailSubmissionRepositoryError> {
        self.seed(email, source);
        Ok(())
    }

    async fn exists(&self, email: &str, source: &str) -> Result<bool, EmailSubmissionRepositoryError> {
        Ok(self.contains(email, source))
    }
}

// ---------------------------------------------------------------------------
// cold investors
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct MockColdInvestorQuery {
    records: Arc<Mutex<Vec<ColdInvestorRecord>>>,
    unlocked: Arc<Mutex<HashMap<String, Vec<Uuid>>>>,
}

impl MockColdInvestorQuery {
    pub fn new(records: Vec<ColdInvestorRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            unlocked: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_unlocked(self, email: &str, ids: Vec<Uuid>) -> Self {
        for id in ids {
            self.unlock(email, id);
        }
        self
    }

    pub fn push(&self, record: ColdInvestorRecord) {
        self.records.lock().unwrap().push(record);
    }

    pub fn unlock(&self, email: &str, decision_maker_id: Uuid) {
        self.unlocked
            .lock()
            .unwrap()
            .entry(email.to_string())
            .or_default()
            .push(decision_maker_id);
    }
}

#[async_trait]
impl ColdInvestorQuery for MockColdInvestorQuery {
    async fn list_investors(
        &self,
        page: &PageRequest,
    ) -> Result<PageResult<ColdInvestorRecord>, ColdInvestorQueryError> {
        Ok(page_of(self.records.lock().unwrap().clone(), page))
    }

    async fn find_decision_maker(
        &self,
        decision_maker_id: Uuid,
    ) -> Result<Option<DecisionMaker>, ColdInvestorQueryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .flat_map(|r| r.decision_makers.iter())
            .find(|dm| dm.id == decision_maker_id)
            .cloned())
    }

    async fn unlocked_decision_maker_ids(
        &self,
        email: &str,
    ) -> Result<Vec<Uuid>, ColdInvestorQueryError> {
        Ok(self
            .unlocked
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .unwrap_or_default())
    }

    async fn is_unlocked(
        &self,
        email: &str,
        decision_maker_id: Uuid,
    ) -> Result<bool, ColdInvestorQueryError> {
        Ok(self
            .unlocked
            .lock()
            .unwrap()
            .get(email)
            .is_some_and(|ids| ids.contains(&decision_maker_id)))
    }
}

#[derive(Default)]
struct ColdInvestorWrites {
    investors: Vec<ColdInvestor>,
    unlocks: Vec<(String, Uuid)>,
}

#[derive(Clone, Default)]
pub struct MockColdInvestorRepository {
    writes: Arc<Mutex<ColdInvestorWrites>>,
    missing_investor: bool,
    readers: Option<MockColdInvestorQuery>,
}

impl MockColdInvestorRepository {
    /// Recorded unlocks also become visible through `query`.
    pub fn mirroring(query: MockColdInvestorQuery) -> Self {
        Self {
            readers: Some(query),
            ..Self::default()
        }
    }

    /// Every decision maker insert hits a missing parent row.
    pub fn missing_investor(mut self) -> Self {
        self.missing_investor = true;
        self
    }

    pub fn investor_count(&self) -> usize {
        self.writes.lock().unwrap().investors.len()
    }

    pub fn unlocks(&self) -> Vec<(String, Uuid)> {
        self.writes.lock().unwrap().unlocks.clone()
    }
}

#[async_trait]
impl ColdInvestorRepository for MockColdInvestorRepository {
    async fn create_investor(
        &self,
        investor: NewColdInvestor,
    ) -> Result<ColdInvestor, ColdInvestorRepositoryError> {
        let created = ColdInvestor {
            id: Uuid::new_v4(),
            name: investor.name,
            website: investor.website,
            sectors: investor.sectors,
            stages: investor.stages,
            location: investor.location,
            created_at: Utc::now(),
        };
        self.writes.lock().unwrap().investors.push(created.clone());
        Ok(created)
    }

    async fn create_decision_maker(
        &self,
        cold_investor_id: Uuid,
        decision_maker: NewDecisionMaker,
    ) -> Result<DecisionMaker, ColdInvestorRepositoryError> {
        if self.missing_investor {
            return Err(ColdInvestorRepositoryError::InvestorNotFound);
        }
        Ok(DecisionMaker {
            id: Uuid::new_v4(),
            cold_investor_id,
            name: decision_maker.name,
            title: decision_maker.title,
            email: decision_maker.email,
            linkedin_url: decision_maker.linkedin_url,
            created_at: Utc::now(),
        })
    }

    async fn record_unlock(
        &self,
        email: &str,
        decision_maker_id: Uuid,
        _payment_id: &str,
    ) -> Result<(), ColdInvestorRepositoryError> {
        let mut writes = self.writes.lock().unwrap();
        let row = (email.to_string(), decision_maker_id);
        if !writes.unlocks.contains(&row) {
            writes.unlocks.push(row);
            if let Some(query) = &self.readers {
                query.unlock(email, decision_maker_id);
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// vc requests
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MockVcRequestRepository {
    counts: Arc<Mutex<HashMap<(Uuid, VcRequestKind), u64>>>,
}

impl MockVcRequestRepository {
    pub fn seed(&self, vc_id: Uuid, kind: VcRequestKind, n: u64) {
        *self.counts.lock().unwrap().entry((vc_id, kind)).or_default() += n;
    }

    pub fn count(&self, vc_id: Uuid, kind: VcRequestKind) -> u64 {
        self.counts
            .lock()
            .unwrap()
            .get(&(vc_id, kind))
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl VcRequestRepository for MockVcRequestRepository {
    async fn record(
        &self,
        _founder_id: Uuid,
        vc_id: Uuid,
        kind: VcRequestKind,
    ) -> Result<(), VcRequestRepositoryError> {
        self.seed(vc_id, kind, 1);
        Ok(())
    }

    async fn stats_for_vc(&self, vc_id: Uuid) -> Result<VcRequestStats, VcRequestRepositoryError> {
        let mut stats = VcRequestStats::empty(vc_id);
        stats.add(VcRequestKind::Unlock, self.count(vc_id, VcRequestKind::Unlock));
        stats.add(
            VcRequestKind::IntroRequest,
            self.count(vc_id, VcRequestKind::IntroRequest),
        );
        Ok(stats)
    }
}

// ---------------------------------------------------------------------------
// payments
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MockPaymentRepository {
    rows: Arc<Mutex<Vec<Payment>>>,
}

impl MockPaymentRepository {
    pub fn seed(&self, payment: Payment) {
        self.rows.lock().unwrap().push(payment);
    }

    pub fn get(&self, payment_id: &str) -> Option<Payment> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == payment_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Every row in insertion order.
    pub fn list_rows(&self) -> Vec<Payment> {
        self.rows.lock().unwrap().clone()
    }

    /// Moves a pending row only, like the conditional UPDATE in Postgres.
    fn transition(
        &self,
        payment_id: &str,
        status: PaymentStatus,
        intro_template: Option<String>,
    ) -> bool {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|p| p.id == payment_id && p.status == PaymentStatus::Pending)
        {
            Some(row) => {
                row.status = status;
                if intro_template.is_some() {
                    row.intro_template = intro_template;
                }
                row.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl PaymentRepository for MockPaymentRepository {
    async fn insert(&self, payment: NewPayment) -> Result<Payment, PaymentRepositoryError> {
        if self.get(&payment.id).is_some() {
            return Err(PaymentRepositoryError::AlreadyExists);
        }
        let now = Utc::now();
        let row = Payment {
            id: payment.id,
            founder_id: payment.founder_id,
            vc_id: payment.target.vc_id(),
            decision_maker_id: payment.target.decision_maker_id(),
            kind: payment.target.kind(),
            amount: payment.amount,
            currency: payment.currency,
            status: PaymentStatus::Pending,
            intro_template: None,
            created_at: now,
            updated_at: now,
        };
        self.seed(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, payment_id: &str) -> Result<Option<Payment>, PaymentRepositoryError> {
        Ok(self.get(payment_id))
    }

    async fn find_pending(
        &self,
        founder_id: Uuid,
        target: &PaymentTarget,
    ) -> Result<Option<Payment>, PaymentRepositoryError> {
        Ok(self
            .list_rows()
            .into_iter()
            .rev()
            .find(|p| {
                p.founder_id == founder_id
                    && p.status == PaymentStatus::Pending
                    && p.target().map_or(false, |t| t == *target)
            }))
    }

    async fn mark_completed(
        &self,
        payment_id: &str,
        intro_template: Option<String>,
    ) -> Result<bool, PaymentRepositoryError> {
        Ok(self.transition(payment_id, PaymentStatus::Completed, intro_template))
    }

    async fn mark_failed(&self, payment_id: &str) -> Result<bool, PaymentRepositoryError> {
        Ok(self.transition(payment_id, PaymentStatus::Failed, None))
    }

    async fn list_for_founder(&self, founder_id: Uuid) -> Result<Vec<Payment>, PaymentRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|p| p.founder_id == founder_id)
            .cloned()
            .collect())
    }
}

struct GatewayState {
    last_request: Option<IntentRequest>,
    created: usize,
    status: String,
}

/// Processor double. Retrieved intents report `succeeded` unless told otherwise.
#[derive(Clone)]
pub struct MockPaymentGateway {
    state: Arc<Mutex<GatewayState>>,
    failing: bool,
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(GatewayState {
                last_request: None,
                created: 0,
                status: "succeeded".to_string(),
            })),
            failing: false,
        }
    }
}

impl MockPaymentGateway {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn set_status(&self, status: &str) {
        self.state.lock().unwrap().status = status.to_string();
    }

    pub fn last_request(&self) -> Option<IntentRequest> {
        self.state.lock().unwrap().last_request.clone()
    }

    /// Intents opened at the processor so far.
    pub fn created(&self) -> usize {
        self.state.lock().unwrap().created
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_intent(&self, request: IntentRequest) -> Result<ProcessorIntent, PaymentGatewayError> {
        if self.failing {
            return Err(PaymentGatewayError::Api {
                status: 402,
                message: "Your card was declined.".to_string(),
            });
        }
        {
            let mut state = self.state.lock().unwrap();
            state.last_request = Some(request);
            state.created += 1;
        }

        let id = format!("pi_{}", Uuid::new_v4().simple());
        Ok(ProcessorIntent {
            client_secret: Some(format!("{}_secret_test", id)),
            id,
            status: "requires_payment_method".into(),
        })
    }

    async fn retrieve_intent(&self, intent_id: &str) -> Result<ProcessorIntent, PaymentGatewayError> {
        if self.failing {
            return Err(PaymentGatewayError::Transport("connection reset".to_string()));
        }
        let status = self.state.lock().unwrap().status.clone();
        Ok(ProcessorIntent {
            id: intent_id.to_string(),
            client_secret: Some(format!("{}_secret_test", intent_id)),
            status: status.as_str().into(),
        })
    }
}

#[derive(Clone, Default)]
pub struct MockIntroGenerator {
    failing: bool,
}

impl MockIntroGenerator {
    pub fn failing() -> Self {
        Self { failing: true }
    }
}

#[async_trait]
impl IntroTemplateGenerator for MockIntroGenerator {
    async fn generate(&self, _ctx: &IntroContext) -> Result<String, IntroTemplateError> {
        if self.failing {
            Err(IntroTemplateError::Request("model unavailable".to_string()))
        } else {
            Ok("Generated intro".to_string())
        }
    }
}

/// Wires every port the payment services use around one founder.
pub struct PaymentHarness {
    pub payments: MockPaymentRepository,
    pub gateway: MockPaymentGateway,
    pub founders: MockFounderRepository,
    pub vc_requests: MockVcRequestRepository,
    pub cold_investors: MockColdInvestorQuery,
    pub decision_maker_unlocks: MockColdInvestorRepository,
    vcs: MockVcQuery,
    unlocks: Option<MockVcUnlockQuery>,
    intro_templates: MockIntroGenerator,
}

impl PaymentHarness {
    /// VC unlocks are read back from the harness's own payment rows, and
    /// decision maker unlocks from what fulfilment recorded.
    pub fn new(founder: FounderProfile) -> Self {
        let cold_investors = MockColdInvestorQuery::new(vec![]);
        Self {
            payments: MockPaymentRepository::default(),
            gateway: MockPaymentGateway::default(),
            founders: MockFounderRepository::new(founder),
            vc_requests: MockVcRequestRepository::default(),
            decision_maker_unlocks: MockColdInvestorRepository::mirroring(cold_investors.clone()),
            cold_investors,
            vcs: MockVcQuery::with(vec![]),
            unlocks: None,
            intro_templates: MockIntroGenerator::default(),
        }
    }

    pub fn with_vcs(mut self, listings: Vec<VcListing>) -> Self {
        self.vcs = MockVcQuery::with(listings);
        self
    }

    pub fn with_unlocks(mut self, unlocks: MockVcUnlockQuery) -> Self {
        self.unlocks = Some(unlocks);
        self
    }

    pub fn with_failing_gateway(mut self) -> Self {
        self.gateway = MockPaymentGateway::failing();
        self
    }

    pub fn with_failing_intro_generator(mut self) -> Self {
        self.intro_templates = MockIntroGenerator::failing();
        self
    }

    pub fn founder_id(&self) -> Uuid {
        self.founders.profile().id
    }

    /// Adds a cold investor with one emailable decision maker and returns that person's id.
    pub fn decision_maker_id(&self) -> Uuid {
        let record = cold_investor_record(1);
        let id = record.decision_makers[0].id;
        self.cold_investors.push(record);
        id
    }

    pub fn unlock_decision_maker(&self, email: &str, decision_maker_id: Uuid) {
        self.cold_investors.unlock(email, decision_maker_id);
    }

    pub fn ports(&self) -> PaymentPorts {
        PaymentPorts {
            payments: Arc::new(self.payments.clone()),
            unlocks: Arc::new(
                self.unlocks
                    .clone()
                    .unwrap_or_else(|| MockVcUnlockQuery::ledger(self.payments.clone())),
            ),
            gateway: Arc::new(self.gateway.clone()),
            intro_templates: Arc::new(self.intro_templates.clone()),
            founders: Arc::new(self.founders.clone()),
            vcs: Arc::new(self.vcs.clone()),
            cold_investors: Arc::new(self.cold_investors.clone()),
            decision_maker_unlocks: Arc::new(self.decision_maker_unlocks.clone()),
            vc_requests: Arc::new(self.vc_requests.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// directory
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct MockDirectorySource {
    entries: Arc<Vec<DirectoryEntry>>,
    failing: bool,
    calls: Arc<AtomicUsize>,
}

impl MockDirectorySource {
    pub fn with_names(names: &[&str]) -> Self {
        let entries = names
            .iter()
            .enumerate()
            .map(|(i, name)| DirectoryEntry {
                id: format!("rec{}", i + 1),
                name: name.to_string(),
                firm: None,
                website: None,
                sectors: vec![],
                stages: vec![],
                location: None,
                check_size: None,
            })
            .collect();
        Self {
            entries: Arc::new(entries),
            failing: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::with_names(&[])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VcDirectorySource for MockDirectorySource {
    async fn fetch_all(&self) -> Result<Vec<DirectoryEntry>, DirectorySourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(DirectorySourceError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(self.entries.to_vec())
    }
}
