use chrono::Utc;
use uuid::Uuid;

use crate::modules::cold_investor::application::domain::entities::{
    ColdInvestor, ColdInvestorRecord, DecisionMaker,
};
use crate::modules::founder::application::domain::entities::FounderProfile;
use crate::modules::payment::application::domain::entities::{
    Payment, PaymentStatus, PaymentTarget,
};
use crate::modules::vc::application::domain::entities::{
    ContactMethod, NewVc, VcCard, VcContact, VcListing,
};

pub fn founder_profile(is_visible: bool) -> FounderProfile {
    let now = Utc::now();
    FounderProfile {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        company_name: "Acme Robotics".to_string(),
        project_name: "Pick".to_string(),
        tagline: "Robots for warehouses".to_string(),
        pitch: "We automate picking for mid-size warehouses.".to_string(),
        website: Some("https://acme.dev".to_string()),
        sector: Some("robotics".to_string()),
        stage: Some("seed".to_string()),
        is_visible,
        created_at: now,
        updated_at: now,
    }
}

pub fn new_vc() -> NewVc {
    NewVc {
        name: "Vera Capital".to_string(),
        fund_name: "Northwind Ventures".to_string(),
        title: "Partner".to_string(),
        bio: "Backs infra founders.".to_string(),
        sectors: vec!["fintech".to_string()],
        stages: vec!["seed".to_string()],
        check_size: Some("$250k-$1M".to_string()),
        location: Some("Berlin".to_string()),
        website: Some("https://northwind.vc".to_string()),
        price: 150,
        intro_price: Some(300),
        contact_method: ContactMethod::Email,
        contact_value: "vera@northwind.vc".to_string(),
        linkedin_url: None,
    }
}

/// A verified listing with fresh ids on every call.
pub fn vc_listing() -> VcListing {
    let data = new_vc();
    let now = Utc::now();
    VcListing {
        card: VcCard {
            id: Uuid::new_v4(),
            name: data.name,
            fund_name: data.fund_name,
            title: data.title,
            bio: data.bio,
            sectors: data.sectors,
            stages: data.stages,
            check_size: data.check_size,
            location: data.location,
            website: data.website,
            price: data.price,
            intro_price: data.intro_price,
            contact_method: data.contact_method,
            is_verified: true,
            created_at: now,
        },
        user_id: Uuid::new_v4(),
        contact: VcContact {
            contact_method: data.contact_method,
            contact_value: data.contact_value,
            linkedin_url: data.linkedin_url,
        },
        pending_changes: None,
        updated_at: now,
    }
}

/// A cold investor with `people` decision makers, each reachable by email.
pub fn cold_investor_record(people: usize) -> ColdInvestorRecord {
    let now = Utc::now();
    let investor_id = Uuid::new_v4();
    let decision_makers = (0..people)
        .map(|i| DecisionMaker {
            id: Uuid::new_v4(),
            cold_investor_id: investor_id,
            name: format!("Partner {}", i + 1),
            title: "General Partner".to_string(),
            email: Some(format!("partner{}@harbor.vc", i + 1)),
            linkedin_url: None,
            created_at: now,
        })
        .collect();

    ColdInvestorRecord {
        investor: ColdInvestor {
            id: investor_id,
            name: "Harbor Capital".to_string(),
            website: Some("https://harbor.vc".to_string()),
            sectors: vec!["ai".to_string()],
            stages: vec!["seed".to_string()],
            location: Some("Lisbon".to_string()),
            created_at: now,
        },
        decision_makers,
    }
}

pub fn pending_payment(founder_id: Uuid, target: PaymentTarget) -> Payment {
    let now = Utc::now();
    Payment {
        id: format!("pi_{}", Uuid::new_v4().simple()),
        founder_id,
        vc_id: target.vc_id(),
        decision_maker_id: target.decision_maker_id(),
        kind: target.kind(),
        amount: 49,
        currency: "usd".to_string(),
        status: PaymentStatus::Pending,
        intro_template: None,
        created_at: now,
        updated_at: now,
    }
}
