use serde::{Deserialize, Serialize};

use crate::modules::founder::application::domain::entities::FounderProfile;
use crate::modules::vc::application::domain::entities::VcCard;

/// Facts the intro message is written from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntroContext {
    pub founder_company: String,
    pub founder_project: String,
    pub tagline: String,
    pub pitch: String,
    pub vc_name: String,
    pub fund_name: String,
    pub vc_sectors: Vec<String>,
}

impl IntroContext {
    pub fn new(founder: &FounderProfile, vc: &VcCard) -> Self {
        Self {
            founder_company: founder.company_name.clone(),
            founder_project: founder.project_name.clone(),
            tagline: founder.tagline.clone(),
            pitch: founder.pitch.clone(),
            vc_name: vc.name.clone(),
            fund_name: vc.fund_name.clone(),
            vc_sectors: vc.sectors.clone(),
        }
    }
}

/// Used whenever the language model is unavailable.
pub fn static_intro_template(ctx: &IntroContext) -> String {
    let company = if ctx.founder_company.trim().is_empty() {
        "my company"
    } else {
        ctx.founder_company.trim()
    };

    let mut body = format!("Hi {},\n\nI'm the founder of {}", ctx.vc_name, company);
    if !ctx.founder_project.trim().is_empty() {
        body.push_str(&format!(", where we're building {}", ctx.founder_project.trim()));
    }
    body.push('.');
    if !ctx.tagline.trim().is_empty() {
        body.push(' ');
        body.push_str(ctx.tagline.trim());
    }

    let focus = if ctx.vc_sectors.is_empty() {
        format!("{}'s portfolio", ctx.fund_name)
    } else {
        format!("{}'s focus on {}", ctx.fund_name, ctx.vc_sectors.join(", "))
    };
    body.push_str(&format!(
        "\n\nGiven {}, I think there's a strong fit. Would you be open to a 20 minute call in the next couple of weeks?\n\nBest regards,\n{}",
        focus, company
    ));
    body
}
