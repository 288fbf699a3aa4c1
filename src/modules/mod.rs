pub mod auth;
pub mod cold_investor;
pub mod directory;
pub mod email_gate;
pub mod founder;
pub mod payment;
pub mod vc;
pub mod vc_request;
pub mod vote;
