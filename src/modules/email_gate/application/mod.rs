pub mod domain;
pub mod email_gate_use_cases;
pub mod ports;
pub mod service;
