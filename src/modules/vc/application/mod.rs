pub mod domain;
pub mod ports;
pub mod service;
pub mod vc_use_cases;
