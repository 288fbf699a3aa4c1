pub mod domain;
pub mod ports;
pub mod service;
pub mod vc_request_use_cases;
