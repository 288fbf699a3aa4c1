pub mod domain;
pub mod founder_use_cases;
pub mod ports;
pub mod service;
