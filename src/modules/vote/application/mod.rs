pub mod domain;
pub mod ports;
pub mod service;
pub mod vote_use_cases;
