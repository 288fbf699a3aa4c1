pub mod api;
pub mod db;
pub mod email;
pub mod pagination;
pub mod patch;
