pub mod founders;
