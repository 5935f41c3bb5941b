pub mod error;
pub mod mission;
pub mod types;
