pub mod analytics;
pub mod application;
pub mod candidate;
pub mod evaluation;
pub mod job;
