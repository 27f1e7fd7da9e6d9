pub mod import;
pub mod schedule;
pub mod standings;
pub mod validation;
