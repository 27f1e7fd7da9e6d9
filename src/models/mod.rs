pub mod common;
pub mod matches;
pub mod standing;
pub mod team;
