pub mod import_handler;
pub mod match_handler;
pub mod standings_handler;
pub mod team_handler;
