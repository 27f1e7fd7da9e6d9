use actix_web::web;

pub mod backend_health;
pub mod league;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/league")
            .service(league::get_teams)
            .service(league::import_roster)
            .service(league::get_matches)
            .service(league::generate_matches)
            .service(league::update_match_result)
            .service(league::clear_matches)
            .service(league::get_standings),
    );
}
