// Route exports
pub mod scoring;

use actix_web::web;

pub use scoring::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(scoring::configure),
    );
}
