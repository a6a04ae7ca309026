pub mod detect;
pub mod error;
pub mod health;
pub mod openapi;

use actix_web::web;

/// Register all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(detect::configure)
        .configure(openapi::configure);
}
