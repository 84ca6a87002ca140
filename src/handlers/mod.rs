// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and mount the /api scope

pub mod health;
pub mod places;

use crate::config::api_cors;
use actix_web::web;

pub use health::config as health_config;
pub use places::config as places_config;

/// Mount every /api route behind the cross-origin policy
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(api_cors())
            .configure(places_config),
    );
}
