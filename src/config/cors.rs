// src/config/cors.rs
// DOCUMENTATION: Cross-origin policy for the public API
// PURPOSE: Let any origin call /api/** without credentials

use actix_cors::Cors;
use actix_web::http::Method;

/// Preflight cache lifetime in seconds
const CORS_MAX_AGE: usize = 1800;

/// Build the CORS middleware wrapped around the /api scope
/// DOCUMENTATION: Wildcard origin and credentials are mutually exclusive,
/// so credentials stay disabled
pub fn api_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_any_header()
        .max_age(CORS_MAX_AGE)
}
