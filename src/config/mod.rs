// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod cors;
pub mod db;
pub mod env;

pub use cors::api_cors;
pub use db::init_db_pool;
pub use env::{Config, StoreBackend};
