// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod memory;
pub mod repository;

pub use memory::*;
pub use repository::*;
