// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod catalog;
pub mod gallery_repository;
pub mod journey_repository;
pub mod memory_catalog;
pub mod pg_catalog;
pub mod tour_repository;

pub use catalog::*;
pub use gallery_repository::*;
pub use journey_repository::*;
pub use memory_catalog::*;
pub use pg_catalog::*;
pub use tour_repository::*;
