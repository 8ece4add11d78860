// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod gallery_service;
pub mod journey_service;
pub mod storage;
pub mod tour_service;

pub use gallery_service::*;
pub use journey_service::*;
pub use storage::*;
pub use tour_service::*;
