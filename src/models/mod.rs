// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod auth;
pub mod delete;
pub mod gallery;
pub mod journey;
pub mod media;
pub mod tour;

pub use auth::*;
pub use delete::*;
pub use gallery::*;
pub use journey::*;
pub use media::*;
pub use tour::*;
