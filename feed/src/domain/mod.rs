//! Domain layer
//!
//! Contains pure feed state and models with no external dependencies.
//! - `entities`: domain models for UI cards and feed queries
//! - `ports`: trait definitions for external collaborators

pub mod entities;
pub mod ports;
