//! Test fixture modules for database record creation.
//!
//! Each submodule provides fixtures for one part of the schema:
//!
//! - `user` - User accounts
//! - `catalog` - Characters, planets and vehicles
//! - `favorite` - Favorite rows linking users to catalog items
//!
//! Every submodule also carries a `factory` of pure functions building in-memory models.

pub mod catalog;
pub mod favorite;
pub mod user;
