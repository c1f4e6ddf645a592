//! Server-side models.
//!
//! Database model type aliases, the favorite target variant, and the parameter
//! structs accepted by create and update operations.

pub mod db;
pub mod favorite;
pub mod params;
