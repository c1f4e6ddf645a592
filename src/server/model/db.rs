//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't need to spell out the `entity` crate
//! module of each table.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `password` - Opaque credential, never projected
/// - `first_name` / `last_name` - Display name parts
pub type UserModel = entity::user::Model;

/// Type alias for the character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for the favorite database model.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `planet_id` / `character_id` / `vehicle_id` - Foreign key to the favorited item, one is set
/// - `created_at` - When the favorite was added, in UTC
pub type FavoriteModel = entity::favorite::Model;
