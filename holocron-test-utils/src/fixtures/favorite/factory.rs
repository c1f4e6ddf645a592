//! Factory functions for generating mock favorite models.

use chrono::Utc;

/// Create a mock favorite model pointing at a planet, created now.
pub fn mock_planet_favorite_model(
    id: i32,
    user_id: i32,
    planet_id: i32,
) -> entity::favorite::Model {
    entity::favorite::Model {
        id,
        user_id,
        planet_id: Some(planet_id),
        character_id: None,
        vehicle_id: None,
        created_at: Utc::now(),
    }
}

/// Create a mock favorite model with explicit target columns.
///
/// Useful for building rows that violate the single-target rule.
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    planet_id: Option<i32>,
    character_id: Option<i32>,
    vehicle_id: Option<i32>,
) -> entity::favorite::Model {
    entity::favorite::Model {
        id,
        user_id,
        planet_id,
        character_id,
        vehicle_id,
        created_at: Utc::now(),
    }
}
