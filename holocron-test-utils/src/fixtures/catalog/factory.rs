//! Factory functions for generating mock catalog models.

/// Create a mock character model with every optional column populated.
pub fn mock_character_model(id: i32, name: &str) -> entity::character::Model {
    entity::character::Model {
        id,
        name: name.to_string(),
        gender: Some("male".to_string()),
        height: Some("172".to_string()),
        mass: Some(77),
    }
}

/// Create a mock planet model with every optional column populated.
pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        population: Some(200_000),
    }
}

/// Create a mock vehicle model with every optional column populated.
pub fn mock_vehicle_model(id: i32, name: &str) -> entity::vehicle::Model {
    entity::vehicle::Model {
        id,
        name: name.to_string(),
        cargo_capacity: Some("50000".to_string()),
        length: Some("36.8".to_string()),
        model: Some("Digger Crawler".to_string()),
    }
}
