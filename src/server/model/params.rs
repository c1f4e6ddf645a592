//! Field values accepted by create and update operations.
//!
//! Updates replace every column with the values provided, so the same structs serve both.

/// Columns of a user account.
#[derive(Clone, Debug)]
pub struct UserParams {
    /// Must be unique across users
    pub email: String,
    /// Stored as provided
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Columns of a character.
#[derive(Clone, Debug, Default)]
pub struct CharacterParams {
    pub name: String,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub mass: Option<i32>,
}

/// Columns of a planet.
#[derive(Clone, Debug, Default)]
pub struct PlanetParams {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

/// Columns of a vehicle.
#[derive(Clone, Debug, Default)]
pub struct VehicleParams {
    pub name: String,
    pub cargo_capacity: Option<String>,
    pub length: Option<String>,
    pub model: Option<String>,
}
