use serde::{Deserialize, Serialize};

/// Projection of a character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub mass: Option<i32>,
}

/// Projection of a planet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

/// Projection of a vehicle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub cargo_capacity: Option<String>,
    pub length: Option<String>,
    pub model: Option<String>,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            gender: character.gender,
            height: character.height,
            mass: character.mass,
        }
    }
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
        }
    }
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            cargo_capacity: vehicle.cargo_capacity,
            length: vehicle.length,
            model: vehicle.model,
        }
    }
}
