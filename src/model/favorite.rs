use serde::{Deserialize, Serialize};

use crate::model::catalog::{CharacterDto, PlanetDto, VehicleDto};

/// Projection of a favorite row.
///
/// `created_at` is an RFC 3339 timestamp carrying its UTC offset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub created_at: String,
}

/// The catalog item a favorite points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FavoriteItemDto {
    Character(CharacterDto),
    Planet(PlanetDto),
    Vehicle(VehicleDto),
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            character_id: favorite.character_id,
            vehicle_id: favorite.vehicle_id,
            created_at: favorite.created_at.to_rfc3339(),
        }
    }
}
