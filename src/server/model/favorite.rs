use std::fmt;

use crate::server::model::db::FavoriteModel;

/// The single catalog item a favorite points at.
///
/// Creating a favorite requires one of these, so a favorite written by the application
/// always references exactly one character, planet, or vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    /// Character ID
    Character(i32),
    /// Planet ID
    Planet(i32),
    /// Vehicle ID
    Vehicle(i32),
}

impl FavoriteTarget {
    /// Reads the target back from the nullable columns of a favorite row.
    ///
    /// Returns `None` unless exactly one of the columns is set.
    pub fn from_columns(
        planet_id: Option<i32>,
        character_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Option<Self> {
        match (planet_id, character_id, vehicle_id) {
            (Some(id), None, None) => Some(Self::Planet(id)),
            (None, Some(id), None) => Some(Self::Character(id)),
            (None, None, Some(id)) => Some(Self::Vehicle(id)),
            _ => None,
        }
    }

    /// Reads the target of a stored favorite, see [`FavoriteTarget::from_columns`].
    pub fn of(favorite: &FavoriteModel) -> Option<Self> {
        Self::from_columns(
            favorite.planet_id,
            favorite.character_id,
            favorite.vehicle_id,
        )
    }

    /// Number of target columns set on a stored favorite.
    pub fn count_targets(favorite: &FavoriteModel) -> usize {
        [
            favorite.planet_id,
            favorite.character_id,
            favorite.vehicle_id,
        ]
        .iter()
        .filter(|id| id.is_some())
        .count()
    }

    /// Column values as `(planet_id, character_id, vehicle_id)`.
    pub fn columns(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match *self {
            Self::Planet(id) => (Some(id), None, None),
            Self::Character(id) => (None, Some(id), None),
            Self::Vehicle(id) => (None, None, Some(id)),
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character(id) => write!(f, "character {}", id),
            Self::Planet(id) => write!(f, "planet {}", id),
            Self::Vehicle(id) => write!(f, "vehicle {}", id),
        }
    }
}
