//! Favorite service.
//!
//! Adds and removes favorites and resolves a favorite to the user owning it and to the
//! single catalog item it points at.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        catalog::{CharacterDto, PlanetDto, VehicleDto},
        favorite::{FavoriteDto, FavoriteItemDto},
        user::UserDto,
    },
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, vehicle::VehicleRepository,
        },
        error::{favorite::FavoriteError, Error},
        model::favorite::FavoriteTarget,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a catalog item as a favorite of a user.
    ///
    /// If the user already favorited the same target the existing favorite is returned
    /// instead of creating a duplicate.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user adding the favorite
    /// - `target` - The character, planet, or vehicle being favorited
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The new or already existing favorite
    /// - `Err(Error::ConstraintError(MissingReference))` - User or target does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteDto, Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        if let Some(existing) = favorite_repo.find_by_target(user_id, target).await? {
            return Ok(existing.into());
        }

        let favorite = favorite_repo.create(user_id, target).await?;
        txn.commit().await?;

        tracing::debug!(user_id = %user_id, "Added favorite {}", target);

        Ok(favorite.into())
    }

    pub async fn get_favorite(&self, favorite_id: i32) -> Result<Option<FavoriteDto>, Error> {
        let favorite = FavoriteRepository::new(self.db)
            .get_by_id(favorite_id)
            .await?;

        Ok(favorite.map(FavoriteDto::from))
    }

    /// Removes a favorite, `Ok(false)` if it did not exist
    pub async fn remove_favorite(&self, favorite_id: i32) -> Result<bool, Error> {
        let result = FavoriteRepository::new(self.db)
            .delete(favorite_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves the user owning a favorite.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - The owning user
    /// - `Ok(None)` - Favorite not found in database
    /// - `Err(Error::InternalError)` - Favorite exists without its user (foreign key not enforced)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_favorite_owner(&self, favorite_id: i32) -> Result<Option<UserDto>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        match favorite_repo.get_with_user(favorite_id).await? {
            None => Ok(None),
            Some((favorite, maybe_user)) => {
                let user = maybe_user.ok_or_else(|| {
                    // Would only occur if the foreign key constraint requiring the user to exist
                    // is not enforced by the database
                    Error::InternalError(format!(
                        "Failed to find user ID {} owning favorite ID {}",
                        favorite.user_id, favorite.id
                    ))
                })?;

                Ok(Some(user.into()))
            }
        }
    }

    /// Resolves the catalog item a favorite points at.
    ///
    /// # Returns
    /// - `Ok(Some(FavoriteItemDto))` - The favorited character, planet, or vehicle
    /// - `Ok(None)` - Favorite not found in database
    /// - `Err(Error::FavoriteError(AmbiguousTarget))` - Row references no target or several
    /// - `Err(Error::FavoriteError(TargetNotFound))` - Referenced item is missing
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_favorite_item(
        &self,
        favorite_id: i32,
    ) -> Result<Option<FavoriteItemDto>, Error> {
        let favorite = match FavoriteRepository::new(self.db)
            .get_by_id(favorite_id)
            .await?
        {
            Some(favorite) => favorite,
            None => return Ok(None),
        };

        let target =
            FavoriteTarget::of(&favorite).ok_or_else(|| FavoriteError::AmbiguousTarget {
                favorite_id: favorite.id,
                targets: FavoriteTarget::count_targets(&favorite),
            })?;

        let item = match target {
            FavoriteTarget::Character(id) => CharacterRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(|character| FavoriteItemDto::Character(CharacterDto::from(character))),
            FavoriteTarget::Planet(id) => PlanetRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(|planet| FavoriteItemDto::Planet(PlanetDto::from(planet))),
            FavoriteTarget::Vehicle(id) => VehicleRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(|vehicle| FavoriteItemDto::Vehicle(VehicleDto::from(vehicle))),
        };

        let item = item.ok_or_else(|| FavoriteError::TargetNotFound {
            favorite_id: favorite.id,
            target: target.to_string(),
        })?;

        Ok(Some(item))
    }
}
