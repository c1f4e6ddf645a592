use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::server::model::{
    db::{FavoriteModel, UserModel},
    favorite::FavoriteTarget,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite of `user_id` for the provided target, timestamped now in UTC
    ///
    /// Fails with a foreign key violation if the user or target does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let (planet_id, character_id, vehicle_id) = target.columns();

        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(&self, favorite_id: i32) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets a favorite along with the user owning it
    pub async fn get_with_user(
        &self,
        favorite_id: i32,
    ) -> Result<Option<(FavoriteModel, Option<UserModel>)>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Finds the favorite of `user_id` pointing at exactly the provided target
    pub async fn find_by_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        let target_condition = match target {
            FavoriteTarget::Planet(id) => entity::favorite::Column::PlanetId.eq(id),
            FavoriteTarget::Character(id) => entity::favorite::Column::CharacterId.eq(id),
            FavoriteTarget::Vehicle(id) => entity::favorite::Column::VehicleId.eq(id),
        };

        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_condition)
            .all(self.db)
            .await
            .map(|favorites| {
                favorites
                    .into_iter()
                    .find(|favorite| FavoriteTarget::of(favorite) == Some(target))
            })
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
