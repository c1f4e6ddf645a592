//! Favorite fixture utilities.
//!
//! These helpers write the target columns directly and bypass the application's
//! single-target guarantee, which lets tests create rows referencing no target or
//! several targets at once.

pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite row with arbitrary target columns.
    ///
    /// # Arguments
    /// - `user_id` - Owning user, must exist
    /// - `planet_id` / `character_id` / `vehicle_id` - Target columns, each must exist when set
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        planet_id: Option<i32>,
        character_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                character_id: ActiveValue::Set(character_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, None, Some(character_id), None)
            .await
    }

    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, Some(planet_id), None, None)
            .await
    }

    pub async fn insert_vehicle_favorite(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, None, None, Some(vehicle_id))
            .await
    }
}
