//! Catalog fixture utilities for characters, planets and vehicles.
//!
//! Inserted records only fill the required `name` column, optional columns are left null.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_vehicle(
        &self,
        name: &str,
    ) -> Result<entity::vehicle::Model, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
