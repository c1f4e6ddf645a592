//! Catalog service for characters, planets and vehicles.
//!
//! Deleting a catalog item also deletes every favorite pointing at it, through the
//! cascading foreign keys of the favorites table.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::catalog::{CharacterDto, PlanetDto, VehicleDto},
    server::{
        data::{
            character::CharacterRepository, planet::PlanetRepository, vehicle::VehicleRepository,
        },
        error::Error,
        model::params::{CharacterParams, PlanetParams, VehicleParams},
        service::require_non_empty,
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character, `name` must not be empty
    pub async fn create_character(&self, params: CharacterParams) -> Result<CharacterDto, Error> {
        require_non_empty("name", &params.name)?;

        let character = CharacterRepository::new(self.db).create(params).await?;

        Ok(character.into())
    }

    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?;

        Ok(character.map(CharacterDto::from))
    }

    pub async fn list_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Replaces every column of a character, `Ok(None)` if it does not exist
    pub async fn update_character(
        &self,
        character_id: i32,
        params: CharacterParams,
    ) -> Result<Option<CharacterDto>, Error> {
        require_non_empty("name", &params.name)?;

        let txn = self.db.begin().await?;
        let character = CharacterRepository::new(&txn)
            .update(character_id, params)
            .await?;
        txn.commit().await?;

        Ok(character.map(CharacterDto::from))
    }

    /// Deletes a character and the favorites pointing at it, `Ok(false)` if it did not exist
    pub async fn delete_character(&self, character_id: i32) -> Result<bool, Error> {
        let result = CharacterRepository::new(self.db)
            .delete(character_id)
            .await?;

        if result.rows_affected > 0 {
            tracing::debug!(character_id = %character_id, "Deleted character");
        }

        Ok(result.rows_affected > 0)
    }

    /// Creates a planet, `name` must not be empty
    pub async fn create_planet(&self, params: PlanetParams) -> Result<PlanetDto, Error> {
        require_non_empty("name", &params.name)?;

        let planet = PlanetRepository::new(self.db).create(params).await?;

        Ok(planet.into())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet = PlanetRepository::new(self.db).get_by_id(planet_id).await?;

        Ok(planet.map(PlanetDto::from))
    }

    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Replaces every column of a planet, `Ok(None)` if it does not exist
    pub async fn update_planet(
        &self,
        planet_id: i32,
        params: PlanetParams,
    ) -> Result<Option<PlanetDto>, Error> {
        require_non_empty("name", &params.name)?;

        let txn = self.db.begin().await?;
        let planet = PlanetRepository::new(&txn).update(planet_id, params).await?;
        txn.commit().await?;

        Ok(planet.map(PlanetDto::from))
    }

    /// Deletes a planet and the favorites pointing at it, `Ok(false)` if it did not exist
    pub async fn delete_planet(&self, planet_id: i32) -> Result<bool, Error> {
        let result = PlanetRepository::new(self.db).delete(planet_id).await?;

        if result.rows_affected > 0 {
            tracing::debug!(planet_id = %planet_id, "Deleted planet");
        }

        Ok(result.rows_affected > 0)
    }

    /// Creates a vehicle, `name` must not be empty
    pub async fn create_vehicle(&self, params: VehicleParams) -> Result<VehicleDto, Error> {
        require_non_empty("name", &params.name)?;

        let vehicle = VehicleRepository::new(self.db).create(params).await?;

        Ok(vehicle.into())
    }

    pub async fn get_vehicle(&self, vehicle_id: i32) -> Result<Option<VehicleDto>, Error> {
        let vehicle = VehicleRepository::new(self.db).get_by_id(vehicle_id).await?;

        Ok(vehicle.map(VehicleDto::from))
    }

    pub async fn list_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    /// Replaces every column of a vehicle, `Ok(None)` if it does not exist
    pub async fn update_vehicle(
        &self,
        vehicle_id: i32,
        params: VehicleParams,
    ) -> Result<Option<VehicleDto>, Error> {
        require_non_empty("name", &params.name)?;

        let txn = self.db.begin().await?;
        let vehicle = VehicleRepository::new(&txn)
            .update(vehicle_id, params)
            .await?;
        txn.commit().await?;

        Ok(vehicle.map(VehicleDto::from))
    }

    /// Deletes a vehicle and the favorites pointing at it, `Ok(false)` if it did not exist
    pub async fn delete_vehicle(&self, vehicle_id: i32) -> Result<bool, Error> {
        let result = VehicleRepository::new(self.db).delete(vehicle_id).await?;

        if result.rows_affected > 0 {
            tracing::debug!(vehicle_id = %vehicle_id, "Deleted vehicle");
        }

        Ok(result.rows_affected > 0)
    }
}
