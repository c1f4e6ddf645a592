use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::{db::PlanetModel, params::PlanetParams};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: PlanetParams) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(params.name),
            climate: ActiveValue::Set(params.climate),
            terrain: ActiveValue::Set(params.terrain),
            population: ActiveValue::Set(params.population),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every column of a planet, returns `None` if the planet does not exist
    pub async fn update(
        &self,
        planet_id: i32,
        params: PlanetParams,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        planet_am.name = ActiveValue::Set(params.name);
        planet_am.climate = ActiveValue::Set(params.climate);
        planet_am.terrain = ActiveValue::Set(params.terrain);
        planet_am.population = ActiveValue::Set(params.population);

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet along with every favorite referencing it
    ///
    /// Returns OK regardless of planet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
