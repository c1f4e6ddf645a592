use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::{db::VehicleModel, params::VehicleParams};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: VehicleParams) -> Result<VehicleModel, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(params.name),
            cargo_capacity: ActiveValue::Set(params.cargo_capacity),
            length: ActiveValue::Set(params.length),
            model: ActiveValue::Set(params.model),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    /// Gets every vehicle ordered by ID
    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every column of a vehicle, returns `None` if the vehicle does not exist
    pub async fn update(
        &self,
        vehicle_id: i32,
        params: VehicleParams,
    ) -> Result<Option<VehicleModel>, DbErr> {
        let vehicle = match entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?
        {
            Some(vehicle) => vehicle,
            None => return Ok(None),
        };

        let mut vehicle_am = vehicle.into_active_model();
        vehicle_am.name = ActiveValue::Set(params.name);
        vehicle_am.cargo_capacity = ActiveValue::Set(params.cargo_capacity);
        vehicle_am.length = ActiveValue::Set(params.length);
        vehicle_am.model = ActiveValue::Set(params.model);

        let vehicle = vehicle_am.update(self.db).await?;

        Ok(Some(vehicle))
    }

    /// Deletes a vehicle along with every favorite referencing it
    ///
    /// Returns OK regardless of vehicle existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await
    }
}
