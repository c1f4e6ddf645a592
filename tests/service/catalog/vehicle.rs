//! Tests for the vehicle methods of CatalogService.

use holocron::server::{model::params::VehicleParams, service::catalog::CatalogService};
use holocron_test_utils::prelude::*;
use sea_orm::EntityTrait;

fn sand_crawler() -> VehicleParams {
    VehicleParams {
        name: "Sand Crawler".to_string(),
        cargo_capacity: Some("50000".to_string()),
        length: Some("36.8".to_string()),
        model: Some("Digger Crawler".to_string()),
    }
}

/// Expect the created vehicle returned by get and list
#[tokio::test]
async fn creates_and_gets_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;
    let catalog_service = CatalogService::new(&test.db);

    let result = catalog_service.create_vehicle(sand_crawler()).await;

    assert!(result.is_ok());
    let vehicle = result.unwrap();
    assert_eq!(vehicle.cargo_capacity.as_deref(), Some("50000"));
    assert_eq!(vehicle.length.as_deref(), Some("36.8"));
    assert_eq!(
        catalog_service.get_vehicle(vehicle.id).await.unwrap(),
        Some(vehicle.clone())
    );
    assert_eq!(catalog_service.list_vehicles().await.unwrap(), vec![vehicle]);

    Ok(())
}

/// Expect Ok(None) for a vehicle that does not exist
#[tokio::test]
async fn get_returns_none_for_missing_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;
    let catalog_service = CatalogService::new(&test.db);

    let result = catalog_service.get_vehicle(1).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect the replaced columns persisted
#[tokio::test]
async fn updates_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_vehicle("Sand Crawler")
        .build()
        .await?;
    let catalog_service = CatalogService::new(&test.db);

    let result = catalog_service.update_vehicle(1, sand_crawler()).await;

    assert!(result.is_ok());
    let db_vehicle = entity::prelude::Vehicle::find_by_id(1)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(db_vehicle.model.as_deref(), Some("Digger Crawler"));

    Ok(())
}

/// Expect the favorites pointing at the vehicle removed
#[tokio::test]
async fn deletes_vehicle_and_its_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_vehicle("Sand Crawler")
        .build()
        .await?;
    test.favorite().insert_vehicle_favorite(1, 1).await?;
    let catalog_service = CatalogService::new(&test.db);

    let result = catalog_service.delete_vehicle(1).await;

    assert!(matches!(result, Ok(true)));
    assert!(entity::prelude::Favorite::find()
        .all(&test.db)
        .await?
        .is_empty());

    Ok(())
}
