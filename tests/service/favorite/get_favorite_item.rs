//! Tests for FavoriteService::get_favorite_item method.
//!
//! Covers resolving each kind of target and rows written outside the service
//! that reference no target or more than one.

use holocron::{
    model::favorite::FavoriteItemDto,
    server::{
        error::{favorite::FavoriteError, Error},
        service::favorite::FavoriteService,
    },
};
use holocron_test_utils::prelude::*;

/// Expect the favorited planet tagged with its kind
#[tokio::test]
async fn resolves_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_planet("Tatooine")
        .build()
        .await?;
    let favorite = test.favorite().insert_planet_favorite(1, 1).await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.get_favorite_item(favorite.id).await;

    assert!(result.is_ok());
    let item = result.unwrap().unwrap();
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        serde_json::json!({
            "type": "planet",
            "id": 1,
            "name": "Tatooine",
            "climate": null,
            "terrain": null,
            "population": null,
        })
    );

    Ok(())
}

/// Expect the favorited character and vehicle resolved to their own kinds
#[tokio::test]
async fn resolves_character_and_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_character("Luke Skywalker")
        .with_mock_vehicle("Sand Crawler")
        .build()
        .await?;
    let character_favorite = test.favorite().insert_character_favorite(1, 1).await?;
    let vehicle_favorite = test.favorite().insert_vehicle_favorite(1, 1).await?;
    let favorite_service = FavoriteService::new(&test.db);

    let character = favorite_service
        .get_favorite_item(character_favorite.id)
        .await
        .unwrap()
        .unwrap();
    let vehicle = favorite_service
        .get_favorite_item(vehicle_favorite.id)
        .await
        .unwrap()
        .unwrap();

    assert!(matches!(character, FavoriteItemDto::Character(ref c) if c.name == "Luke Skywalker"));
    assert!(matches!(vehicle, FavoriteItemDto::Vehicle(ref v) if v.name == "Sand Crawler"));

    Ok(())
}

/// Tests a row referencing both a planet and a vehicle.
///
/// Expected: Err with FavoriteError::AmbiguousTarget counting 2 targets
#[tokio::test]
async fn fails_for_row_with_two_targets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_planet("Tatooine")
        .with_mock_vehicle("Sand Crawler")
        .build()
        .await?;
    let favorite = test
        .favorite()
        .insert_favorite(1, Some(1), None, Some(1))
        .await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.get_favorite_item(favorite.id).await;

    assert!(matches!(
        result,
        Err(Error::FavoriteError(FavoriteError::AmbiguousTarget { favorite_id, targets: 2 }))
            if favorite_id == favorite.id
    ));

    Ok(())
}

/// Expect AmbiguousTarget counting 0 targets for a row referencing nothing
#[tokio::test]
async fn fails_for_row_without_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .build()
        .await?;
    let favorite = test.favorite().insert_favorite(1, None, None, None).await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.get_favorite_item(favorite.id).await;

    assert!(matches!(
        result,
        Err(Error::FavoriteError(FavoriteError::AmbiguousTarget { targets: 0, .. }))
    ));

    Ok(())
}

/// Expect Ok(None) when the favorite does not exist
#[tokio::test]
async fn returns_none_for_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.get_favorite_item(1).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
