//! Tests for FavoriteService::add_favorite method.
//!
//! This module verifies creating favorites for each kind of target, the guard
//! against favoriting the same target twice, and rejection of favorites
//! referencing missing users or items.

use chrono::{DateTime, Duration, Utc};
use holocron::server::{
    error::{constraint::ConstraintError, Error},
    model::favorite::FavoriteTarget,
    service::favorite::FavoriteService,
};
use holocron_test_utils::prelude::*;
use sea_orm::EntityTrait;

/// Tests favoriting a planet.
///
/// Verifies that only the planet column is set and that the creation time is an
/// RFC 3339 timestamp in UTC.
///
/// Expected: Ok with the new favorite
#[tokio::test]
async fn adds_planet_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_planet("Tatooine")
        .build()
        .await?;
    let favorite_service = FavoriteService::new(&test.db);

    let before = Utc::now();
    let result = favorite_service
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await;

    assert!(result.is_ok());
    let favorite = result.unwrap();
    assert_eq!(favorite.user_id, 1);
    assert_eq!(favorite.planet_id, Some(1));
    assert_eq!(favorite.character_id, None);
    assert_eq!(favorite.vehicle_id, None);

    let created_at = DateTime::parse_from_rfc3339(&favorite.created_at).unwrap();
    assert_eq!(created_at.offset().local_minus_utc(), 0);
    assert!(created_at.with_timezone(&Utc) >= before - Duration::seconds(1));

    Ok(())
}

/// Expect one favorite per target kind, each pointing at its own item
#[tokio::test]
async fn adds_favorite_of_each_kind() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_character("Luke Skywalker")
        .with_mock_planet("Tatooine")
        .with_mock_vehicle("Sand Crawler")
        .build()
        .await?;
    let favorite_service = FavoriteService::new(&test.db);

    for target in [
        FavoriteTarget::Character(1),
        FavoriteTarget::Planet(1),
        FavoriteTarget::Vehicle(1),
    ] {
        let favorite = favorite_service.add_favorite(1, target).await.unwrap();
        let stored = entity::prelude::Favorite::find_by_id(favorite.id)
            .one(&test.db)
            .await?
            .unwrap();

        assert_eq!(FavoriteTarget::of(&stored), Some(target));
    }

    let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(favorites.len(), 3);

    Ok(())
}

/// Tests favoriting the same target twice.
///
/// Expected: Ok with the first favorite returned and no second row
#[tokio::test]
async fn returns_existing_favorite_for_same_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_vehicle("Sand Crawler")
        .build()
        .await?;
    let favorite_service = FavoriteService::new(&test.db);

    let first = favorite_service
        .add_favorite(1, FavoriteTarget::Vehicle(1))
        .await
        .unwrap();
    let second = favorite_service
        .add_favorite(1, FavoriteTarget::Vehicle(1))
        .await
        .unwrap();

    assert_eq!(first, second);
    let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(favorites.len(), 1);

    Ok(())
}

/// Expect a separate favorite when another user favorites the same target
#[tokio::test]
async fn adds_separate_favorite_for_other_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_user("b@b.com")
        .with_mock_planet("Tatooine")
        .build()
        .await?;
    let favorite_service = FavoriteService::new(&test.db);

    let first = favorite_service
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await
        .unwrap();
    let second = favorite_service
        .add_favorite(2, FavoriteTarget::Planet(1))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Expect MissingReference when the target does not exist
#[tokio::test]
async fn fails_for_missing_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .build()
        .await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service
        .add_favorite(1, FavoriteTarget::Character(42))
        .await;

    assert!(matches!(
        result,
        Err(Error::ConstraintError(ConstraintError::MissingReference(_)))
    ));
    assert!(entity::prelude::Favorite::find()
        .all(&test.db)
        .await?
        .is_empty());

    Ok(())
}

/// Expect MissingReference when the user does not exist
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service
        .add_favorite(1, FavoriteTarget::Planet(1))
        .await;

    assert!(matches!(
        result,
        Err(Error::ConstraintError(ConstraintError::MissingReference(_)))
    ));

    Ok(())
}
