//! Tests for FavoriteService::remove_favorite method.

use holocron::server::service::favorite::FavoriteService;
use holocron_test_utils::prelude::*;
use sea_orm::EntityTrait;

/// Expect Ok(true) and the favorite gone while its user and target remain
#[tokio::test]
async fn removes_existing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_planet("Tatooine")
        .build()
        .await?;
    let favorite = test.favorite().insert_planet_favorite(1, 1).await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.remove_favorite(favorite.id).await;

    assert!(matches!(result, Ok(true)));
    assert!(matches!(
        favorite_service.get_favorite(favorite.id).await,
        Ok(None)
    ));
    assert!(entity::prelude::User::find_by_id(1)
        .one(&test.db)
        .await?
        .is_some());
    assert!(entity::prelude::Planet::find_by_id(1)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Expect Ok(false) when the favorite does not exist
#[tokio::test]
async fn returns_false_for_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;
    let favorite_service = FavoriteService::new(&test.db);

    let result = favorite_service.remove_favorite(1).await;

    assert!(matches!(result, Ok(false)));

    Ok(())
}
