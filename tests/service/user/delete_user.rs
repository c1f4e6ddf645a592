//! Tests for UserService::delete_user method.
//!
//! Deleting a user must remove every favorite the user owns while leaving the
//! catalog and other users' favorites untouched.

use holocron::server::service::user::UserService;
use holocron_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests deleting a user owning one favorite of each kind.
///
/// Expected: Ok(true) with all 3 favorites removed and the catalog kept
#[tokio::test]
async fn removes_all_favorites_of_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_user("b@b.com")
        .with_mock_character("Luke Skywalker")
        .with_mock_planet("Tatooine")
        .with_mock_vehicle("Sand Crawler")
        .build()
        .await?;
    test.favorite().insert_character_favorite(1, 1).await?;
    test.favorite().insert_planet_favorite(1, 1).await?;
    test.favorite().insert_vehicle_favorite(1, 1).await?;
    let kept = test.favorite().insert_planet_favorite(2, 1).await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.delete_user(1).await;

    assert!(matches!(result, Ok(true)));

    let owned = entity::prelude::Favorite::find()
        .filter(entity::favorite::Column::UserId.eq(1))
        .all(&test.db)
        .await?;
    assert!(owned.is_empty());

    let remaining = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(remaining, vec![kept]);

    assert!(entity::prelude::Planet::find_by_id(1)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Expect Ok(false) when the user does not exist
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;
    let user_service = UserService::new(&test.db);

    let result = user_service.delete_user(1).await;

    assert!(matches!(result, Ok(false)));

    Ok(())
}
