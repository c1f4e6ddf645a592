//! Tests for UserService::update_user method.

use holocron::server::{
    error::{constraint::ConstraintError, Error},
    model::params::UserParams,
    service::user::UserService,
};
use holocron_test_utils::prelude::*;

fn params(email: &str, first_name: &str) -> UserParams {
    UserParams {
        email: email.to_string(),
        password: "secret".to_string(),
        first_name: first_name.to_string(),
        last_name: "Lee".to_string(),
    }
}

/// Expect Ok with the new columns when the user exists
#[tokio::test]
async fn updates_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .build()
        .await?;
    let user_service = UserService::new(&test.db);

    let result = user_service.update_user(1, params("b@b.com", "Bo")).await;

    assert!(result.is_ok());
    let user = result.unwrap().unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "b@b.com");
    assert_eq!(user.first_name, "Bo");

    let stored = user_service.get_user(1).await.unwrap().unwrap();
    assert_eq!(stored, user);

    Ok(())
}

/// Expect Ok(None) when the user does not exist
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;
    let user_service = UserService::new(&test.db);

    let result = user_service.update_user(1, params("b@b.com", "Bo")).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect EmailTaken when moving a user onto another user's email
#[tokio::test]
async fn fails_for_email_of_other_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user("a@a.com")
        .with_mock_user("b@b.com")
        .build()
        .await?;
    let user_service = UserService::new(&test.db);

    let result = user_service.update_user(2, params("a@a.com", "Bo")).await;

    assert!(matches!(
        result,
        Err(Error::ConstraintError(ConstraintError::EmailTaken(_)))
    ));
    let unchanged = user_service.get_user(2).await.unwrap().unwrap();
    assert_eq!(unchanged.email, "b@b.com");

    Ok(())
}
