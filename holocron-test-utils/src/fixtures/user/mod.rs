//! User fixture utilities.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_FIRST_NAME, TEST_LAST_NAME, TEST_PASSWORD},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the provided email and placeholder values for the other columns.
    pub async fn insert_mock_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(email, TEST_PASSWORD, TEST_FIRST_NAME, TEST_LAST_NAME)
            .await
    }

    pub async fn insert_user(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(password.to_string()),
                first_name: ActiveValue::Set(first_name.to_string()),
                last_name: ActiveValue::Set(last_name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
