//! User service.
//!
//! Account management and traversal from a user to its favorites.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{favorite::FavoriteDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::{constraint::ConstraintError, Error},
        model::params::UserParams,
        service::require_non_empty,
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// # Arguments
    /// - `params` - Columns of the new user, every field is required
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user, without its password
    /// - `Err(Error::ConstraintError(MissingField))` - A required field is empty
    /// - `Err(Error::ConstraintError(EmailTaken))` - Another user already has this email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, params: UserParams) -> Result<UserDto, Error> {
        validate(&params)?;

        let email = params.email.clone();
        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .create(params)
            .await
            .map_err(|err| classify_email_err(err, &email))?;

        tracing::debug!(user_id = %user.id, "Created user");

        Ok(user.into())
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?.map(UserDto::from))
    }

    /// Replaces every column of a user.
    ///
    /// The lookup and the write share one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - The updated user
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::ConstraintError(MissingField))` - A required field is empty
    /// - `Err(Error::ConstraintError(EmailTaken))` - Another user already has this email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_user(
        &self,
        user_id: i32,
        params: UserParams,
    ) -> Result<Option<UserDto>, Error> {
        validate(&params)?;

        let email = params.email.clone();
        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .update(user_id, params)
            .await
            .map_err(|err| classify_email_err(err, &email))?;

        txn.commit().await?;

        Ok(user.map(UserDto::from))
    }

    /// Deletes a user and, through the cascading foreign key, all of its favorites.
    ///
    /// # Returns
    /// - `Ok(true)` - User existed and was deleted
    /// - `Ok(false)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);
        let result = user_repo.delete(user_id).await?;

        if result.rows_affected > 0 {
            tracing::debug!(user_id = %user_id, "Deleted user and its favorites");
        }

        Ok(result.rows_affected > 0)
    }

    /// Lists the favorites owned by a user, in no guaranteed order.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<FavoriteDto>))` - User found, possibly without favorites
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(
        &self,
        user_id: i32,
    ) -> Result<Option<Vec<FavoriteDto>>, Error> {
        let user_repo = UserRepository::new(self.db);

        let favorites = user_repo
            .get_with_favorites(user_id)
            .await?
            .map(|(_, favorites)| favorites.into_iter().map(FavoriteDto::from).collect());

        Ok(favorites)
    }
}

fn validate(params: &UserParams) -> Result<(), ConstraintError> {
    require_non_empty("email", &params.email)?;
    require_non_empty("password", &params.password)?;
    require_non_empty("first_name", &params.first_name)?;
    require_non_empty("last_name", &params.last_name)?;

    Ok(())
}

/// The only unique column of users is the email
fn classify_email_err(err: DbErr, email: &str) -> Error {
    match Error::from(err) {
        Error::ConstraintError(ConstraintError::UniqueViolation(_)) => {
            ConstraintError::EmailTaken(email.to_string()).into()
        }
        err => err,
    }
}
