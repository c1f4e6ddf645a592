use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::{
    db::{FavoriteModel, UserModel},
    params::UserParams,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Fails with a unique constraint violation if the email is already registered.
    pub async fn create(&self, params: UserParams) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Replaces every column of a user, returns `None` if the user does not exist
    pub async fn update(
        &self,
        user_id: i32,
        params: UserParams,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.email = ActiveValue::Set(params.email);
        user_am.password = ActiveValue::Set(params.password);
        user_am.first_name = ActiveValue::Set(params.first_name);
        user_am.last_name = ActiveValue::Set(params.last_name);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user along with every favorite it owns
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }

    /// Gets a user together with its favorites, in no particular order
    pub async fn get_with_favorites(
        &self,
        user_id: i32,
    ) -> Result<Option<(UserModel, Vec<FavoriteModel>)>, DbErr> {
        let mut users = entity::prelude::User::find_by_id(user_id)
            .find_with_related(entity::prelude::Favorite)
            .all(self.db)
            .await?;

        Ok(users.pop())
    }
}
