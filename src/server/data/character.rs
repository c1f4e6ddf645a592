use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::{db::CharacterModel, params::CharacterParams};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CharacterParams) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(params.name),
            gender: ActiveValue::Set(params.gender),
            height: ActiveValue::Set(params.height),
            mass: ActiveValue::Set(params.mass),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every column of a character, returns `None` if the character does not exist
    pub async fn update(
        &self,
        character_id: i32,
        params: CharacterParams,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.into_active_model();
        character_am.name = ActiveValue::Set(params.name);
        character_am.gender = ActiveValue::Set(params.gender);
        character_am.height = ActiveValue::Set(params.height);
        character_am.mass = ActiveValue::Set(params.mass);

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character along with every favorite referencing it
    ///
    /// Returns OK regardless of character existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
