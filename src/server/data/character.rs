use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    model::character::{CharacterPatch, NewCharacter},
    server::model::db::CharacterModel,
};

/// Queries and writes on the `character` table.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    pub async fn create(
        &self,
        character: NewCharacter,
    ) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            gender: ActiveValue::Set(character.gender),
            hair_color: ActiveValue::Set(character.hair_color),
            eye_color: ActiveValue::Set(character.eye_color),
            birth_year: ActiveValue::Set(character.birth_year),
            height: ActiveValue::Set(character.height),
            skin_color: ActiveValue::Set(character.skin_color),
            r#type: ActiveValue::Set(character.kind),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a character by ID, `Ok(None)` if it does not exist
    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Overwrites the fields present in `patch`, leaving all others untouched
    ///
    /// Returns `Ok(None)` if no character has the given ID.
    pub async fn update(
        &self,
        character_id: i32,
        patch: CharacterPatch,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let Some(character) = self.get_by_id(character_id).await? else {
            return Ok(None);
        };

        let mut character_am = character.into_active_model();
        if let Some(name) = patch.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(gender) = patch.gender {
            character_am.gender = ActiveValue::Set(gender);
        }
        if let Some(hair_color) = patch.hair_color {
            character_am.hair_color = ActiveValue::Set(hair_color);
        }
        if let Some(eye_color) = patch.eye_color {
            character_am.eye_color = ActiveValue::Set(eye_color);
        }
        if let Some(birth_year) = patch.birth_year {
            character_am.birth_year = ActiveValue::Set(birth_year);
        }
        if let Some(height) = patch.height {
            character_am.height = ActiveValue::Set(height);
        }
        if let Some(skin_color) = patch.skin_color {
            character_am.skin_color = ActiveValue::Set(skin_color);
        }
        if let Some(kind) = patch.kind {
            character_am.r#type = ActiveValue::Set(kind);
        }

        if !character_am.is_changed() {
            return self.get_by_id(character_id).await;
        }

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Check [`DeleteResult::rows_affected`] to know whether the character existed.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
