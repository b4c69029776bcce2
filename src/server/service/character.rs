use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::character::{CharacterDto, CharacterPatch, NewCharacter},
    server::{data::character::CharacterRepository, error::Error},
};

static CHARACTER_CONFLICT: &str = "A character with this name already exists";

/// Service for managing characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of CharacterService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every character.
    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a character by ID, `Ok(None)` if it does not exist.
    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?;

        Ok(character.map(CharacterDto::from))
    }

    /// Creates a character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The created character with its generated ID
    /// - `Err(Error::Conflict)` - A character with the same name exists
    /// - `Err(Error::DbErr)` - Database insert failed
    pub async fn create_character(&self, character: NewCharacter) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .create(character)
            .await
            .map_err(|e| Error::conflict_on_unique(e, CHARACTER_CONFLICT))?;

        tracing::debug!(character_id = %character.id, "Created character");

        Ok(character.into())
    }

    /// Applies a partial update to a character within a single transaction.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterDto))` - The character after the update
    /// - `Ok(None)` - Character not found, nothing was written
    /// - `Err(Error::Conflict)` - The new name is used by another character
    /// - `Err(Error::DbErr)` - Database update failed, the transaction is rolled back
    pub async fn update_character(
        &self,
        character_id: i32,
        patch: CharacterPatch,
    ) -> Result<Option<CharacterDto>, Error> {
        let txn = self.db.begin().await?;

        let character = CharacterRepository::new(&txn)
            .update(character_id, patch)
            .await
            .map_err(|e| Error::conflict_on_unique(e, CHARACTER_CONFLICT))?;

        txn.commit().await?;

        Ok(character.map(CharacterDto::from))
    }

    /// Deletes a character, returning whether it existed.
    pub async fn delete_character(&self, character_id: i32) -> Result<bool, Error> {
        let result = CharacterRepository::new(self.db)
            .delete(character_id)
            .await?;

        if result.rows_affected > 0 {
            tracing::debug!(character_id = %character_id, "Deleted character");
        }

        Ok(result.rows_affected > 0)
    }
}
