use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn character<'a>(&'a mut self) -> CharacterFixtures<'a> {
        CharacterFixtures { setup: self }
    }
}

pub struct CharacterFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CharacterFixtures<'a> {
    /// Insert a human character with the given name.
    pub async fn insert_mock_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gender: ActiveValue::Set("male".to_string()),
                hair_color: ActiveValue::Set("brown".to_string()),
                eye_color: ActiveValue::Set("brown".to_string()),
                birth_year: ActiveValue::Set("29BBY".to_string()),
                height: ActiveValue::Set(180.0),
                skin_color: ActiveValue::Set("fair".to_string()),
                r#type: ActiveValue::Set("human".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
