use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite row as-is, `favorite_id` is not checked against `kind`.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        kind: &str,
        favorite_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(Some(user_id)),
                r#type: ActiveValue::Set(Some(kind.to_string())),
                favorite_id: ActiveValue::Set(favorite_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
