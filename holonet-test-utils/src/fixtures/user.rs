use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Stored in place of a real Argon2 hash, fixtures never log in.
pub const MOCK_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$mock$mock";

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the email `{username}@holonet.test`.
    pub async fn insert_mock_user(
        &self,
        username: &str,
    ) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@holonet.test", username)),
                password: ActiveValue::Set(MOCK_PASSWORD_HASH.to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
