use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::UserModel;

/// Queries and writes on the `user` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new, active user
    ///
    /// `password_hash` is stored as given, hashing is the caller's responsibility.
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets every user ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user by ID, `Ok(None)` if it does not exist
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }
}
