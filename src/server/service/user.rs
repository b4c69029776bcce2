use sea_orm::DatabaseConnection;

use crate::{
    model::user::{NewUser, UserDto},
    server::{data::user::UserRepository, error::Error, util::password::hash_password},
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user.
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Registers a new user, storing an Argon2id hash of the password.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::Conflict)` - Username or email already in use
    /// - `Err(Error::PasswordHashError)` - Password could not be hashed
    /// - `Err(Error::DbErr)` - Database insert failed
    pub async fn create_user(&self, user: NewUser) -> Result<UserDto, Error> {
        let password_hash = hash_password(&user.password)?;

        let user = UserRepository::new(self.db)
            .create(user.username, user.email, password_hash)
            .await
            .map_err(|e| {
                Error::conflict_on_unique(e, "A user with this username or email already exists")
            })?;

        tracing::debug!(user_id = %user.id, "Created user");

        Ok(user.into())
    }
}
