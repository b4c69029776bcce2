use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{FavoriteDto, FavoriteKind, NewFavorite},
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository,
        },
        error::Error,
    },
};

/// Service for managing user favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every favorite.
    pub async fn get_favorites(&self) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db).get_all().await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    /// Creates a favorite after checking that the user and the favorited record exist.
    ///
    /// `favorite.kind` selects whether `favorite_id` is looked up among planets or characters.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite
    /// - `Err(Error::NotFound("User"))` - `user_id` does not match a user
    /// - `Err(Error::NotFound("Planet" | "Character"))` - `favorite_id` does not match a record
    /// - `Err(Error::DbErr)` - Database query or insert failed
    pub async fn create_favorite(&self, favorite: NewFavorite) -> Result<FavoriteDto, Error> {
        if UserRepository::new(self.db)
            .get_by_id(favorite.user_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound("User"));
        }

        let target_exists = match favorite.kind {
            FavoriteKind::Planet => PlanetRepository::new(self.db)
                .get_by_id(favorite.favorite_id)
                .await?
                .is_some(),
            FavoriteKind::Character => CharacterRepository::new(self.db)
                .get_by_id(favorite.favorite_id)
                .await?
                .is_some(),
        };

        if !target_exists {
            return Err(Error::NotFound(match favorite.kind {
                FavoriteKind::Planet => "Planet",
                FavoriteKind::Character => "Character",
            }));
        }

        let favorite = FavoriteRepository::new(self.db)
            .create(favorite.user_id, favorite.kind, favorite.favorite_id)
            .await?;

        tracing::debug!(favorite_id = %favorite.id, "Created favorite");

        Ok(favorite.into())
    }

    /// Deletes a favorite, returning whether it existed.
    pub async fn delete_favorite(&self, favorite_id: i32) -> Result<bool, Error> {
        let result = FavoriteRepository::new(self.db).delete(favorite_id).await?;

        Ok(result.rows_affected > 0)
    }
}
