use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::{model::favorite::FavoriteKind, server::model::db::FavoriteModel};

/// Queries and writes on the `favorite` table.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite of `user_id` pointing at the planet or character `favorite_id`
    ///
    /// The referenced records are not checked here, see
    /// [`FavoriteService::create_favorite`](crate::server::service::favorite::FavoriteService::create_favorite).
    pub async fn create(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        favorite_id: i32,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(Some(user_id)),
            r#type: ActiveValue::Set(Some(kind.as_str().to_string())),
            favorite_id: ActiveValue::Set(favorite_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets every favorite ordered by ID
    pub async fn get_all(&self) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Check [`DeleteResult::rows_affected`] to know whether the favorite existed.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
