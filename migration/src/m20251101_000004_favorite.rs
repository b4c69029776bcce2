use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_user::User;

static IDX_FAVORITE_USER_ID: &str = "idx_favorite_user_id";
static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Inline foreign key, SQLite has no ALTER TABLE ... ADD CONSTRAINT
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer_null(Favorite::UserId))
                    .col(string_null(Favorite::Type))
                    .col(integer(Favorite::FavoriteId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    Id,
    UserId,
    Type,
    FavoriteId,
}
