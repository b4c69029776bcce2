use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_uniq(Character::Name))
                    .col(string(Character::Gender))
                    .col(string(Character::HairColor))
                    .col(string(Character::EyeColor))
                    .col(string(Character::BirthYear))
                    .col(double(Character::Height))
                    .col(string(Character::SkinColor))
                    .col(string(Character::Type))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Character {
    Table,
    Id,
    Name,
    Gender,
    HairColor,
    EyeColor,
    BirthYear,
    Height,
    SkinColor,
    Type,
}
