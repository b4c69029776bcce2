use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_uniq(Planet::Name))
                    .col(big_integer(Planet::Population))
                    .col(string(Planet::Terrain))
                    .col(string(Planet::Climate))
                    .col(double(Planet::OrbitalPeriod))
                    .col(double(Planet::RotationPeriod))
                    .col(double(Planet::Diameter))
                    .col(string(Planet::Type))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Planet {
    Table,
    Id,
    Name,
    Population,
    Terrain,
    Climate,
    OrbitalPeriod,
    RotationPeriod,
    Diameter,
    Type,
}
