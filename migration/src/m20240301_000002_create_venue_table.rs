use sea_orm_migration::prelude::*;

use super::m20240301_000001_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venue::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Venue::Name)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Venue::Address)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Venue::Cityid)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Venue::Phone)
                            .string_len(120),
                    )
                    .col(
                        ColumnDef::new(Venue::Website)
                            .string_len(120),
                    )
                    .col(
                        ColumnDef::new(Venue::FacebookLink)
                            .string_len(120),
                    )
                    .col(
                        ColumnDef::new(Venue::Genres)
                            .string_len(500),
                    )
                    .col(
                        ColumnDef::new(Venue::SeekingTalent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Venue::SeekingDescription)
                            .string_len(120),
                    )
                    .col(
                        ColumnDef::new(Venue::ImageLink)
                            .string_len(500),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venue_cityid")
                            .from(Venue::Table, Venue::Cityid)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_venue_cityid")
                    .table(Venue::Table)
                    .col(Venue::Cityid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Venue {
    Table,
    Id,
    Name,
    Address,
    Cityid,
    Phone,
    Website,
    FacebookLink,
    Genres,
    SeekingTalent,
    SeekingDescription,
    ImageLink,
}
