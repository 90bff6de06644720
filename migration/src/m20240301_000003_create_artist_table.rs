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
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artist::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Artist::Name)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Artist::Cityid)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Artist::Phone)
                            .string_len(120),
                    )
                    .col(
                        ColumnDef::new(Artist::Website)
                            .string_len(120),
                    )
                    .col(
                        ColumnDef::new(Artist::FacebookLink)
                            .string_len(120),
                    )
                    .col(
                        ColumnDef::new(Artist::Genres)
                            .string_len(500),
                    )
                    .col(
                        ColumnDef::new(Artist::SeekingVenue)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Artist::SeekingDescription)
                            .string_len(120),
                    )
                    .col(
                        ColumnDef::new(Artist::ImageLink)
                            .string_len(500),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_cityid")
                            .from(Artist::Table, Artist::Cityid)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_artist_cityid")
                    .table(Artist::Table)
                    .col(Artist::Cityid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Artist {
    Table,
    Id,
    Name,
    Cityid,
    Phone,
    Website,
    FacebookLink,
    Genres,
    SeekingVenue,
    SeekingDescription,
    ImageLink,
}
