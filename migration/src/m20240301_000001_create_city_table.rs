use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(City::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(City::City)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(City::State)
                            .string_len(120)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the atomic get-or-create on the (city, state) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_city_city_state")
                    .table(City::Table)
                    .col(City::City)
                    .col(City::State)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    City,
    State,
}
