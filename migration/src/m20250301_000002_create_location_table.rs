use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Location {
    Table,
    Id,
    UserId,
    Latitude,
    Longitude,
    Timestamp,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // No FK to user: locations outlive their user row.
        m.create_table(
            Table::create()
                .table(Location::Table)
                .if_not_exists()
                .col(ColumnDef::new(Location::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Location::UserId).uuid().not_null())
                .col(ColumnDef::new(Location::Latitude).double().not_null())
                .col(ColumnDef::new(Location::Longitude).double().not_null())
                .col(ColumnDef::new(Location::Timestamp).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_location_user_id")
                .table(Location::Table)
                .col(Location::UserId)
                .if_not_exists()
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Location::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
