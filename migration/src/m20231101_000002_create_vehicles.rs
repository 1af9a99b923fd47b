use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // user_id is kept by value; vehicles are not checked against users
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(string_len(Vehicle::Id, 24).primary_key())
                    .col(string_len(Vehicle::UserId, 24).not_null())
                    .col(string_len(Vehicle::VehicleType, 32).not_null())
                    .col(string_len(Vehicle::Brand, 100).not_null())
                    .col(string_len(Vehicle::Model, 100).not_null())
                    .col(string_len(Vehicle::LicensePlateNumber, 16).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    UserId,
    VehicleType,
    Brand,
    Model,
    LicensePlateNumber,
}
