use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(string_len(Ticket::Id, 36).primary_key())
                    .col(string_len(Ticket::UserId, 24).not_null())
                    .col(string_len(Ticket::VehicleLicenseNumber, 16).not_null())
                    .col(string_len(Ticket::ParkingSpotId, 64).not_null())
                    .col(string_len(Ticket::ParkingLotId, 64).not_null())
                    .col(big_integer(Ticket::IssueTimestamp).not_null())
                    .col(big_integer(Ticket::EndTimestamp).not_null())
                    .col(double(Ticket::AmountPaid).not_null())
                    .col(integer(Ticket::Level).not_null())
                    .col(integer_null(Ticket::SpotOrdinalNumber))
                    .col(string_len(Ticket::Code, 32).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    UserId,
    VehicleLicenseNumber,
    ParkingSpotId,
    ParkingLotId,
    IssueTimestamp,
    EndTimestamp,
    AmountPaid,
    Level,
    SpotOrdinalNumber,
    Code,
}
