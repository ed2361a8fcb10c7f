//! Migration: Create the selection process, lead and offer tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SelectionProcesses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SelectionProcesses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SelectionProcesses::Name).string().not_null())
                    .col(ColumnDef::new(SelectionProcesses::StartDate).date().not_null())
                    .col(ColumnDef::new(SelectionProcesses::EndDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leads::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Leads::Name).string().not_null())
                    .col(ColumnDef::new(Leads::Email).string().not_null())
                    .col(ColumnDef::new(Leads::Phone).string().not_null())
                    .col(ColumnDef::new(Leads::NationalId).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Offers::Name).string().not_null())
                    .col(ColumnDef::new(Offers::Description).text().not_null())
                    .col(ColumnDef::new(Offers::AvailableSeats).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Leads::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SelectionProcesses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum SelectionProcesses {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
}

#[derive(Iden)]
pub(super) enum Leads {
    Table,
    Id,
    Name,
    Email,
    Phone,
    NationalId,
}

#[derive(Iden)]
pub(super) enum Offers {
    Table,
    Id,
    Name,
    Description,
    AvailableSeats,
}
