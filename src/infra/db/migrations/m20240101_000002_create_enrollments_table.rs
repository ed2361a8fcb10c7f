//! Migration: Create the enrollments table and its foreign keys.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_catalog_tables::{Leads, Offers, SelectionProcesses};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No cascade: referenced rows cannot be removed while enrollments point at them
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::EnrollmentNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Enrollments::EnrolledAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Enrollments::Status).string().not_null())
                    .col(ColumnDef::new(Enrollments::LeadId).integer().not_null())
                    .col(ColumnDef::new(Enrollments::SelectionProcessId).integer().not_null())
                    .col(ColumnDef::new(Enrollments::OfferId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_lead")
                            .from(Enrollments::Table, Enrollments::LeadId)
                            .to(Leads::Table, Leads::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_selection_process")
                            .from(Enrollments::Table, Enrollments::SelectionProcessId)
                            .to(SelectionProcesses::Table, SelectionProcesses::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_offer")
                            .from(Enrollments::Table, Enrollments::OfferId)
                            .to(Offers::Table, Offers::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Enrollments {
    Table,
    Id,
    EnrollmentNumber,
    EnrolledAt,
    Status,
    LeadId,
    SelectionProcessId,
    OfferId,
}
