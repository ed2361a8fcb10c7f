//! Enrollment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Enrollment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub enrollment_number: i32,
    pub enrolled_at: DateTimeUtc,
    pub status: String,
    pub lead_id: i32,
    pub selection_process_id: i32,
    pub offer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lead::Entity",
        from = "Column::LeadId",
        to = "super::lead::Column::Id"
    )]
    Lead,
    #[sea_orm(
        belongs_to = "super::selection_process::Entity",
        from = "Column::SelectionProcessId",
        to = "super::selection_process::Column::Id"
    )]
    SelectionProcess,
    #[sea_orm(
        belongs_to = "super::offer::Entity",
        from = "Column::OfferId",
        to = "super::offer::Column::Id"
    )]
    Offer,
}

impl Related<super::lead::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lead.def()
    }
}

impl Related<super::selection_process::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelectionProcess.def()
    }
}

impl Related<super::offer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Enrollment {
    fn from(model: Model) -> Self {
        Enrollment {
            id: model.id,
            enrollment_number: model.enrollment_number,
            enrolled_at: model.enrolled_at,
            status: model.status,
            lead_id: model.lead_id,
            selection_process_id: model.selection_process_id,
            offer_id: model.offer_id,
        }
    }
}
