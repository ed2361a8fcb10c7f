//! Selection process database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::SelectionProcess;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "selection_processes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for SelectionProcess {
    fn from(model: Model) -> Self {
        SelectionProcess {
            id: model.id,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}
