//! Lead database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Lead;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// CPF; duplicates are allowed
    pub national_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Lead {
    fn from(model: Model) -> Self {
        Lead {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            national_id: model.national_id,
        }
    }
}
