//! Offer database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Offer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available_seats: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Offer {
    fn from(model: Model) -> Self {
        Offer {
            id: model.id,
            name: model.name,
            description: model.description,
            available_seats: model.available_seats,
        }
    }
}
