//! Offer domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::MIN_NAME_LENGTH;

/// A course or program offering with a seat capacity
///
/// Seats are informational: enrolling does not consume them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Offer {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nome")]
    #[schema(example = "Engenharia de Software")]
    pub name: String,
    #[serde(rename = "descricao")]
    #[schema(example = "Bacharelado, turno noturno")]
    pub description: String,
    #[serde(rename = "vagasDisponiveis")]
    #[schema(example = 40)]
    pub available_seats: i32,
}

/// Offer created inline with an enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewOffer {
    #[serde(rename = "nome")]
    #[validate(length(min = MIN_NAME_LENGTH, message = "Offer name is required"))]
    #[schema(example = "Engenharia de Software")]
    pub name: String,
    #[serde(rename = "descricao")]
    #[schema(example = "Bacharelado, turno noturno")]
    pub description: String,
    #[serde(rename = "vagasDisponiveis")]
    #[validate(range(min = 0, message = "Available seats cannot be negative"))]
    #[schema(example = 40, minimum = 0)]
    pub available_seats: i32,
}
