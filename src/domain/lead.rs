//! Lead domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::MIN_NAME_LENGTH;

/// A prospective applicant's contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Lead {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nome")]
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(rename = "telefone")]
    #[schema(example = "111")]
    pub phone: String,
    /// National ID (CPF), not required to be unique
    #[serde(rename = "cpf")]
    #[schema(example = "123")]
    pub national_id: String,
}

/// Lead created inline with an enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewLead {
    #[serde(rename = "nome")]
    #[validate(length(min = MIN_NAME_LENGTH, message = "Lead name is required"))]
    #[schema(example = "Ana")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(rename = "telefone")]
    #[schema(example = "111")]
    pub phone: String,
    #[serde(rename = "cpf")]
    #[schema(example = "123")]
    pub national_id: String,
}
