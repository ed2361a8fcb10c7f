//! Selection process domain entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::MIN_NAME_LENGTH;

/// A time-bounded admission cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionProcess {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nome")]
    #[schema(example = "Vestibular 2025/1")]
    pub name: String,
    #[serde(rename = "dataInicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "dataTermino")]
    pub end_date: NaiveDate,
}

/// Selection process created inline with an enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_period"))]
pub struct NewSelectionProcess {
    #[serde(rename = "nome")]
    #[validate(length(min = MIN_NAME_LENGTH, message = "Selection process name is required"))]
    #[schema(example = "Vestibular 2025/1")]
    pub name: String,
    #[serde(rename = "dataInicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "dataTermino")]
    pub end_date: NaiveDate,
}

fn validate_period(process: &NewSelectionProcess) -> Result<(), ValidationError> {
    if process.start_date > process.end_date {
        let mut err = ValidationError::new("period");
        err.message = Some("Selection process must not end before it starts".into());
        return Err(err);
    }
    Ok(())
}
