//! Enrollment domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{Lead, NewLead, NewOffer, NewSelectionProcess, Offer, SelectionProcess};

/// A lead's application tied to one selection process and one offer.
///
/// Relations are held as identifiers; see [`EnrollmentDetails`] for the
/// joined view returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Enrollment {
    #[schema(example = 1)]
    pub id: i32,
    /// Enrollment number, distinct from `id` and not required to be unique
    #[serde(rename = "numeroInscricao")]
    #[schema(example = 20250001)]
    pub enrollment_number: i32,
    #[serde(rename = "data")]
    pub enrolled_at: DateTime<Utc>,
    /// Free-form status text
    #[schema(example = "pendente")]
    pub status: String,
    #[serde(rename = "leadId")]
    pub lead_id: i32,
    #[serde(rename = "processoSeletivoId")]
    pub selection_process_id: i32,
    #[serde(rename = "ofertaId")]
    pub offer_id: i32,
}

/// Enrollment with its lead, selection process and offer attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentDetails {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub lead: Lead,
    #[serde(rename = "processoSeletivo")]
    pub selection_process: SelectionProcess,
    #[serde(rename = "oferta")]
    pub offer: Offer,
}

/// Enrollment creation payload.
///
/// Each relation is given either by identifier or as an inline record to be
/// created alongside the enrollment. An inline record wins over an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_relations"))]
pub struct NewEnrollment {
    #[serde(rename = "numeroInscricao")]
    #[schema(example = 20250001)]
    pub enrollment_number: i32,
    #[serde(rename = "data")]
    pub enrolled_at: DateTime<Utc>,
    #[schema(example = "pendente")]
    pub status: String,
    #[serde(rename = "leadId", default)]
    pub lead_id: Option<i32>,
    #[serde(rename = "processoSeletivoId", default)]
    pub selection_process_id: Option<i32>,
    #[serde(rename = "ofertaId", default)]
    pub offer_id: Option<i32>,
    #[serde(default)]
    #[validate(nested)]
    pub lead: Option<NewLead>,
    #[serde(rename = "processoSeletivo", default)]
    #[validate(nested)]
    pub selection_process: Option<NewSelectionProcess>,
    #[serde(rename = "oferta", default)]
    #[validate(nested)]
    pub offer: Option<NewOffer>,
}

fn validate_relations(enrollment: &NewEnrollment) -> Result<(), ValidationError> {
    let missing: Vec<&str> = [
        (enrollment.lead_id.is_some() || enrollment.lead.is_some(), "leadId or lead"),
        (
            enrollment.selection_process_id.is_some() || enrollment.selection_process.is_some(),
            "processoSeletivoId or processoSeletivo",
        ),
        (enrollment.offer_id.is_some() || enrollment.offer.is_some(), "ofertaId or oferta"),
    ]
    .into_iter()
    .filter_map(|(present, name)| (!present).then_some(name))
    .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let mut err = ValidationError::new("relations");
    err.message = Some(format!("{} is required", missing.join(", ")).into());
    Err(err)
}

/// Outcome of a write addressed to an existing record by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome<T> {
    /// The record existed and the write was committed
    Applied(T),
    /// No record has the given identity; storage is unchanged
    Missing,
}

impl<T> WriteOutcome<T> {
    /// Check if the write reached an existing record
    pub fn is_applied(&self) -> bool {
        matches!(self, WriteOutcome::Applied(_))
    }

    /// Convert into the written value, if any
    pub fn applied(self) -> Option<T> {
        match self {
            WriteOutcome::Applied(value) => Some(value),
            WriteOutcome::Missing => None,
        }
    }
}
