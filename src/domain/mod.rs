//! Domain layer - Core business entities
//!
//! This module contains the records of the enrollment workflow as they
//! travel over the API, independent of how they are stored.
//!
//! Relations between records are plain identifier fields; joined views are
//! assembled by the repository layer.

pub mod enrollment;
pub mod lead;
pub mod offer;
pub mod selection_process;

pub use enrollment::{Enrollment, EnrollmentDetails, NewEnrollment, WriteOutcome};
pub use lead::{Lead, NewLead};
pub use offer::{NewOffer, Offer};
pub use selection_process::{NewSelectionProcess, SelectionProcess};
