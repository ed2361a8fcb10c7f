//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod enrollment;
pub mod lead;
pub mod offer;
pub mod selection_process;

// Re-exports for public API convenience
pub use enrollment::{ActiveModel as EnrollmentActiveModel, Entity as EnrollmentEntity};
pub use lead::{ActiveModel as LeadActiveModel, Entity as LeadEntity};
pub use offer::{ActiveModel as OfferActiveModel, Entity as OfferEntity};
pub use selection_process::{
    ActiveModel as SelectionProcessActiveModel, Entity as SelectionProcessEntity,
};
