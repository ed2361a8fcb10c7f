//! Application services layer - Use cases.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod enrollment_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use enrollment_service::{EnrollmentManager, EnrollmentService};
