//! Vestibular API - Enrollment management for admission selection processes
//!
//! A REST service over four records: selection processes, leads, offers
//! and the enrollments that tie them together.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::{Config, MissingRecordPolicy};
pub use domain::{Enrollment, EnrollmentDetails, NewEnrollment, WriteOutcome};
pub use errors::{AppError, AppResult};
pub use infra::Database;
