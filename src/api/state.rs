//! Application state shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{EnrollmentService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Enrollment service
    pub enrollment_service: Arc<dyn EnrollmentService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the enrollment service onto the shared pool, honoring the
    /// configured missing-record policy.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            enrollment_service: container.enrollments(),
            database,
        }
    }

    /// Build state around an already constructed service.
    pub fn new(enrollment_service: Arc<dyn EnrollmentService>, database: Arc<Database>) -> Self {
        Self {
            enrollment_service,
            database,
        }
    }
}
