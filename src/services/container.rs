//! Service Container - Centralized service access.
//!
//! Wires repositories into services from a single database connection.

use std::sync::Arc;

use super::{EnrollmentManager, EnrollmentService};
use crate::config::Config;
use crate::infra::EnrollmentStore;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get enrollment service
    fn enrollments(&self) -> Arc<dyn EnrollmentService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    enrollment_service: Arc<dyn EnrollmentService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let enrollment_repo = Arc::new(EnrollmentStore::new(db));
        let enrollment_service = Arc::new(EnrollmentManager::new(
            enrollment_repo,
            config.missing_records,
        ));

        Self { enrollment_service }
    }
}

impl ServiceContainer for Services {
    fn enrollments(&self) -> Arc<dyn EnrollmentService> {
        self.enrollment_service.clone()
    }
}
