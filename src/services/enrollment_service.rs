//! Enrollment service - Handles enrollment use cases.
//!
//! Turns repository sentinels into application errors, applying the
//! configured [`MissingRecordPolicy`] to writes aimed at unknown ids.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MissingRecordPolicy;
use crate::domain::{Enrollment, EnrollmentDetails, NewEnrollment, WriteOutcome};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::EnrollmentRepository;

/// Enrollment service trait for dependency injection.
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// List all enrollments
    async fn list_enrollments(&self) -> AppResult<Vec<EnrollmentDetails>>;

    /// Get enrollment by ID
    async fn get_enrollment(&self, id: i32) -> AppResult<EnrollmentDetails>;

    /// Create a new enrollment
    async fn create_enrollment(&self, enrollment: NewEnrollment) -> AppResult<EnrollmentDetails>;

    /// Replace an enrollment.
    ///
    /// Returns `Ok(None)` when the id is unknown and the policy is `Ignore`.
    async fn update_enrollment(&self, enrollment: Enrollment) -> AppResult<Option<EnrollmentDetails>>;

    /// Delete an enrollment
    async fn delete_enrollment(&self, id: i32) -> AppResult<()>;

    /// List enrollments of leads with the given national ID (CPF)
    async fn enrollments_by_national_id(&self, national_id: &str) -> AppResult<Vec<EnrollmentDetails>>;

    /// List enrollments for the offer with the given name
    async fn enrollments_by_offer(&self, offer_name: &str) -> AppResult<Vec<EnrollmentDetails>>;
}

/// Concrete implementation of EnrollmentService.
pub struct EnrollmentManager {
    repo: Arc<dyn EnrollmentRepository>,
    missing_records: MissingRecordPolicy,
}

impl EnrollmentManager {
    /// Create new enrollment service instance
    pub fn new(repo: Arc<dyn EnrollmentRepository>, missing_records: MissingRecordPolicy) -> Self {
        Self {
            repo,
            missing_records,
        }
    }

    fn on_missing(&self, action: &str, id: i32) -> AppResult<()> {
        match self.missing_records {
            MissingRecordPolicy::NotFound => Err(AppError::NotFound),
            MissingRecordPolicy::Ignore => {
                tracing::warn!(enrollment_id = id, "{} of unknown enrollment ignored", action);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl EnrollmentService for EnrollmentManager {
    async fn list_enrollments(&self) -> AppResult<Vec<EnrollmentDetails>> {
        self.repo.get_all().await
    }

    async fn get_enrollment(&self, id: i32) -> AppResult<EnrollmentDetails> {
        self.repo.get_by_id(id).await?.ok_or_not_found()
    }

    async fn create_enrollment(&self, enrollment: NewEnrollment) -> AppResult<EnrollmentDetails> {
        self.repo.add(enrollment).await
    }

    async fn update_enrollment(&self, enrollment: Enrollment) -> AppResult<Option<EnrollmentDetails>> {
        let id = enrollment.id;
        match self.repo.update(enrollment).await? {
            WriteOutcome::Applied(details) => Ok(Some(details)),
            WriteOutcome::Missing => self.on_missing("Update", id).map(|_| None),
        }
    }

    async fn delete_enrollment(&self, id: i32) -> AppResult<()> {
        match self.repo.delete(id).await? {
            WriteOutcome::Applied(()) => Ok(()),
            WriteOutcome::Missing => self.on_missing("Delete", id),
        }
    }

    async fn enrollments_by_national_id(&self, national_id: &str) -> AppResult<Vec<EnrollmentDetails>> {
        self.repo.get_by_national_id(national_id).await
    }

    async fn enrollments_by_offer(&self, offer_name: &str) -> AppResult<Vec<EnrollmentDetails>> {
        self.repo.get_by_offer(offer_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Lead, Offer, SelectionProcess};
    use crate::infra::MockEnrollmentRepository;
    use chrono::{NaiveDate, TimeZone, Utc};
    use mockall::predicate::eq;

    fn enrollment(id: i32) -> Enrollment {
        Enrollment {
            id,
            enrollment_number: 100 + id,
            enrolled_at: Utc.with_ymd_and_hms(2025, 1, 10, 9, 30, 0).unwrap(),
            status: "pendente".to_string(),
            lead_id: 1,
            selection_process_id: 1,
            offer_id: 1,
        }
    }

    fn details(id: i32) -> EnrollmentDetails {
        EnrollmentDetails {
            enrollment: enrollment(id),
            lead: Lead {
                id: 1,
                name: "Ana".to_string(),
                email: "a@x.com".to_string(),
                phone: "111".to_string(),
                national_id: "123".to_string(),
            },
            selection_process: SelectionProcess {
                id: 1,
                name: "Vestibular 2025/1".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            },
            offer: Offer {
                id: 1,
                name: "Direito".to_string(),
                description: "Noturno".to_string(),
                available_seats: 40,
            },
        }
    }

    fn service(repo: MockEnrollmentRepository, policy: MissingRecordPolicy) -> EnrollmentManager {
        EnrollmentManager::new(Arc::new(repo), policy)
    }

    #[tokio::test]
    async fn get_enrollment_returns_record() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_get_by_id()
            .with(eq(5))
            .times(1)
            .returning(|id| Ok(Some(details(id))));

        let found = service(repo, MissingRecordPolicy::NotFound)
            .get_enrollment(5)
            .await
            .unwrap();
        assert_eq!(found.enrollment.id, 5);
    }

    #[tokio::test]
    async fn get_enrollment_maps_absence_to_not_found() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let result = service(repo, MissingRecordPolicy::Ignore).get_enrollment(9).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn update_returns_stored_record() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|e| Ok(WriteOutcome::Applied(details(e.id))));

        let updated = service(repo, MissingRecordPolicy::NotFound)
            .update_enrollment(enrollment(3))
            .await
            .unwrap();
        assert_eq!(updated.map(|d| d.enrollment.id), Some(3));
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found_by_default() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_update().returning(|_| Ok(WriteOutcome::Missing));

        let result = service(repo, MissingRecordPolicy::default())
            .update_enrollment(enrollment(3))
            .await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn update_of_missing_record_is_ignored_under_legacy_policy() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_update().returning(|_| Ok(WriteOutcome::Missing));

        let result = service(repo, MissingRecordPolicy::Ignore)
            .update_enrollment(enrollment(3))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_follows_missing_record_policy() {
        let mut strict = MockEnrollmentRepository::new();
        strict
            .expect_delete()
            .with(eq(4))
            .returning(|_| Ok(WriteOutcome::Missing));
        let result = service(strict, MissingRecordPolicy::NotFound)
            .delete_enrollment(4)
            .await;
        assert!(matches!(result, Err(AppError::NotFound)));

        let mut lax = MockEnrollmentRepository::new();
        lax.expect_delete().returning(|_| Ok(WriteOutcome::Missing));
        assert!(service(lax, MissingRecordPolicy::Ignore)
            .delete_enrollment(4)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn delete_of_existing_record_succeeds() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_delete()
            .times(1)
            .returning(|_| Ok(WriteOutcome::Applied(())));

        assert!(service(repo, MissingRecordPolicy::NotFound)
            .delete_enrollment(1)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn filters_pass_through_repository_results() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_get_by_national_id()
            .times(1)
            .returning(|_| Ok(vec![details(1), details(2)]));
        repo.expect_get_by_offer().times(1).returning(|_| Ok(vec![]));

        let service = service(repo, MissingRecordPolicy::NotFound);
        assert_eq!(service.enrollments_by_national_id("123").await.unwrap().len(), 2);
        assert!(service.enrollments_by_offer("Medicina").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn repository_errors_propagate() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_get_all()
            .returning(|| Err(AppError::internal("connection reset")));

        let result = service(repo, MissingRecordPolicy::NotFound).list_enrollments().await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
