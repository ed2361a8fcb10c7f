//! Enrollment repository implementation.
//!
//! Every enrollment handed out is joined with its lead, selection process
//! and offer.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, LoaderTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::entities::{
    enrollment, lead, offer, EnrollmentActiveModel, EnrollmentEntity, LeadActiveModel, LeadEntity,
    OfferActiveModel, OfferEntity, SelectionProcessActiveModel, SelectionProcessEntity,
};
use crate::domain::{Enrollment, EnrollmentDetails, NewEnrollment, WriteOutcome};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Enrollment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// List every enrollment, ordered by id
    async fn get_all(&self) -> AppResult<Vec<EnrollmentDetails>>;

    /// Find enrollment by ID
    async fn get_by_id(&self, id: i32) -> AppResult<Option<EnrollmentDetails>>;

    /// Insert a new enrollment, creating any inline relations in the same transaction
    async fn add(&self, enrollment: NewEnrollment) -> AppResult<EnrollmentDetails>;

    /// Overwrite every field of the enrollment with the same id
    async fn update(&self, enrollment: Enrollment) -> AppResult<WriteOutcome<EnrollmentDetails>>;

    /// Delete enrollment by ID
    async fn delete(&self, id: i32) -> AppResult<WriteOutcome<()>>;

    /// Enrollments whose lead has the given national ID (CPF)
    async fn get_by_national_id(&self, national_id: &str) -> AppResult<Vec<EnrollmentDetails>>;

    /// Enrollments whose offer has the given name
    async fn get_by_offer(&self, offer_name: &str) -> AppResult<Vec<EnrollmentDetails>>;
}

/// Concrete implementation of EnrollmentRepository
pub struct EnrollmentStore {
    db: DatabaseConnection,
}

impl EnrollmentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_details(&self, id: i32) -> AppResult<Option<EnrollmentDetails>> {
        let Some(model) = EnrollmentEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        Ok(attach_relations(&self.db, vec![model]).await?.pop())
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentStore {
    async fn get_all(&self) -> AppResult<Vec<EnrollmentDetails>> {
        let models = EnrollmentEntity::find()
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        attach_relations(&self.db, models).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<EnrollmentDetails>> {
        self.find_details(id).await
    }

    async fn add(&self, enrollment: NewEnrollment) -> AppResult<EnrollmentDetails> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let id = match insert_enrollment(&txn, enrollment).await {
            Ok(id) => {
                txn.commit().await.map_err(AppError::from)?;
                id
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                return Err(e);
            }
        };

        tracing::info!(enrollment_id = id, "Enrollment created");

        self.find_details(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("enrollment {} vanished after insert", id)))
    }

    async fn update(&self, enrollment: Enrollment) -> AppResult<WriteOutcome<EnrollmentDetails>> {
        let Some(existing) = EnrollmentEntity::find_by_id(enrollment.id)
            .one(&self.db)
            .await?
        else {
            return Ok(WriteOutcome::Missing);
        };

        let mut active: EnrollmentActiveModel = existing.into();
        active.enrollment_number = Set(enrollment.enrollment_number);
        active.enrolled_at = Set(enrollment.enrolled_at);
        active.status = Set(enrollment.status);
        active.lead_id = Set(enrollment.lead_id);
        active.selection_process_id = Set(enrollment.selection_process_id);
        active.offer_id = Set(enrollment.offer_id);

        active.update(&self.db).await.map_err(AppError::from)?;
        tracing::info!(enrollment_id = enrollment.id, "Enrollment updated");

        // A concurrent delete between the write and the reload reads as a miss
        Ok(match self.find_details(enrollment.id).await? {
            Some(details) => WriteOutcome::Applied(details),
            None => WriteOutcome::Missing,
        })
    }

    async fn delete(&self, id: i32) -> AppResult<WriteOutcome<()>> {
        let result = EnrollmentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Ok(WriteOutcome::Missing);
        }

        tracing::info!(enrollment_id = id, "Enrollment deleted");
        Ok(WriteOutcome::Applied(()))
    }

    async fn get_by_national_id(&self, national_id: &str) -> AppResult<Vec<EnrollmentDetails>> {
        let models = EnrollmentEntity::find()
            .inner_join(LeadEntity)
            .filter(lead::Column::NationalId.eq(national_id))
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        attach_relations(&self.db, models).await
    }

    async fn get_by_offer(&self, offer_name: &str) -> AppResult<Vec<EnrollmentDetails>> {
        let models = EnrollmentEntity::find()
            .inner_join(OfferEntity)
            .filter(offer::Column::Name.eq(offer_name))
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        attach_relations(&self.db, models).await
    }
}

/// Insert inline relations first, then the enrollment itself. Returns the new id.
async fn insert_enrollment(txn: &DatabaseTransaction, new: NewEnrollment) -> AppResult<i32> {
    let lead_id = match new.lead {
        Some(lead) => {
            LeadActiveModel {
                name: Set(lead.name),
                email: Set(lead.email),
                phone: Set(lead.phone),
                national_id: Set(lead.national_id),
                ..Default::default()
            }
            .insert(txn)
            .await?
            .id
        }
        None => new
            .lead_id
            .ok_or_else(|| AppError::bad_request("leadId or lead is required"))?,
    };

    let selection_process_id = match new.selection_process {
        Some(process) => {
            SelectionProcessActiveModel {
                name: Set(process.name),
                start_date: Set(process.start_date),
                end_date: Set(process.end_date),
                ..Default::default()
            }
            .insert(txn)
            .await?
            .id
        }
        None => new.selection_process_id.ok_or_else(|| {
            AppError::bad_request("processoSeletivoId or processoSeletivo is required")
        })?,
    };

    let offer_id = match new.offer {
        Some(offer) => {
            OfferActiveModel {
                name: Set(offer.name),
                description: Set(offer.description),
                available_seats: Set(offer.available_seats),
                ..Default::default()
            }
            .insert(txn)
            .await?
            .id
        }
        None => new
            .offer_id
            .ok_or_else(|| AppError::bad_request("ofertaId or oferta is required"))?,
    };

    let model = EnrollmentActiveModel {
        enrollment_number: Set(new.enrollment_number),
        enrolled_at: Set(new.enrolled_at),
        status: Set(new.status),
        lead_id: Set(lead_id),
        selection_process_id: Set(selection_process_id),
        offer_id: Set(offer_id),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    Ok(model.id)
}

/// Batch-load the lead, selection process and offer of each enrollment.
async fn attach_relations(
    db: &DatabaseConnection,
    models: Vec<enrollment::Model>,
) -> AppResult<Vec<EnrollmentDetails>> {
    let leads = models.load_one(LeadEntity, db).await?;
    let processes = models.load_one(SelectionProcessEntity, db).await?;
    let offers = models.load_one(OfferEntity, db).await?;

    models
        .into_iter()
        .zip(leads)
        .zip(processes)
        .zip(offers)
        .map(|(((model, lead), process), offer)| {
            let id = model.id;
            match (lead, process, offer) {
                (Some(lead), Some(process), Some(offer)) => Ok(EnrollmentDetails {
                    enrollment: model.into(),
                    lead: lead.into(),
                    selection_process: process.into(),
                    offer: offer.into(),
                }),
                _ => Err(AppError::internal(format!(
                    "enrollment {} references a missing record",
                    id
                ))),
            }
        })
        .collect()
}
