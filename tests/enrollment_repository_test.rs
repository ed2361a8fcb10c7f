//! Storage behavior of `EnrollmentStore` against an in-memory SQLite database.

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::{ConnectionTrait, Statement};

use vestibular_api::domain::{
    Enrollment, NewEnrollment, NewLead, NewOffer, NewSelectionProcess, WriteOutcome,
};
use vestibular_api::errors::AppError;
use vestibular_api::infra::{EnrollmentRepository, EnrollmentStore};
use vestibular_api::Database;

fn lead(name: &str, cpf: &str) -> NewLead {
    NewLead {
        name: name.to_string(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone: "111".to_string(),
        national_id: cpf.to_string(),
    }
}

fn offer(name: &str) -> NewOffer {
    NewOffer {
        name: name.to_string(),
        description: "Noturno".to_string(),
        available_seats: 40,
    }
}

fn process() -> NewSelectionProcess {
    NewSelectionProcess {
        name: "Vestibular 2025/1".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    }
}

fn inline(number: i32, lead: NewLead, offer: NewOffer) -> NewEnrollment {
    NewEnrollment {
        enrollment_number: number,
        enrolled_at: Utc.with_ymd_and_hms(2025, 1, 10, 9, 30, 0).unwrap(),
        status: "pendente".to_string(),
        lead_id: None,
        selection_process_id: None,
        offer_id: None,
        lead: Some(lead),
        selection_process: Some(process()),
        offer: Some(offer),
    }
}

fn by_ids(number: i32, lead_id: i32, process_id: i32, offer_id: i32) -> NewEnrollment {
    NewEnrollment {
        enrollment_number: number,
        enrolled_at: Utc.with_ymd_and_hms(2025, 2, 1, 14, 0, 0).unwrap(),
        status: "pendente".to_string(),
        lead_id: Some(lead_id),
        selection_process_id: Some(process_id),
        offer_id: Some(offer_id),
        lead: None,
        selection_process: None,
        offer: None,
    }
}

async fn count(db: &Database, table: &str) -> i64 {
    let conn = db.connection();
    let row = conn
        .query_one(Statement::from_string(
            conn.get_database_backend(),
            format!("SELECT COUNT(*) AS n FROM {}", table),
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get::<i64>("", "n").unwrap()
}

async fn store() -> (Database, EnrollmentStore) {
    let db = common::setup_db().await;
    let store = EnrollmentStore::new(db.get_connection());
    (db, store)
}

#[tokio::test]
async fn add_then_get_returns_same_fields() {
    let (_db, store) = store().await;

    let created = store.add(inline(20250001, lead("Ana", "123"), offer("Direito"))).await.unwrap();
    let fetched = store.get_by_id(created.enrollment.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.enrollment.enrollment_number, 20250001);
    assert_eq!(fetched.enrollment.status, "pendente");
    assert_eq!(
        fetched.enrollment.enrolled_at,
        Utc.with_ymd_and_hms(2025, 1, 10, 9, 30, 0).unwrap()
    );
    assert_eq!(fetched.lead.name, "Ana");
    assert_eq!(fetched.lead.national_id, "123");
    assert_eq!(fetched.selection_process.name, "Vestibular 2025/1");
    assert_eq!(fetched.offer.name, "Direito");
    assert_eq!(fetched.enrollment.lead_id, fetched.lead.id);
    assert_eq!(fetched.enrollment.offer_id, fetched.offer.id);
}

#[tokio::test]
async fn add_by_id_reuses_existing_relations() {
    let (db, store) = store().await;
    let first = store.add(inline(1, lead("Ana", "123"), offer("Direito"))).await.unwrap();

    let second = store
        .add(by_ids(
            2,
            first.lead.id,
            first.selection_process.id,
            first.offer.id,
        ))
        .await
        .unwrap();

    assert_eq!(second.lead, first.lead);
    assert_eq!(second.offer, first.offer);
    assert_eq!(count(&db, "leads").await, 1);
    assert_eq!(count(&db, "enrollments").await, 2);
}

#[tokio::test]
async fn add_with_unknown_relation_rolls_back_inline_records() {
    let (db, store) = store().await;

    let enrollment = NewEnrollment {
        selection_process_id: Some(999),
        selection_process: None,
        ..inline(1, lead("Ana", "123"), offer("Direito"))
    };
    let result = store.add(enrollment).await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(count(&db, "leads").await, 0);
    assert_eq!(count(&db, "offers").await, 0);
    assert_eq!(count(&db, "enrollments").await, 0);
}

#[tokio::test]
async fn add_without_relation_is_rejected() {
    let (db, store) = store().await;

    let enrollment = NewEnrollment {
        offer_id: None,
        offer: None,
        ..inline(1, lead("Ana", "123"), offer("Direito"))
    };
    let result = store.add(enrollment).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(count(&db, "leads").await, 0);
}

#[tokio::test]
async fn update_replaces_fields_of_one_record_only() {
    let (_db, store) = store().await;
    let first = store.add(inline(1, lead("Ana", "123"), offer("Direito"))).await.unwrap();
    let second = store.add(inline(2, lead("Bruno", "456"), offer("Medicina"))).await.unwrap();

    let replacement = Enrollment {
        enrollment_number: 77,
        enrolled_at: Utc.with_ymd_and_hms(2025, 5, 5, 8, 0, 0).unwrap(),
        status: "aprovado".to_string(),
        offer_id: second.offer.id,
        ..first.enrollment.clone()
    };
    let outcome = store.update(replacement.clone()).await.unwrap();

    let updated = outcome.applied().expect("existing record should be updated");
    assert_eq!(updated.enrollment, replacement);
    assert_eq!(updated.offer.name, "Medicina");

    let untouched = store.get_by_id(second.enrollment.id).await.unwrap().unwrap();
    assert_eq!(untouched, second);
}

#[tokio::test]
async fn update_of_missing_record_leaves_storage_unchanged() {
    let (_db, store) = store().await;
    let existing = store.add(inline(1, lead("Ana", "123"), offer("Direito"))).await.unwrap();

    let ghost = Enrollment {
        id: existing.enrollment.id + 100,
        status: "aprovado".to_string(),
        ..existing.enrollment.clone()
    };
    let outcome = store.update(ghost).await.unwrap();

    assert_eq!(outcome, WriteOutcome::Missing);
    assert_eq!(store.get_all().await.unwrap(), vec![existing]);
}

#[tokio::test]
async fn delete_removes_only_the_enrollment() {
    let (db, store) = store().await;
    let created = store.add(inline(1, lead("Ana", "123"), offer("Direito"))).await.unwrap();

    let outcome = store.delete(created.enrollment.id).await.unwrap();

    assert!(outcome.is_applied());
    assert!(store.get_by_id(created.enrollment.id).await.unwrap().is_none());
    assert_eq!(count(&db, "leads").await, 1);
    assert_eq!(count(&db, "offers").await, 1);
}

#[tokio::test]
async fn delete_of_missing_record_leaves_storage_unchanged() {
    let (_db, store) = store().await;
    let existing = store.add(inline(1, lead("Ana", "123"), offer("Direito"))).await.unwrap();

    let outcome = store.delete(existing.enrollment.id + 1).await.unwrap();

    assert_eq!(outcome, WriteOutcome::Missing);
    assert_eq!(store.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_all_orders_by_id() {
    let (_db, store) = store().await;
    assert!(store.get_all().await.unwrap().is_empty());

    let a = store.add(inline(3, lead("Ana", "123"), offer("Direito"))).await.unwrap();
    let b = store.add(inline(1, lead("Bruno", "456"), offer("Direito"))).await.unwrap();

    let ids: Vec<i32> = store
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.enrollment.id)
        .collect();
    assert_eq!(ids, vec![a.enrollment.id, b.enrollment.id]);
}

#[tokio::test]
async fn filters_by_national_id() {
    let (_db, store) = store().await;
    let ana = store.add(inline(1, lead("Ana", "123"), offer("Direito"))).await.unwrap();
    let _bruno = store.add(inline(2, lead("Bruno", "456"), offer("Direito"))).await.unwrap();
    let ana_again = store
        .add(by_ids(3, ana.lead.id, ana.selection_process.id, ana.offer.id))
        .await
        .unwrap();

    let found = store.get_by_national_id("123").await.unwrap();
    assert_eq!(found, vec![ana, ana_again]);

    assert!(store.get_by_national_id("999").await.unwrap().is_empty());
}

#[tokio::test]
async fn filters_by_offer_name() {
    let (_db, store) = store().await;
    let law = store.add(inline(1, lead("Ana", "123"), offer("Direito"))).await.unwrap();
    let medicine = store.add(inline(2, lead("Bruno", "456"), offer("Medicina"))).await.unwrap();

    assert_eq!(store.get_by_offer("Medicina").await.unwrap(), vec![medicine]);
    assert_eq!(store.get_by_offer("Direito").await.unwrap(), vec![law]);
    assert!(store.get_by_offer("Engenharia").await.unwrap().is_empty());
}
