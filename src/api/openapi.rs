//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::api::handlers::enrollment_handler;
use crate::domain::{
    Enrollment, EnrollmentDetails, Lead, NewEnrollment, NewLead, NewOffer, NewSelectionProcess,
    Offer, SelectionProcess,
};
use crate::errors::{ErrorBody, ErrorResponse};

/// OpenAPI documentation for the enrollment API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vestibular API",
        version = "0.1.0",
        description = "Enrollment management for university admission selection processes"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        enrollment_handler::list_enrollments,
        enrollment_handler::get_enrollment,
        enrollment_handler::create_enrollment,
        enrollment_handler::update_enrollment,
        enrollment_handler::delete_enrollment,
        enrollment_handler::list_enrollments_by_national_id,
        enrollment_handler::list_enrollments_by_offer,
    ),
    components(
        schemas(
            Enrollment,
            EnrollmentDetails,
            NewEnrollment,
            Lead,
            NewLead,
            SelectionProcess,
            NewSelectionProcess,
            Offer,
            NewOffer,
            ErrorResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Enrollments", description = "Inscrições: enrollment CRUD and lookups")
    )
)]
pub struct ApiDoc;
