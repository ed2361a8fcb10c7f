//! HTTP request handlers.

pub mod enrollment_handler;

pub use enrollment_handler::enrollment_routes;
