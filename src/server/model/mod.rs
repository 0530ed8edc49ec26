//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! input from controllers into services.

pub mod appointment;
pub mod hospital;
pub mod user;

use crate::server::error::AppError;

/// Trims a required string field, rejecting blank values.
pub(crate) fn required(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("Please add a {}", field)));
    }

    Ok(trimmed.to_string())
}
