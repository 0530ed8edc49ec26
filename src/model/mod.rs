//! Request and response DTOs shared by the HTTP API and its OpenAPI document.

pub mod api;
pub mod appointment;
pub mod hospital;
pub mod user;
