//! HTTP request handlers.
//!
//! Controllers authenticate the request where needed, convert DTOs into validated
//! parameters, call the service layer and wrap the result in the response envelope.

pub mod appointment;
pub mod auth;
pub mod hospital;

#[cfg(test)]
mod test;
