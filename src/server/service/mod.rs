//! Business logic layer.
//!
//! Services coordinate repositories, enforce business rules such as name uniqueness,
//! ownership and booking limits, and translate missing records into `AppError`s.

pub mod appointment;
pub mod auth;
pub mod hospital;

#[cfg(test)]
mod test;
