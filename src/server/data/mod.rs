//! Database repository layer for all domain entities.
//!
//! Repositories handle CRUD operations for each domain using SeaORM entity models
//! internally and return domain models (or raw rows where the service needs fields the
//! domain model hides, such as password hashes).

pub mod appointment;
pub mod hospital;
pub mod user;

#[cfg(test)]
mod test;
