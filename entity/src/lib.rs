//! SeaORM entity definitions for the hospital booking schema.

pub mod prelude;

pub mod appointment;
pub mod hospital;
pub mod user;
