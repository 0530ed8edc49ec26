//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let hospital = factory::hospital::create_hospital(&db).await?;
//!
//!     let (user, hospital, appointment) =
//!         factory::helpers::create_appointment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```

pub mod appointment;
pub mod helpers;
pub mod hospital;
pub mod user;

pub use appointment::create_appointment;
pub use hospital::create_hospital;
pub use user::{create_admin, create_user};
