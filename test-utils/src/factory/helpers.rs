//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a hospital and an appointment linking the two.
///
/// # Returns
/// - `Ok((user, hospital, appointment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hospital::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let hospital = crate::factory::hospital::create_hospital(db).await?;
    let appointment =
        crate::factory::appointment::create_appointment(db, user.id, hospital.id).await?;

    Ok((user, hospital, appointment))
}
