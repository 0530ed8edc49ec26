//! Appointment factory for creating test appointment entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::appointment::AppointmentFactory;
///
/// let appointment = AppointmentFactory::new(&db, user.id, hospital.id)
///     .appt_date(Utc::now() + Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    hospital_id: i32,
    appt_date: DateTime<Utc>,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - appt_date: 1 day from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32, hospital_id: i32) -> Self {
        Self {
            db,
            user_id,
            hospital_id,
            appt_date: Utc::now() + Duration::days(1),
        }
    }

    pub fn appt_date(mut self, appt_date: DateTime<Utc>) -> Self {
        self.appt_date = appt_date;
        self
    }

    /// Builds and inserts the appointment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            appt_date: ActiveValue::Set(self.appt_date),
            user_id: ActiveValue::Set(self.user_id),
            hospital_id: ActiveValue::Set(self.hospital_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an appointment one day from now for the given user and hospital.
pub async fn create_appointment(
    db: &DatabaseConnection,
    user_id: i32,
    hospital_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, user_id, hospital_id).build().await
}
