//! Appointment data repository.
//!
//! Every read joins the appointment's hospital so callers always receive complete
//! `Appointment` domain models.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::appointment::{
    Appointment, AppointmentScope, CreateAppointmentParams, UpdateAppointmentParams,
};

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Joins an appointment row with its hospital row.
///
/// The foreign key guarantees the hospital exists; a missing one means the database
/// is inconsistent.
fn with_hospital(
    (appointment, hospital): (entity::appointment::Model, Option<entity::hospital::Model>),
) -> Result<Appointment, DbErr> {
    let hospital = hospital.ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "Hospital {} for appointment {} not found",
            appointment.hospital_id, appointment.id
        ))
    })?;

    Ok(Appointment::from_entity(appointment, hospital))
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an appointment and returns it joined with its hospital.
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, DbErr> {
        let appointment = entity::appointment::ActiveModel {
            appt_date: ActiveValue::Set(params.appt_date),
            user_id: ActiveValue::Set(params.user_id),
            hospital_id: ActiveValue::Set(params.hospital_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(appointment.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Appointment {} not found after creation",
                appointment.id
            ))
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, DbErr> {
        entity::prelude::Appointment::find_by_id(id)
            .find_also_related(entity::prelude::Hospital)
            .one(self.db)
            .await?
            .map(with_hospital)
            .transpose()
    }

    /// Lists appointments in the given scope ordered by appointment date.
    pub async fn list(&self, scope: AppointmentScope) -> Result<Vec<Appointment>, DbErr> {
        let mut query =
            entity::prelude::Appointment::find().find_also_related(entity::prelude::Hospital);

        query = match scope {
            AppointmentScope::Owner(user_id) => {
                query.filter(entity::appointment::Column::UserId.eq(user_id))
            }
            AppointmentScope::All {
                hospital_id: Some(hospital_id),
            } => query.filter(entity::appointment::Column::HospitalId.eq(hospital_id)),
            AppointmentScope::All { hospital_id: None } => query,
        };

        query
            .order_by_asc(entity::appointment::Column::ApptDate)
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(with_hospital)
            .collect()
    }

    /// Counts the appointments currently held by a user.
    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The appointment after the update
    /// - `Ok(None)` - No appointment with this id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAppointmentParams,
    ) -> Result<Option<Appointment>, DbErr> {
        let Some(appointment) = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if params.hospital_id.is_some() || params.appt_date.is_some() {
            let mut active: entity::appointment::ActiveModel = appointment.into();
            if let Some(hospital_id) = params.hospital_id {
                active.hospital_id = ActiveValue::Set(hospital_id);
            }
            if let Some(appt_date) = params.appt_date {
                active.appt_date = ActiveValue::Set(appt_date);
            }
            active.update(self.db).await?;
        }

        self.find_by_id(id).await
    }

    /// Deletes an appointment, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
