//! Appointment booking rules.
//!
//! Users manage only their own appointments and may hold at most
//! `MAX_APPOINTMENTS_PER_USER` at a time; admins see and manage everything.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{appointment::AppointmentRepository, hospital::HospitalRepository},
    error::{auth::AuthError, AppError},
    model::{
        appointment::{
            Appointment, AppointmentScope, CreateAppointmentParams, UpdateAppointmentParams,
            MAX_APPOINTMENTS_PER_USER,
        },
        user::User,
    },
};

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("No appointment with the id of {}", id))
}

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the appointments visible to `user`.
    ///
    /// Regular users always get their own appointments and the hospital filter is
    /// ignored; admins get every appointment, optionally for one hospital.
    pub async fn list(
        &self,
        user: &User,
        hospital_id: Option<i32>,
    ) -> Result<Vec<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.db);

        let scope = if user.is_admin() {
            AppointmentScope::All { hospital_id }
        } else {
            AppointmentScope::Owner(user.id)
        };

        Ok(repo.list(scope).await?)
    }

    pub async fn get_by_id(&self, user: &User, id: i32) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.db);

        let appointment = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        ensure_can_access(user, &appointment, "view")?;

        Ok(appointment)
    }

    /// Books an appointment for `user`.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The booked appointment
    /// - `Err(AppError::NotFound)` - The hospital does not exist
    /// - `Err(AppError::BadRequest)` - A non-admin user already holds the maximum number of
    ///   appointments
    pub async fn create(
        &self,
        user: &User,
        params: CreateAppointmentParams,
    ) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.db);

        self.ensure_hospital_exists(params.hospital_id).await?;

        if !user.is_admin() && repo.count_by_user(user.id).await? >= MAX_APPOINTMENTS_PER_USER {
            return Err(AppError::BadRequest(format!(
                "The user with ID {} has already made {} appointments",
                user.id, MAX_APPOINTMENTS_PER_USER
            )));
        }

        let appointment = repo.create(params).await?;

        tracing::info!(
            "User {} booked appointment {} at hospital {}",
            user.id,
            appointment.id,
            appointment.hospital.id
        );

        Ok(appointment)
    }

    pub async fn update(
        &self,
        user: &User,
        id: i32,
        params: UpdateAppointmentParams,
    ) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.db);

        let appointment = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        ensure_can_access(user, &appointment, "update")?;

        if let Some(hospital_id) = params.hospital_id {
            self.ensure_hospital_exists(hospital_id).await?;
        }

        repo.update(id, params).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, user: &User, id: i32) -> Result<(), AppError> {
        let repo = AppointmentRepository::new(self.db);

        let appointment = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        ensure_can_access(user, &appointment, "delete")?;

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn ensure_hospital_exists(&self, hospital_id: i32) -> Result<(), AppError> {
        let hospital_repo = HospitalRepository::new(self.db);

        if hospital_repo.find_by_id(hospital_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "No hospital with the id of {}",
                hospital_id
            )));
        }

        Ok(())
    }
}

/// Only the owner or an admin may act on an appointment.
fn ensure_can_access(user: &User, appointment: &Appointment, action: &str) -> Result<(), AppError> {
    if appointment.user_id != user.id && !user.is_admin() {
        return Err(AuthError::AccessDenied(
            user.id,
            format!(
                "User is not authorized to {} appointment {}",
                action, appointment.id
            ),
        )
        .into());
    }

    Ok(())
}
