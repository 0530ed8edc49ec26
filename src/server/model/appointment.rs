//! Appointment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::appointment::{AppointmentDto, CreateAppointmentDto, UpdateAppointmentDto},
    server::model::hospital::Hospital,
};

/// Number of appointments a non-admin user may hold at once.
pub const MAX_APPOINTMENTS_PER_USER: u64 = 3;

/// Appointment together with the hospital it is booked at.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub appt_date: DateTime<Utc>,
    pub user_id: i32,
    pub hospital: Hospital,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Converts an appointment row and its hospital row into the domain model.
    pub fn from_entity(
        entity: entity::appointment::Model,
        hospital: entity::hospital::Model,
    ) -> Self {
        Self {
            id: entity.id,
            appt_date: entity.appt_date,
            user_id: entity.user_id,
            hospital: Hospital::from_entity(hospital),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            appt_date: self.appt_date,
            user_id: self.user_id,
            hospital: self.hospital.into_summary_dto(),
            created_at: self.created_at,
        }
    }
}

/// Which appointments a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentScope {
    /// Only appointments owned by this user.
    Owner(i32),
    /// Every appointment, optionally for a single hospital.
    All { hospital_id: Option<i32> },
}

#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub user_id: i32,
    pub hospital_id: i32,
    pub appt_date: DateTime<Utc>,
}

impl CreateAppointmentParams {
    pub fn from_dto(user_id: i32, dto: CreateAppointmentDto) -> Self {
        Self {
            user_id,
            hospital_id: dto.hospital_id,
            appt_date: dto.appt_date,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentParams {
    pub hospital_id: Option<i32>,
    pub appt_date: Option<DateTime<Utc>>,
}

impl From<UpdateAppointmentDto> for UpdateAppointmentParams {
    fn from(dto: UpdateAppointmentDto) -> Self {
        Self {
            hospital_id: dto.hospital_id,
            appt_date: dto.appt_date,
        }
    }
}
