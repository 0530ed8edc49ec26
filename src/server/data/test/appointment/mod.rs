use crate::server::{
    data::appointment::AppointmentRepository,
    model::appointment::{AppointmentScope, CreateAppointmentParams, UpdateAppointmentParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod update;
