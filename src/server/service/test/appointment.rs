use super::*;
use crate::server::{
    error::auth::AuthError,
    model::appointment::{CreateAppointmentParams, UpdateAppointmentParams},
    service::appointment::AppointmentService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

fn booking(user_id: i32, hospital_id: i32) -> CreateAppointmentParams {
    CreateAppointmentParams {
        user_id,
        hospital_id,
        appt_date: Utc::now() + Duration::days(5),
    }
}

/// Tests the per-user appointment cap.
///
/// Verifies that a regular user can hold three appointments and the fourth is refused.
///
/// Expected: Err(AppError::BadRequest) on the fourth booking
#[tokio::test]
async fn caps_appointments_for_regular_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = domain_user(factory::create_user(db).await?);
    let hospital = factory::create_hospital(db).await?;

    let service = AppointmentService::new(db);
    for _ in 0..3 {
        service.create(&user, booking(user.id, hospital.id)).await?;
    }

    let result = service.create(&user, booking(user.id, hospital.id)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Ok for a fourth booking by an admin
#[tokio::test]
async fn admins_are_not_capped() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = domain_user(factory::create_admin(db).await?);
    let hospital = factory::create_hospital(db).await?;

    let service = AppointmentService::new(db);
    for _ in 0..4 {
        service
            .create(&admin, booking(admin.id, hospital.id))
            .await?;
    }

    assert_eq!(service.list(&admin, None).await?.len(), 4);

    Ok(())
}

/// Expected: Err(AppError::NotFound) when booking at an unknown hospital
#[tokio::test]
async fn rejects_unknown_hospital() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = domain_user(factory::create_user(db).await?);

    let service = AppointmentService::new(db);
    let result = service.create(&user, booking(user.id, 99999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that another user's appointment is off limits while an admin may act on it.
///
/// Expected: Err(AuthError::AccessDenied) for the stranger, Ok for the admin
#[tokio::test]
async fn only_owner_or_admin_can_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let stranger = domain_user(factory::create_user(db).await?);
    let admin = domain_user(factory::create_admin(db).await?);

    let service = AppointmentService::new(db);

    let denied = service.get_by_id(&stranger, appointment.id).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let denied = service.delete(&stranger, appointment.id).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let moved = service
        .update(
            &admin,
            appointment.id,
            UpdateAppointmentParams {
                appt_date: Some(Utc::now() + Duration::days(14)),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(moved.id, appointment.id);

    service.delete(&admin, appointment.id).await?;
    assert!(matches!(
        service.get_by_id(&admin, appointment.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests listing scope for users and admins.
///
/// Expected: users see only their own appointments, the hospital filter only narrows
/// admin listings
#[tokio::test]
async fn list_scope_depends_on_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = domain_user(factory::create_user(db).await?);
    let other = factory::create_user(db).await?;
    let admin = domain_user(factory::create_admin(db).await?);
    let first = factory::create_hospital(db).await?;
    let second = factory::create_hospital(db).await?;

    factory::create_appointment(db, user.id, first.id).await?;
    factory::create_appointment(db, other.id, first.id).await?;
    factory::create_appointment(db, other.id, second.id).await?;

    let service = AppointmentService::new(db);

    let own = service.list(&user, Some(second.id)).await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].user_id, user.id);

    assert_eq!(service.list(&admin, None).await?.len(), 3);
    assert_eq!(service.list(&admin, Some(first.id)).await?.len(), 2);

    Ok(())
}

/// Expected: Err(AppError::NotFound) when moving to an unknown hospital
#[tokio::test]
async fn update_rejects_unknown_hospital() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let user = domain_user(user);

    let service = AppointmentService::new(db);
    let result = service
        .update(
            &user,
            appointment.id,
            UpdateAppointmentParams {
                hospital_id: Some(99999),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
