use super::*;

/// Tests moving an appointment to another hospital and date.
///
/// Expected: Ok(Some(Appointment)) joined with the new hospital
#[tokio::test]
async fn updates_hospital_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let new_hospital = factory::create_hospital(db).await?;
    let new_date = Utc::now() + Duration::days(30);

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(
            appointment.id,
            UpdateAppointmentParams {
                hospital_id: Some(new_hospital.id),
                appt_date: Some(new_date),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.hospital.id, new_hospital.id);
    assert_eq!(updated.hospital.name, new_hospital.name);
    assert_eq!(updated.appt_date, new_date);

    Ok(())
}

/// Tests an update with no fields.
///
/// Expected: Ok(Some(Appointment)) unchanged
#[tokio::test]
async fn empty_update_returns_current_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, hospital, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(appointment.id, UpdateAppointmentParams::default())
        .await?
        .unwrap();

    assert_eq!(updated.hospital.id, hospital.id);
    assert_eq!(updated.appt_date, appointment.appt_date);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppointmentRepository::new(db);
    let result = repo
        .update(99999, UpdateAppointmentParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
