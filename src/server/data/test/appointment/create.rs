use super::*;

/// Tests booking an appointment.
///
/// Verifies that the returned appointment embeds its hospital.
///
/// Expected: Ok(Appointment)
#[tokio::test]
async fn creates_appointment_with_hospital() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hospital = factory::create_hospital(db).await?;
    let appt_date = Utc::now() + Duration::days(7);

    let repo = AppointmentRepository::new(db);
    let appointment = repo
        .create(CreateAppointmentParams {
            user_id: user.id,
            hospital_id: hospital.id,
            appt_date,
        })
        .await?;

    assert_eq!(appointment.user_id, user.id);
    assert_eq!(appointment.hospital.id, hospital.id);
    assert_eq!(appointment.hospital.name, hospital.name);
    assert_eq!(appointment.appt_date, appt_date);

    Ok(())
}

/// Tests the foreign key to hospitals.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_unknown_hospital() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .create(CreateAppointmentParams {
            user_id: user.id,
            hospital_id: 99999,
            appt_date: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests counting a user's appointments.
///
/// Expected: Ok(2) for the owner and Ok(0) for another user
#[tokio::test]
async fn counts_appointments_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let hospital = factory::create_hospital(db).await?;
    factory::create_appointment(db, owner.id, hospital.id).await?;
    factory::create_appointment(db, owner.id, hospital.id).await?;

    let repo = AppointmentRepository::new(db);
    assert_eq!(repo.count_by_user(owner.id).await?, 2);
    assert_eq!(repo.count_by_user(other.id).await?, 0);

    Ok(())
}
