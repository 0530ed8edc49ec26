use super::*;

/// Tests listing a single user's appointments.
///
/// Verifies ownership scoping and ordering by appointment date.
///
/// Expected: Ok with the owner's two appointments, earliest first
#[tokio::test]
async fn lists_owner_appointments_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let hospital = factory::create_hospital(db).await?;

    let later = factory::appointment::AppointmentFactory::new(db, owner.id, hospital.id)
        .appt_date(Utc::now() + Duration::days(10))
        .build()
        .await?;
    let sooner = factory::appointment::AppointmentFactory::new(db, owner.id, hospital.id)
        .appt_date(Utc::now() + Duration::days(2))
        .build()
        .await?;
    factory::create_appointment(db, other.id, hospital.id).await?;

    let repo = AppointmentRepository::new(db);
    let appointments = repo.list(AppointmentScope::Owner(owner.id)).await?;

    assert_eq!(
        appointments.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![sooner.id, later.id]
    );
    assert!(appointments.iter().all(|a| a.hospital.id == hospital.id));

    Ok(())
}

/// Tests listing every appointment, with and without a hospital filter.
///
/// Expected: Ok with all appointments, then only those at the filtered hospital
#[tokio::test]
async fn lists_all_appointments_with_optional_hospital() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_hospital(db).await?;
    let second = factory::create_hospital(db).await?;
    factory::create_appointment(db, user.id, first.id).await?;
    factory::create_appointment(db, user.id, second.id).await?;
    factory::create_appointment(db, user.id, second.id).await?;

    let repo = AppointmentRepository::new(db);

    let all = repo
        .list(AppointmentScope::All { hospital_id: None })
        .await?;
    assert_eq!(all.len(), 3);

    let at_second = repo
        .list(AppointmentScope::All {
            hospital_id: Some(second.id),
        })
        .await?;
    assert_eq!(at_second.len(), 2);
    assert!(at_second.iter().all(|a| a.hospital.id == second.id));

    Ok(())
}
