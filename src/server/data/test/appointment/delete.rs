use super::*;

/// Tests deleting an appointment.
///
/// Expected: Ok(true), then Ok(false) on a second delete
#[tokio::test]
async fn deletes_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = AppointmentRepository::new(db);
    assert!(repo.delete(appointment.id).await?);
    assert!(repo.find_by_id(appointment.id).await?.is_none());
    assert!(!repo.delete(appointment.id).await?);

    Ok(())
}
