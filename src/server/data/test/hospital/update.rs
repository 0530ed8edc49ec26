use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok(Some(Hospital)) with the new province and the old name
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HospitalRepository::new(db);
    let created = repo.create(create_params("Bumrungrad")).await?;

    let updated = repo
        .update(
            created.id,
            UpdateHospitalParams {
                province: Some("Nonthaburi".to_string()),
                tel: Some("02-066-8888".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Bumrungrad");
    assert_eq!(updated.province, "Nonthaburi");
    assert_eq!(updated.tel.as_deref(), Some("02-066-8888"));
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests an update with no fields.
///
/// Expected: Ok(Some(Hospital)) identical to the stored record
#[tokio::test]
async fn empty_update_returns_current_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HospitalRepository::new(db);
    let created = repo.create(create_params("Samitivej")).await?;

    let result = repo
        .update(created.id, UpdateHospitalParams::default())
        .await?;

    assert_eq!(result, Some(created));

    Ok(())
}

/// Tests updating a hospital that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_hospital() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HospitalRepository::new(db);
    let result = repo
        .update(
            99999,
            UpdateHospitalParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
