use super::*;

/// Tests creating a hospital.
///
/// Verifies that every field is persisted and an id is assigned.
///
/// Expected: Ok(Hospital)
#[tokio::test]
async fn creates_hospital() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HospitalRepository::new(db);
    let created = repo.create(create_params("Siriraj Hospital")).await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "Siriraj Hospital");
    assert_eq!(created.tel.as_deref(), Some("02-419-7000"));

    let fetched = repo.find_by_id(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests the unique constraint on hospital names.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HospitalRepository::new(db);
    repo.create(create_params("Ramathibodi Hospital")).await?;
    let result = repo.create(create_params("Ramathibodi Hospital")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests name lookups used for duplicate detection.
///
/// Verifies that a hospital's own name is not reported as taken when it is excluded.
#[tokio::test]
async fn reports_taken_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hospital = factory::hospital::HospitalFactory::new(db)
        .name("Chulalongkorn Hospital")
        .build()
        .await?;

    let repo = HospitalRepository::new(db);
    assert!(repo.name_taken("Chulalongkorn Hospital", None).await?);
    assert!(!repo.name_taken("Chulalongkorn Hospital", Some(hospital.id)).await?);
    assert!(!repo.name_taken("Vajira Hospital", None).await?);

    Ok(())
}

/// Tests looking up a hospital that doesn't exist.
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
    assert!(repo.find_by_id(99999).await?.is_none());

    Ok(())
}
