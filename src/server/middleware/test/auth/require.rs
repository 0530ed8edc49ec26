use super::*;

/// Tests the guard with a logged-in user and no permissions.
///
/// Expected: Ok(User) for the session's user
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).login(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.role, Role::User);

    Ok(())
}

/// Tests the guard with an anonymous session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests the guard when the session points at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).login(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests the admin permission for a regular user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).login(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests the admin permission for an admin.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).login(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert!(result.is_admin());

    Ok(())
}

/// Tests that clearing the session logs the user out.
///
/// Expected: Err(AuthError::UserNotInSession) after `clear`
#[tokio::test]
async fn cleared_session_is_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.login(user.id).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(user.id));

    auth_session.clear().await;

    let result = AuthGuard::new(db, session).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
