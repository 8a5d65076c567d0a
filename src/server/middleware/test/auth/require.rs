use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header using a scheme other than Bearer.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = user_with_role(db, UserRole::Admin).await?;

    let forged =
        TokenIssuer::new("other-secret", "babelpress-test").issue(user.id, UserRole::Admin)?;
    let tokens = issuer();
    let headers = bearer(&forged);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that any active user passes when no role is required.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn grants_authenticated_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = user_with_role(db, UserRole::User).await?;
    let tokens = issuer();
    let headers = bearer(&tokens.issue(user.id, user.role)?);

    let returned = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests that a token for a deleted user row is rejected.
///
/// Verifies that the failure is answered as an authentication failure.
///
/// Expected: Err(AuthError::UserNotInDatabase) with a 401 response
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let headers = bearer(&tokens.issue(999, UserRole::Admin)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    let Err(err) = result else {
        panic!("expected the unknown user to be rejected");
    };
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::UserNotInDatabase(999))
    ));
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests that a disabled account cannot use a still-valid token.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_disabled_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .status(UserStatus::Disabled)
        .build()
        .await?;
    let tokens = issuer();
    let headers = bearer(&tokens.issue(user.id, user.role)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the editor gate against each role.
///
/// Verifies that editors and admins pass while plain users are denied.
///
/// Expected: Ok for editor and admin, Err(AccessDenied) for user
#[tokio::test]
async fn editor_gate_admits_editors_and_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    for (role, allowed) in [
        (UserRole::User, false),
        (UserRole::Editor, true),
        (UserRole::Admin, true),
    ] {
        let user = user_with_role(db, role).await?;
        let headers = bearer(&tokens.issue(user.id, role)?);

        let result = AuthGuard::new(db, &tokens, &headers)
            .require(&[Permission::Editor])
            .await;

        assert_eq!(result.is_ok(), allowed);
    }

    Ok(())
}

/// Tests that editors are denied admin-only actions.
///
/// Expected: Err(AuthError::AccessDenied) mentioning admin
#[tokio::test]
async fn admin_gate_denies_editor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = user_with_role(db, UserRole::Editor).await?;
    let tokens = issuer();
    let headers = bearer(&tokens.issue(user.id, UserRole::Editor)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
