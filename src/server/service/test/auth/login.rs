use super::*;

/// Tests logging in with valid credentials.
///
/// Expected: Ok with a token whose claims name the user and role
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let user = factory::user::UserFactory::new(db)
        .email("editor@example.com")
        .password_hash(hash_password("s3cret-pass")?)
        .role(UserRole::Editor)
        .build()
        .await?;

    let (token, logged_in) = AuthService::new(db, &tokens)
        .login(login("editor@example.com", "s3cret-pass"))
        .await?;

    let claims = tokens.verify(&token)?;
    assert_eq!(logged_in.id, user.id);
    assert_eq!(claims.user_id, user.id);
    assert_eq!(claims.role, UserRole::Editor);

    Ok(())
}

/// Tests a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    factory::user::UserFactory::new(db)
        .email("reader@example.com")
        .password_hash(hash_password("right-pass")?)
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .login(login("reader@example.com", "wrong-pass"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests an unknown email.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let result = AuthService::new(db, &tokens)
        .login(login("ghost@example.com", "whatever"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests that disabled accounts cannot log in even with the right password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_disabled_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    factory::user::UserFactory::new(db)
        .email("gone@example.com")
        .password_hash(hash_password("right-pass")?)
        .status(UserStatus::Disabled)
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .login(login("gone@example.com", "right-pass"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}
