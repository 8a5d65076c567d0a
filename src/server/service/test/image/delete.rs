use super::*;

/// Tests that an admin may delete anyone's image.
///
/// Expected: Ok, then NotFound on lookup
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let admin = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .build()
        .await?;
    let image = factory::create_image(db, owner.id).await?;

    let service = ImageService::new(db);
    service.delete(image.id, &admin).await?;

    assert!(matches!(
        service.get_by_id(image.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a missing image.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ImageService::new(db).delete(404, &user).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
