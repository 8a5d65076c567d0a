use super::*;

/// Tests that the default language cannot be deleted.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn refuses_default_language() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let en = factory::create_default_language(db, "en").await?;

    let result = LanguageService::new(db).delete(en.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a language used by translations cannot be deleted.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn refuses_referenced_language() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let fr = factory::create_language(db, "fr").await?;
    factory::category::CategoryFactory::new(db)
        .translation("fr", "Cuisine")
        .build()
        .await?;

    let result = LanguageService::new(db).delete(fr.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting an unused language.
///
/// Expected: Ok, then NotFound by code
#[tokio::test]
async fn tombstones_unused_language() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let fr = factory::create_language(db, "fr").await?;

    let service = LanguageService::new(db);
    service.delete(fr.id).await?;

    assert!(matches!(
        service.get_by_code("fr").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
