use super::*;

/// Tests that a language created as default replaces the previous default.
///
/// Expected: Ok with "ar" as the only default
#[tokio::test]
async fn takes_over_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;

    let service = LanguageService::new(db);
    let arabic = service
        .create(CreateLanguageParams {
            direction: TextDirection::Rtl,
            ..language("ar", true)
        })
        .await?;

    let defaults: Vec<_> = service
        .get_all(false)
        .await?
        .into_iter()
        .filter(|l| l.is_default)
        .collect();

    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, arabic.id);
    assert_eq!(arabic.direction, TextDirection::Rtl);

    Ok(())
}

/// Tests that language codes are unique among live languages.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;

    let result = LanguageService::new(db).create(language("en", false)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that an inactive language cannot be created as default.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_inactive_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LanguageService::new(db)
        .create(CreateLanguageParams {
            is_active: false,
            ..language("fr", true)
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
