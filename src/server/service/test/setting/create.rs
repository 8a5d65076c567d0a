use super::*;

/// Tests that a setting may be created without translations.
///
/// Expected: Ok with no translations
#[tokio::test]
async fn allows_base_value_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setting = SettingService::new(db)
        .create(site_title(), Vec::new())
        .await?;

    assert_eq!(setting.setting.key, "site_title");
    assert!(setting.translations.is_empty());

    Ok(())
}

/// Tests that keys are unique among live settings.
///
/// Expected: Err(Conflict) on the second create, Ok once the first is deleted
#[tokio::test]
async fn rejects_duplicate_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingService::new(db);
    let first = service.create(site_title(), Vec::new()).await?;

    assert!(matches!(
        service.create(site_title(), Vec::new()).await,
        Err(AppError::Conflict(_))
    ));

    service.delete(first.setting.id).await?;
    service.create(site_title(), Vec::new()).await?;

    Ok(())
}
