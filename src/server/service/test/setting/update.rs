use super::*;

/// Tests updating the base value and adding a translation.
///
/// Expected: Ok with the new value and one translation
#[tokio::test]
async fn updates_value_and_translations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;

    let service = SettingService::new(db);
    let setting = service.create(site_title(), Vec::new()).await?;

    let updated = service
        .update(
            setting.setting.id,
            UpdateSettingParams {
                value: Some("Babelpress News".to_string()),
                ..Default::default()
            },
            vec![translation("zh-TW", "巴別新聞")],
        )
        .await?;

    assert_eq!(updated.setting.value, "Babelpress News");
    assert_eq!(updated.setting.group, "general");
    assert_eq!(updated.translations.len(), 1);

    Ok(())
}
