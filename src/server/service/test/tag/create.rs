use super::*;

/// Tests creating a tag in two languages.
///
/// Verifies that blank slugs are derived from the name and explicit slugs are kept.
///
/// Expected: Ok with both translations stored
#[tokio::test]
async fn derives_blank_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;

    let tag = TagService::new(db)
        .create(vec![
            translation("en", "Climate Change", ""),
            translation("zh-TW", "氣候變遷", "qi-hou"),
        ])
        .await?;

    assert_eq!(tag.translations.len(), 2);
    let en = tag
        .translations
        .iter()
        .find(|t| t.language_code == "en")
        .unwrap();
    let zh = tag
        .translations
        .iter()
        .find(|t| t.language_code == "zh-TW")
        .unwrap();
    assert_eq!(en.slug, "climate-change");
    assert_eq!(zh.slug, "qi-hou");

    Ok(())
}

/// Tests that an unknown language rolls back the whole create.
///
/// Expected: Err(BadRequest) and no tag left behind
#[tokio::test]
async fn rolls_back_on_unknown_language() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;

    let service = TagService::new(db);
    let result = service
        .create(vec![
            translation("en", "Weather", ""),
            translation("xx", "Unknown", ""),
        ])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let page = service
        .get_paginated(
            TagFilter::default(),
            SortDirection::Desc,
            PageRequest::new(None, None, TAG_PAGE_SIZE),
        )
        .await?;
    assert_eq!(page.total, 0);

    Ok(())
}

/// Tests that a tag needs at least one translation.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_translation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TagService::new(db).create(Vec::new()).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests slug uniqueness within a language.
///
/// Expected: Err(Conflict) for a second tag reusing "science" in "en"
#[tokio::test]
async fn rejects_taken_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::tag::TagFactory::new(db)
        .translation("en", "Science")
        .build()
        .await?;

    let result = TagService::new(db)
        .create(vec![translation("en", "Science!", "science")])
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
