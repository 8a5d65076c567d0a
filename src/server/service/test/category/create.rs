use super::*;

/// Tests creating a child category.
///
/// Expected: Ok with the parent embedded and a derived slug
#[tokio::test]
async fn creates_under_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let parent = factory::create_category(db).await?;

    let category = CategoryService::new(db)
        .create(
            CategoryParams {
                parent_id: Some(parent.id),
            },
            vec![translation("en", "Marine Biology")],
        )
        .await?;

    assert_eq!(category.category.parent_id, Some(parent.id));
    assert_eq!(category.translations[0].slug, "marine-biology");
    assert_eq!(
        category.parent.as_ref().map(|p| p.category.id),
        Some(parent.id)
    );

    Ok(())
}

/// Tests that the parent must exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn requires_live_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;

    let result = CategoryService::new(db)
        .create(
            CategoryParams {
                parent_id: Some(404),
            },
            vec![translation("en", "Orphan")],
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
