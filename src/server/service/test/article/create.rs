use super::*;

/// Tests creating a multilingual article with links.
///
/// Expected: Ok with both translations, the tag and the category attached
#[tokio::test]
async fn creates_with_translations_and_links() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;
    let user = factory::create_user(db).await?;
    let tag = factory::create_tag(db).await?;
    let category = factory::create_category(db).await?;

    let article = ArticleService::new(db)
        .create(
            CreateArticleParams {
                tag_ids: vec![tag.id, tag.id],
                category_ids: vec![category.id],
                ..draft(user.id)
            },
            vec![
                translation("en", "Typhoon Season Outlook"),
                translation("zh-TW", "颱風季展望"),
            ],
        )
        .await?;

    assert_eq!(article.translations.len(), 2);
    assert_eq!(article.tags.len(), 1);
    assert_eq!(article.categories.len(), 1);
    assert_eq!(article.author.as_ref().map(|a| a.id), Some(user.id));
    assert!(article.article.published_at.is_none());
    assert!(article
        .translations
        .iter()
        .any(|t| t.slug == "typhoon-season-outlook"));

    Ok(())
}

/// Tests that creating a published article stamps `published_at`.
///
/// Expected: Ok with published_at set
#[tokio::test]
async fn stamps_publication_on_create() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;

    let article = ArticleService::new(db)
        .create(
            CreateArticleParams {
                status: ArticleStatus::Published,
                ..draft(user.id)
            },
            vec![translation("en", "Launch")],
        )
        .await?;

    assert!(article.article.published_at.is_some());

    Ok(())
}

/// Tests that every linked tag must exist.
///
/// Expected: Err(NotFound) and no article created
#[tokio::test]
async fn rejects_unknown_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;

    let result = ArticleService::new(db)
        .create(
            CreateArticleParams {
                tag_ids: vec![404],
                ..draft(user.id)
            },
            vec![translation("en", "Dangling")],
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an article needs at least one translation.
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

    let user = factory::create_user(db).await?;

    let result = ArticleService::new(db)
        .create(draft(user.id), Vec::new())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that the same language may not appear twice in one request.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_language() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;

    let result = ArticleService::new(db)
        .create(
            draft(user.id),
            vec![translation("en", "First"), translation("en", "Second")],
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
