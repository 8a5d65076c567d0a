use super::*;

/// Tests finding a published article by translation slug.
///
/// Expected: Ok(Some) with only the requested language's translation loaded
#[tokio::test]
async fn finds_published_translation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "ja").await?;
    let user = factory::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Harvest moon")
        .translation("ja", "中秋の名月")
        .build()
        .await?;

    let found = ArticleRepository::new(db)
        .find_published_by_slug("harvest-moon", "en")
        .await?
        .unwrap();

    assert_eq!(found.article.id, article.id);
    assert_eq!(found.translations.len(), 1);
    assert_eq!(found.translations[0].title, "Harvest moon");

    Ok(())
}

/// Tests that drafts are not reachable by slug.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    factory::article::ArticleFactory::new(db, user.id)
        .translation("en", "Unfinished")
        .build()
        .await?;

    let found = ArticleRepository::new(db)
        .find_published_by_slug("unfinished", "en")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a slug only matches in its own language.
///
/// Expected: Ok(None) when asking for the English slug in "ja"
#[tokio::test]
async fn requires_matching_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "ja").await?;
    let user = factory::create_user(db).await?;
    factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Harvest moon")
        .build()
        .await?;

    let found = ArticleRepository::new(db)
        .find_published_by_slug("harvest-moon", "ja")
        .await?;

    assert!(found.is_none());

    Ok(())
}
