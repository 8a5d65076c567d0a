use super::*;

/// Tests filtering the article listing by status.
///
/// Expected: Ok with only the published article counted
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    factory::create_article(db, user.id).await?;
    let published = factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Live story")
        .build()
        .await?;

    let filter = ArticleFilter {
        status: Some(ArticleStatus::Published),
        ..Default::default()
    };
    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&filter, PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, published.id);
    assert_eq!(articles[0].author.as_ref().unwrap().id, user.id);

    Ok(())
}

/// Tests the language filter on article listings.
///
/// Verifies that only articles translated into the requested language are listed and
/// that only that language's translations are loaded.
///
/// Expected: Ok with the bilingual article carrying only its "zh-TW" translation
#[tokio::test]
async fn keeps_articles_translated_into_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;
    let user = factory::create_user(db).await?;
    factory::create_article(db, user.id).await?;
    let bilingual = factory::article::ArticleFactory::new(db, user.id)
        .translation("en", "Rain season")
        .translation("zh-TW", "雨季")
        .build()
        .await?;

    let filter = ArticleFilter {
        language: Some("zh-TW".to_string()),
        ..Default::default()
    };
    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&filter, PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, bilingual.id);
    assert_eq!(articles[0].translations.len(), 1);
    assert_eq!(articles[0].translations[0].language_code, "zh-TW");

    Ok(())
}

/// Tests filtering the article listing by linked tag.
///
/// Expected: Ok with the tagged article and its tag attached
#[tokio::test]
async fn filters_by_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    let tagged = factory::create_article(db, user.id).await?;
    factory::create_article(db, user.id).await?;
    let tag = factory::create_tag(db).await?;
    factory::helpers::link_tag(db, tagged.id, tag.id).await?;

    let filter = ArticleFilter {
        tag_id: Some(tag.id),
        ..Default::default()
    };
    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&filter, PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, tagged.id);
    assert_eq!(articles[0].tags.len(), 1);
    assert_eq!(articles[0].tags[0].tag.id, tag.id);

    Ok(())
}

/// Tests that tombstoned articles never appear in listings.
///
/// Expected: Ok with total 0
#[tokio::test]
async fn skips_tombstoned_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    let article = factory::create_article(db, user.id).await?;

    let repo = ArticleRepository::new(db);
    repo.tombstone(article.id).await?;

    let (articles, total) = repo
        .get_paginated(&ArticleFilter::default(), PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 0);
    assert!(articles.is_empty());
    assert!(repo.get_by_id(article.id).await?.is_none());

    Ok(())
}
