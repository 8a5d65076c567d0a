use super::*;

/// Tests multi-term search.
///
/// Verifies that every term must match within the same translation, that drafts are
/// excluded, and that hits are ordered newest first.
///
/// Expected: Ok with the two matching published articles, newest first
#[tokio::test]
async fn requires_every_term_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let older = factory::article::ArticleFactory::new(db, user.id)
        .published_at(now - Duration::days(2))
        .translation_with_content("en", "Climate report", "How change reaches the coast")
        .build()
        .await?;
    let newer = factory::article::ArticleFactory::new(db, user.id)
        .published_at(now - Duration::hours(2))
        .translation("en", "Climate change summit")
        .build()
        .await?;
    factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Climate basics")
        .build()
        .await?;
    factory::article::ArticleFactory::new(db, user.id)
        .translation("en", "Climate change draft")
        .build()
        .await?;

    let (hits, total) = SearchRepository::new(db)
        .search(&params("climate change"), PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = hits.iter().map(|h| h.row.article_id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(hits[0].row.author_name.as_deref(), Some(user.username.as_str()));

    Ok(())
}

/// Tests that terms of two characters or fewer are ignored.
///
/// Expected: Ok with the article found by "climate" alone
#[tokio::test]
async fn ignores_short_terms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Climate")
        .build()
        .await?;

    let (hits, total) = SearchRepository::new(db)
        .search(&params("climate of"), PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(hits.len(), 1);

    Ok(())
}

/// Tests the category name attached to each hit.
///
/// Verifies that the name is taken in the hit's own language.
///
/// Expected: Ok with "Science" for the English hit and "科學" for the Chinese hit
#[tokio::test]
async fn names_category_in_hit_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;
    let user = factory::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db)
        .translation("en", "Science")
        .translation("zh-TW", "科學")
        .build()
        .await?;
    let article = factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation_with_content("en", "Glacier survey", "Glacier data")
        .translation_with_content("zh-TW", "冰川調查", "Glacier 數據")
        .build()
        .await?;
    factory::helpers::link_category(db, article.id, category.id).await?;

    let (hits, total) = SearchRepository::new(db)
        .search(&params("glacier"), PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 2);
    let english = hits.iter().find(|h| h.row.language_code == "en").unwrap();
    let chinese = hits.iter().find(|h| h.row.language_code == "zh-TW").unwrap();
    assert_eq!(english.category_name.as_deref(), Some("Science"));
    assert_eq!(chinese.category_name.as_deref(), Some("科學"));

    Ok(())
}

/// Tests the language and tag filters.
///
/// Expected: Ok with only the tagged English hit
#[tokio::test]
async fn applies_language_and_tag_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "fr").await?;
    let user = factory::create_user(db).await?;
    let tag = factory::tag::TagFactory::new(db)
        .translation("en", "Ocean")
        .build()
        .await?;
    let tagged = factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Ocean currents")
        .translation("fr", "Ocean courants")
        .build()
        .await?;
    factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Ocean floor")
        .build()
        .await?;
    factory::helpers::link_tag(db, tagged.id, tag.id).await?;

    let search = SearchParams {
        language: Some("en".to_string()),
        tag_slug: Some("ocean".to_string()),
        ..params("ocean")
    };
    let (hits, total) = SearchRepository::new(db)
        .search(&search, PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(hits[0].row.article_id, tagged.id);
    assert_eq!(hits[0].row.language_code, "en");

    Ok(())
}
