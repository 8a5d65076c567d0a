use super::*;

fn latest(language: &str, limit: u64) -> PublishedQuery {
    PublishedQuery {
        featured_only: false,
        category_slug: None,
        language: language.to_string(),
        limit,
    }
}

/// Tests the latest listing ordering and limit.
///
/// Verifies that only published articles are returned, newest `published_at` first,
/// truncated to the limit.
///
/// Expected: Ok with the two newest published articles
#[tokio::test]
async fn returns_newest_published_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let oldest = factory::article::ArticleFactory::new(db, user.id)
        .published_at(now - Duration::days(3))
        .translation("en", "Oldest")
        .build()
        .await?;
    let newest = factory::article::ArticleFactory::new(db, user.id)
        .published_at(now - Duration::hours(1))
        .translation("en", "Newest")
        .build()
        .await?;
    let middle = factory::article::ArticleFactory::new(db, user.id)
        .published_at(now - Duration::days(1))
        .translation("en", "Middle")
        .build()
        .await?;
    factory::create_article(db, user.id).await?;

    let articles = ArticleRepository::new(db)
        .get_published(&latest("en", 2))
        .await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.article.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);
    assert!(!ids.contains(&oldest.id));

    Ok(())
}

/// Tests the featured listing.
///
/// Expected: Ok with only the featured article
#[tokio::test]
async fn restricts_to_featured() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    let featured = factory::article::ArticleFactory::new(db, user.id)
        .published()
        .featured()
        .translation("en", "Cover story")
        .build()
        .await?;
    factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Side story")
        .build()
        .await?;

    let query = PublishedQuery {
        featured_only: true,
        ..latest("en", 10)
    };
    let articles = ArticleRepository::new(db).get_published(&query).await?;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].article.id, featured.id);

    Ok(())
}

/// Tests the by-category listing.
///
/// Verifies that the category slug is matched in the query's language.
///
/// Expected: Ok with the article linked to "world", none for the "zh-TW" query
#[tokio::test]
async fn matches_category_slug_in_language() -> Result<(), DbErr> {
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
        .translation("en", "World")
        .build()
        .await?;
    let linked = factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Border news")
        .translation("zh-TW", "邊境新聞")
        .build()
        .await?;
    factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Local news")
        .build()
        .await?;
    factory::helpers::link_category(db, linked.id, category.id).await?;

    let repo = ArticleRepository::new(db);
    let in_english = repo
        .get_published(&PublishedQuery {
            category_slug: Some("world".to_string()),
            ..latest("en", 10)
        })
        .await?;
    let in_chinese = repo
        .get_published(&PublishedQuery {
            category_slug: Some("world".to_string()),
            ..latest("zh-TW", 10)
        })
        .await?;

    assert_eq!(in_english.len(), 1);
    assert_eq!(in_english[0].article.id, linked.id);
    assert!(in_chinese.is_empty());

    Ok(())
}
