use super::*;

/// Tests a two-term search across languages.
///
/// Verifies that "climate change" finds every published translation containing both
/// terms, newest publication first, and offers no suggestions once enough hits exist.
///
/// Expected: Ok with 3 hits in recency order and no suggestions
#[tokio::test]
async fn finds_newest_matches_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    factory::create_language(db, "zh-TW").await?;
    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let oldest = factory::article::ArticleFactory::new(db, user.id)
        .published_at(now - Duration::days(30))
        .translation("en", "Climate change and rice farming")
        .build()
        .await?;
    let newest = factory::article::ArticleFactory::new(db, user.id)
        .published_at(now - Duration::days(1))
        .translation("en", "Climate change in the city")
        .translation_with_content("zh-TW", "城市氣候", "climate change 報導")
        .build()
        .await?;
    factory::article::ArticleFactory::new(db, user.id)
        .published()
        .translation("en", "Changing tides")
        .build()
        .await?;

    let results = SearchService::new(db)
        .search(params("  climate change ", None, None))
        .await?;

    assert_eq!(results.page.total, 3);
    let ids: Vec<i32> = results.page.items.iter().map(|h| h.row.article_id).collect();
    assert_eq!(ids, vec![newest.id, newest.id, oldest.id]);
    assert!(results.suggestions.is_empty());

    Ok(())
}

/// Tests suggestions for a weak query.
///
/// Verifies that a query with no hits suggests titles sharing its first three
/// characters.
///
/// Expected: Ok with no hits and "Typhoon tracker" suggested
#[tokio::test]
async fn suggests_titles_for_few_hits() -> Result<(), AppError> {
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
        .translation("en", "Typhoon tracker")
        .build()
        .await?;

    let results = SearchService::new(db)
        .search(params("typography", None, None))
        .await?;

    assert_eq!(results.page.total, 0);
    assert_eq!(results.suggestions, vec!["Typhoon tracker"]);

    Ok(())
}

/// Tests that a blank query is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_query() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SearchService::new(db).search(params("   ", None, None)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests search pagination.
///
/// Verifies that 12 hits at page size 5 leave 2 hits on page 3, and that an
/// out-of-range page size falls back to 10.
///
/// Expected: Ok with total_page 3 and 2 items, then 10 items
#[tokio::test]
async fn pages_through_hits() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    let user = factory::create_user(db).await?;
    for n in 0..12 {
        factory::article::ArticleFactory::new(db, user.id)
            .published_at(Utc::now() - Duration::minutes(n))
            .translation("en", &format!("Harbor report {}", n))
            .build()
            .await?;
    }

    let service = SearchService::new(db);
    let third = service.search(params("harbor", Some(3), Some(5))).await?;
    assert_eq!(third.page.total, 12);
    assert_eq!(third.page.total_page(), 3);
    assert_eq!(third.page.items.len(), 2);

    let oversized = service.search(params("harbor", None, Some(500))).await?;
    assert_eq!(oversized.page.request.page_size, 10);
    assert_eq!(oversized.page.items.len(), 10);

    let beyond = service.search(params("harbor", Some(i64::MAX), Some(5))).await?;
    assert_eq!(beyond.page.total, 12);
    assert!(beyond.page.items.is_empty());

    Ok(())
}
