use super::*;

/// Tests page arithmetic on a tag listing.
///
/// Verifies that 25 tags read at page size 10 give three pages with 5 tags on the
/// last one.
///
/// Expected: Ok with total 25, total_page 3 and 5 items
#[tokio::test]
async fn reports_total_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_default_language(db, "en").await?;
    for _ in 0..25 {
        factory::create_tag(db).await?;
    }

    let page = TagService::new(db)
        .get_paginated(
            TagFilter::default(),
            SortDirection::Desc,
            PageRequest::new(Some(3), Some(10), TAG_PAGE_SIZE),
        )
        .await?;

    assert_eq!(page.total, 25);
    assert_eq!(page.total_page(), 3);
    assert_eq!(page.items.len(), 5);

    Ok(())
}
