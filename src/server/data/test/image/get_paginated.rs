use super::*;

/// Tests filtering images by usage and uploader.
///
/// Expected: Ok with one image per filter
#[tokio::test]
async fn filters_by_usage_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let avatar = factory::image::ImageFactory::new(db, alice.id)
        .usage("avatar")
        .build()
        .await?;
    let bobs = factory::create_image(db, bob.id).await?;

    let repo = ImageRepository::new(db);
    let page = PageRequest::new(None, None, 20);

    let by_usage = ImageFilter {
        usage: Some("avatar".to_string()),
        ..Default::default()
    };
    let (images, total) = repo
        .get_paginated(&by_usage, SortDirection::Desc, page)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(images[0].id, avatar.id);

    let by_user = ImageFilter {
        user_id: Some(bob.id),
        ..Default::default()
    };
    let (images, total) = repo
        .get_paginated(&by_user, SortDirection::Desc, page)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(images[0].id, bobs.id);

    Ok(())
}

/// Tests that tombstoned images are hidden.
///
/// Expected: Ok with total 0 and None on lookup
#[tokio::test]
async fn hides_tombstoned_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let image = factory::create_image(db, user.id).await?;

    let repo = ImageRepository::new(db);
    repo.tombstone(image.id).await?;

    let (_, total) = repo
        .get_paginated(
            &ImageFilter::default(),
            SortDirection::Desc,
            PageRequest::new(None, None, 20),
        )
        .await?;

    assert_eq!(total, 0);
    assert!(repo.find_by_id(image.id).await?.is_none());

    Ok(())
}
