use super::*;

/// Tests registering a stored file.
///
/// Expected: Ok with the metadata persisted and no deletion stamp
#[tokio::test]
async fn registers_file_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let image = ImageRepository::new(db)
        .create(NewImageParams {
            user_id: user.id,
            file_name: "cover.webp".to_string(),
            file_path: "2026/10/15/cover.webp".to_string(),
            file_size: 2048,
            content_type: "image/webp".to_string(),
            alt: Some("Cover".to_string()),
            title: None,
            usage: Some("article".to_string()),
        })
        .await?;

    assert_eq!(image.user_id, user.id);
    assert_eq!(image.file_size, 2048);
    assert_eq!(image.usage.as_deref(), Some("article"));
    assert!(image.deleted_at.is_none());

    Ok(())
}
