use super::*;

/// Tests changing status and leaving feedback.
///
/// Expected: Ok(true) for both updates and the new values stored
#[tokio::test]
async fn updates_status_and_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let application = factory::create_application(db, 5, "erin@example.com").await?;

    let repo = ApplicationRepository::new(db);
    assert!(
        repo.set_status(application.id, ApplicationStatus::Processing)
            .await?
    );
    assert!(
        repo.set_feedback(application.id, "Missing transcript".to_string())
            .await?
    );

    let stored = repo.get_by_id(application.id).await?.unwrap();
    assert_eq!(stored.status, "processing");
    assert_eq!(stored.feedback.as_deref(), Some("Missing transcript"));

    Ok(())
}

/// Tests updating an application that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    assert!(!repo.set_status(31337, ApplicationStatus::Rejected).await?);
    assert!(!repo.delete(31337).await?);

    Ok(())
}
