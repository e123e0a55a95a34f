use super::*;
use test_utils::factory;

/// Tests deleting a scholarship leaves its reviews in place.
///
/// Expected: Ok(true), scholarship gone, review still stored
#[tokio::test]
async fn deletes_without_cascading_to_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .with_review_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scholarship = factory::create_scholarship(db).await?;
    let review = factory::create_review(db, scholarship.id, "5").await?;

    let repo = ScholarshipRepository::new(db);
    assert!(repo.delete(scholarship.id).await?);
    assert!(repo.get_by_id(scholarship.id).await?.is_none());

    let remaining = crate::server::data::review::ReviewRepository::new(db)
        .get_by_id(review.id)
        .await?;
    assert!(remaining.is_some());

    Ok(())
}

/// Tests deleting a scholarship that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_scholarship() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScholarshipRepository::new(db);
    assert!(!repo.delete(12345).await?);

    Ok(())
}
