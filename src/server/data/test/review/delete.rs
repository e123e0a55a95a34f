use super::*;

/// Tests deleting a review.
///
/// Expected: Ok(true) then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_review_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let review = factory::create_review(db, 1, "5").await?;

    let repo = ReviewRepository::new(db);
    assert!(repo.delete(review.id).await?);
    assert!(!repo.delete(review.id).await?);
    assert!(repo.ratings_for_scholarship("1").await?.is_empty());

    Ok(())
}
