use super::*;

/// Tests creating a new review.
///
/// Expected: Ok with the review stored as submitted
#[tokio::test]
async fn creates_new_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let review = repo
        .upsert(upsert_params("7", "alice@example.com", "4"))
        .await?;

    assert_eq!(review.scholarship_id, "7");
    assert_eq!(review.user_email, "alice@example.com");
    assert_eq!(review.rating.as_deref(), Some("4"));

    Ok(())
}

/// Tests that a second review by the same user on the same scholarship replaces the first.
///
/// Expected: Ok with one stored review carrying the latest rating and comment
#[tokio::test]
async fn replaces_review_on_natural_key_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let first = repo
        .upsert(upsert_params("7", "alice@example.com", "2"))
        .await?;
    let second = repo
        .upsert(UpsertReviewParams {
            comment: Some("Changed my mind".to_string()),
            ..upsert_params("7", "alice@example.com", "5")
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.rating.as_deref(), Some("5"));
    assert_eq!(second.comment.as_deref(), Some("Changed my mind"));
    assert_eq!(repo.get_by_scholarship("7").await?.len(), 1);

    Ok(())
}

/// Tests that different users reviewing the same scholarship get separate reviews.
///
/// Expected: Ok with two reviews
#[tokio::test]
async fn keeps_reviews_from_different_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    repo.upsert(upsert_params("7", "alice@example.com", "4"))
        .await?;
    repo.upsert(upsert_params("7", "bob@example.com", "3"))
        .await?;

    assert_eq!(repo.get_by_scholarship("7").await?.len(), 2);
    assert_eq!(repo.get_by_user("bob@example.com").await?.len(), 1);

    Ok(())
}
