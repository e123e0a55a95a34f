use super::*;

/// Tests editing the rating and comment of a review.
///
/// Expected: Ok(Some) with new values and unchanged ownership
#[tokio::test]
async fn updates_rating_and_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let review = ReviewFactory::new(db, 3)
        .user_email("carol@example.com")
        .rating("2")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update(UpdateReviewParams {
            id: review.id,
            rating: Some("4".to_string()),
            comment: Some("Better than expected".to_string()),
        })
        .await?
        .expect("review should exist");

    assert_eq!(updated.user_email, "carol@example.com");
    assert_eq!(updated.scholarship_id, "3");
    assert_eq!(updated.rating.as_deref(), Some("4"));
    assert_eq!(updated.comment.as_deref(), Some("Better than expected"));

    Ok(())
}

/// Tests editing a review that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let result = repo
        .update(UpdateReviewParams {
            id: 777,
            rating: None,
            comment: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
