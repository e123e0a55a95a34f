use super::*;

/// Tests that only ratings of the requested scholarship are returned.
///
/// Expected: Ok with the three ratings of scholarship 1, unparsed
#[tokio::test]
async fn returns_raw_ratings_for_scholarship() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_review(db, 1, "5").await?;
    factory::create_review(db, 1, "excellent").await?;
    ReviewFactory::new(db, 1).no_rating().build().await?;
    factory::create_review(db, 2, "1").await?;

    let repo = ReviewRepository::new(db);
    let mut ratings = repo.ratings_for_scholarship("1").await?;
    ratings.sort();

    assert_eq!(
        ratings,
        vec![None, Some("5".to_string()), Some("excellent".to_string())]
    );

    Ok(())
}

/// Tests a scholarship nobody reviewed.
///
/// Expected: Ok with no ratings
#[tokio::test]
async fn returns_empty_for_unreviewed_scholarship() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    assert!(repo.ratings_for_scholarship("99").await?.is_empty());

    Ok(())
}
