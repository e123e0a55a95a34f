use super::*;

/// Tests ordering by fees ascending then post date descending.
///
/// Verifies that among zero-fee scholarships the most recently posted one
/// comes first, and paid scholarships follow.
///
/// Expected: Ok with [newest free, older free, paid]
#[tokio::test]
async fn orders_by_fees_then_newest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let t1 = Utc::now() - Duration::days(3);
    let t2 = Utc::now() - Duration::days(2);
    let t3 = Utc::now() - Duration::days(1);

    let free_old = ScholarshipFactory::new(db)
        .application_fees(0.0)
        .post_date(t1)
        .build()
        .await?;
    let paid = ScholarshipFactory::new(db)
        .application_fees(50.0)
        .post_date(t2)
        .build()
        .await?;
    let free_new = ScholarshipFactory::new(db)
        .application_fees(0.0)
        .post_date(t3)
        .build()
        .await?;

    let repo = ScholarshipRepository::new(db);
    let results = repo.get_cheapest(6).await?;

    let ids: Vec<i32> = results.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![free_new.id, free_old.id, paid.id]);

    Ok(())
}

/// Tests that the listing is capped at the requested limit.
///
/// Expected: Ok with exactly six scholarships out of eight
#[tokio::test]
async fn caps_results_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for fees in 0..8 {
        ScholarshipFactory::new(db)
            .application_fees(fees as f64 * 10.0)
            .build()
            .await?;
    }

    let repo = ScholarshipRepository::new(db);
    let results = repo.get_cheapest(6).await?;

    assert_eq!(results.len(), 6);
    assert_eq!(results[0].application_fees, 0.0);
    assert_eq!(results[5].application_fees, 50.0);

    Ok(())
}
