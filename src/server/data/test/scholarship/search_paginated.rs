use super::*;

/// Tests offset pagination in insertion order.
///
/// Verifies that page 1 with size 4 over ten scholarships skips the first four
/// and returns records five through eight.
///
/// Expected: Ok with the 5th-8th inserted scholarships
#[tokio::test]
async fn returns_requested_page_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for i in 0..10 {
        let scholarship = ScholarshipFactory::new(db)
            .scholarship_name(format!("Grant {}", i))
            .build()
            .await?;
        ids.push(scholarship.id);
    }

    let repo = ScholarshipRepository::new(db);
    let page = repo.search_paginated(None, 1, 4).await?;

    let page_ids: Vec<i32> = page.iter().map(|s| s.id).collect();
    assert_eq!(page_ids, ids[4..8].to_vec());

    Ok(())
}

/// Tests the last, partial page and a page past the end.
///
/// Expected: Ok with the remaining records, then an empty page
#[tokio::test]
async fn returns_partial_and_empty_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        ScholarshipFactory::new(db).build().await?;
    }

    let repo = ScholarshipRepository::new(db);
    assert_eq!(repo.search_paginated(None, 1, 3).await?.len(), 2);
    assert!(repo.search_paginated(None, 5, 3).await?.is_empty());

    Ok(())
}

/// Tests that search text matches case-insensitively.
///
/// Expected: "merit" matches a scholarship named "Merit Award"
#[tokio::test]
async fn matches_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let merit = ScholarshipFactory::new(db)
        .scholarship_name("Merit Award")
        .build()
        .await?;
    ScholarshipFactory::new(db)
        .scholarship_name("Sports Grant")
        .build()
        .await?;

    let repo = ScholarshipRepository::new(db);
    let results = repo.search_paginated(Some("merit"), 0, 10).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, merit.id);

    Ok(())
}

/// Tests that search text is matched against university name and degree too.
///
/// Expected: one hit through the university, one through the degree, none elsewhere
#[tokio::test]
async fn matches_university_or_degree() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_university = ScholarshipFactory::new(db)
        .scholarship_name("Global Fund")
        .university_name("Harvard University")
        .degree("Bachelor")
        .build()
        .await?;
    let by_degree = ScholarshipFactory::new(db)
        .scholarship_name("Research Grant")
        .university_name("Oxford")
        .degree("PhD in Harvard Studies")
        .build()
        .await?;
    ScholarshipFactory::new(db)
        .scholarship_name("Unrelated")
        .university_name("MIT")
        .degree("Diploma")
        .build()
        .await?;

    let repo = ScholarshipRepository::new(db);
    let results = repo.search_paginated(Some("HARVARD"), 0, 10).await?;

    let ids: Vec<i32> = results.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![by_university.id, by_degree.id]);
    assert_eq!(repo.count(Some("HARVARD")).await?, 2);
    assert_eq!(repo.count(None).await?, 3);

    Ok(())
}

/// Tests that LIKE wildcards in search text are matched literally.
///
/// Expected: "%" only matches names that contain a percent sign
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let discounted = ScholarshipFactory::new(db)
        .scholarship_name("100% Tuition Waiver")
        .build()
        .await?;
    ScholarshipFactory::new(db)
        .scholarship_name("Partial Waiver")
        .build()
        .await?;

    let repo = ScholarshipRepository::new(db);
    let results = repo.search_paginated(Some("%"), 0, 10).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, discounted.id);

    Ok(())
}

/// Tests case-insensitive matching on non-ASCII text.
///
/// Expected: "école" and "ÉCOLE" both match a scholarship named "École Grant"
#[tokio::test]
async fn matches_non_ascii_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ecole = ScholarshipFactory::new(db)
        .scholarship_name("École Grant")
        .build()
        .await?;

    let repo = ScholarshipRepository::new(db);

    let results = repo.search_paginated(Some("école"), 0, 10).await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, ecole.id);
    assert_eq!(repo.count(Some("ÉCOLE")).await?, 1);

    Ok(())
}

/// Tests that a match never spans two fields.
///
/// Expected: text joining the end of the name to the start of the university finds nothing
#[tokio::test]
async fn does_not_match_across_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ScholarshipFactory::new(db)
        .scholarship_name("Merit")
        .university_name("Oxford")
        .build()
        .await?;

    let repo = ScholarshipRepository::new(db);
    assert_eq!(repo.count(Some("meritoxford")).await?, 0);

    Ok(())
}
