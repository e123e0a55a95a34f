use super::*;

/// Tests creating a scholarship.
///
/// Verifies that the repository assigns an id and stores every field, including
/// free-form attributes.
///
/// Expected: Ok with the stored scholarship
#[tokio::test]
async fn creates_scholarship_with_attributes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut attributes = Map::new();
    attributes.insert("country".to_string(), serde_json::json!("Japan"));

    let repo = ScholarshipRepository::new(db);
    let created = repo
        .create(ScholarshipParams {
            attributes,
            ..params("MEXT Scholarship")
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.scholarship_name, "MEXT Scholarship");
    assert_eq!(created.attributes["country"], "Japan");

    let fetched = repo.get_by_id(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests that created scholarships are searchable by their folded fields.
///
/// Expected: upper-case non-ASCII search text finds the lower-case name
#[tokio::test]
async fn created_scholarship_is_searchable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScholarshipRepository::new(db);
    let created = repo.create(params("bourse d'études")).await?;

    let results = repo.search_paginated(Some("ÉTUDES"), 0, 10).await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, created.id);

    Ok(())
}
