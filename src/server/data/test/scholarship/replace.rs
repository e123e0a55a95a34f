use super::*;

/// Tests full replacement of an existing scholarship.
///
/// Expected: Ok(Some) with every field replaced
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = ScholarshipFactory::new(db)
        .attributes(serde_json::json!({ "deadline": "2025-01-01" }))
        .build()
        .await?;

    let repo = ScholarshipRepository::new(db);
    let replaced = repo
        .replace(existing.id, params("Renamed Scholarship"))
        .await?
        .expect("scholarship should exist");

    assert_eq!(replaced.id, existing.id);
    assert_eq!(replaced.scholarship_name, "Renamed Scholarship");
    assert_eq!(replaced.university_name, "Kyoto University");
    assert_eq!(replaced.application_fees, 40.0);
    assert!(replaced.attributes.is_empty());

    Ok(())
}

/// Tests replacing a scholarship that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_scholarship() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScholarshipRepository::new(db);
    let result = repo.replace(404, params("Ghost")).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that search follows the replaced fields.
///
/// Expected: the new name matches, the old one no longer does
#[tokio::test]
async fn search_follows_replaced_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = ScholarshipFactory::new(db)
        .scholarship_name("Öffentliches Stipendium")
        .build()
        .await?;

    let repo = ScholarshipRepository::new(db);
    repo.replace(existing.id, params("Renamed Scholarship"))
        .await?
        .expect("scholarship should exist");

    assert_eq!(repo.count(Some("öffentliches")).await?, 0);
    assert_eq!(repo.count(Some("RENAMED")).await?, 1);

    Ok(())
}
