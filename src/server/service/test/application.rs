use serde_json::{json, Map};
use test_utils::{builder::TestBuilder, factory::scholarship::ScholarshipFactory};

use crate::server::{
    error::AppError, model::application::CreateApplicationParams,
    service::application::ApplicationService,
};

/// Tests that the application fee is copied from the scholarship.
///
/// Expected: pending application carrying the scholarship's fee
#[tokio::test]
async fn copies_fee_from_scholarship() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scholarship = ScholarshipFactory::new(db)
        .application_fees(75.5)
        .build()
        .await?;

    let mut details = Map::new();
    details.insert("phone".to_string(), json!("555-0101"));

    let application = ApplicationService::new(db)
        .create(CreateApplicationParams {
            scholarship_id: scholarship.id,
            user_email: "gina@example.com".to_string(),
            transaction_id: Some("pi_456".to_string()),
            details,
        })
        .await?;

    assert_eq!(application.scholarship_id, scholarship.id.to_string());
    assert_eq!(application.application_fees, 75.5);
    assert_eq!(application.status, "pending");
    assert_eq!(application.details.get("phone"), Some(&json!("555-0101")));

    Ok(())
}

/// Tests applying to a scholarship that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_scholarship() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ApplicationService::new(db)
        .create(CreateApplicationParams {
            scholarship_id: 404,
            user_email: "gina@example.com".to_string(),
            transaction_id: None,
            details: Map::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
