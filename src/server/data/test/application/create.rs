use super::*;

/// Tests submitting an application.
///
/// Expected: Ok with status pending and details stored
#[tokio::test]
async fn creates_pending_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let application = repo
        .create(NewApplication {
            scholarship_id: "5".to_string(),
            user_email: "dave@example.com".to_string(),
            application_fees: 30.0,
            transaction_id: Some("pi_123".to_string()),
            details: serde_json::json!({ "phone": "555-0100" }),
        })
        .await?;

    assert_eq!(application.status, "pending");
    assert_eq!(application.application_fees, 30.0);
    assert_eq!(application.details["phone"], "555-0100");
    assert_eq!(repo.get_by_user("dave@example.com").await?.len(), 1);

    Ok(())
}
