use super::*;

/// Tests creating a new user on first sign-in.
///
/// Expected: Ok with the user role and the provided sign-in time
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let signed_in = Utc::now();
    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParams {
            email: "new@example.com".to_string(),
            name: Some("New User".to_string()),
            photo_url: None,
            last_sign_in_time: signed_in,
        })
        .await?;

    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.name.as_deref(), Some("New User"));
    assert_eq!(user.role, Role::User);
    assert_eq!(
        user.last_sign_in_time.map(|t| t.timestamp()),
        Some(signed_in.timestamp())
    );

    Ok(())
}

/// Tests that signing in again only refreshes the sign-in time and provided fields.
///
/// Verifies that an existing admin keeps their role and that a missing name in the
/// upsert does not wipe the stored one.
///
/// Expected: Ok with same id, same role, same name, new sign-in time
#[tokio::test]
async fn preserves_role_and_name_on_repeat_sign_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = UserFactory::new(db)
        .email("admin@example.com")
        .name("Admin")
        .role("admin")
        .build()
        .await?;

    let later = Utc::now() + Duration::minutes(5);
    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParams {
            email: "admin@example.com".to_string(),
            name: None,
            photo_url: Some("https://example.com/a.png".to_string()),
            last_sign_in_time: later,
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name.as_deref(), Some("Admin"));
    assert_eq!(user.photo_url.as_deref(), Some("https://example.com/a.png"));
    assert_eq!(
        user.last_sign_in_time.map(|t| t.timestamp()),
        Some(later.timestamp())
    );
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
