use super::*;

/// Tests promoting a user to moderator.
///
/// Expected: Ok(true) and the stored role updated
#[tokio::test]
async fn sets_role_for_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.set_role(&user.email, Role::Moderator).await?);

    let stored = repo.find_by_email(&user.email).await?.unwrap();
    assert_eq!(stored.role, Role::Moderator);

    Ok(())
}

/// Tests setting the role of an unknown email.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.set_role("nobody@example.com", Role::Admin).await?);

    Ok(())
}
