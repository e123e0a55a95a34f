use super::*;

/// Tests deleting a user by email.
///
/// Expected: Ok(true) and the user no longer found
#[tokio::test]
async fn deletes_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(&user.email).await?);
    assert!(repo.find_by_email(&user.email).await?.is_none());
    assert!(!repo.delete(&user.email).await?);

    Ok(())
}
