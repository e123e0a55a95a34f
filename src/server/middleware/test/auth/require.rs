use super::*;

/// Tests that a verified principal without an account is refused.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_principal_without_account() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let principal = principal("ghost@example.com");
    let result = AuthGuard::new(db, &principal).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));
}

/// Tests that an empty permission list only requires an account.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_any_registered_user_without_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("ivy@example.com").build().await?;

    let principal = principal("ivy@example.com");
    let user = AuthGuard::new(db, &principal).require(&[]).await?;

    assert_eq!(user.email, "ivy@example.com");
    assert_eq!(user.role, Role::User);

    Ok(())
}

/// Tests the admin permission against each role.
///
/// Expected: only admins pass
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("mod@example.com")
        .role("moderator")
        .build()
        .await?;
    UserFactory::new(db)
        .email("admin@example.com")
        .role("admin")
        .build()
        .await?;

    let moderator = principal("mod@example.com");
    let result = AuthGuard::new(db, &moderator)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let admin = principal("admin@example.com");
    AuthGuard::new(db, &admin)
        .require(&[Permission::Admin])
        .await?;

    Ok(())
}

/// Tests that admins satisfy the moderator permission.
///
/// Expected: moderators and admins pass, plain users are denied
#[tokio::test]
async fn moderator_permission_includes_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("user@example.com")
        .build()
        .await?;
    UserFactory::new(db)
        .email("mod@example.com")
        .role("moderator")
        .build()
        .await?;
    UserFactory::new(db)
        .email("admin@example.com")
        .role("admin")
        .build()
        .await?;

    for email in ["mod@example.com", "admin@example.com"] {
        let principal = principal(email);
        AuthGuard::new(db, &principal)
            .require(&[Permission::Moderator])
            .await?;
    }

    let user = principal("user@example.com");
    let result = AuthGuard::new(db, &user)
        .require(&[Permission::Moderator])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests ownership checks, alone and combined with a role.
///
/// Expected: owners pass; strangers pass only with the named role
#[tokio::test]
async fn ownership_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("owner@example.com")
        .build()
        .await?;
    UserFactory::new(db)
        .email("mod@example.com")
        .role("moderator")
        .build()
        .await?;

    let owner = principal("owner@example.com");
    let moderator = principal("mod@example.com");
    let resource_owner = || "owner@example.com".to_string();

    AuthGuard::new(db, &owner)
        .require(&[Permission::Owner(resource_owner())])
        .await?;
    AuthGuard::new(db, &moderator)
        .require(&[Permission::OwnerOrModerator(resource_owner())])
        .await?;

    let denied = AuthGuard::new(db, &moderator)
        .require(&[Permission::Owner(resource_owner())])
        .await;
    assert!(denied.is_err());

    let denied = AuthGuard::new(db, &moderator)
        .require(&[Permission::OwnerOrAdmin(resource_owner())])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
