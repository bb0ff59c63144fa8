use super::*;

/// Tests logging in with a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    service.register(registration("analyst", "s3cret-pass")).await?;
    let result = service.login(credentials("analyst", "wrong-pass")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in as a user that does not exist.
///
/// Expected: Err(InvalidCredentials), indistinguishable from a wrong password
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login(credentials("nobody", "s3cret-pass"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a user with an unusable password cannot log in.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_unusable_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = AuthService::new(db)
        .login(credentials(&user.username, "anything"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that blank fields are reported as form errors.
///
/// Expected: Err(InvalidForm) listing both fields
#[tokio::test]
async fn requires_both_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db).login(credentials("", "")).await;

    let Err(AppError::AuthErr(AuthError::InvalidForm(errors))) = result else {
        panic!("expected invalid form");
    };
    assert!(errors.has("username"));
    assert!(errors.has("password"));

    Ok(())
}
