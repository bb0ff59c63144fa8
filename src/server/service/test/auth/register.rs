use super::*;

/// Tests registering a new account.
///
/// Expected: Ok(User) and the stored hash verifies the password on login
#[tokio::test]
async fn registers_and_stores_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let user = service.register(registration("analyst", "s3cret-pass")).await?;
    let logged_in = service.login(credentials("analyst", "s3cret-pass")).await?;

    assert_eq!(user.username, "analyst");
    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests that a taken username is reported against the username field.
///
/// Expected: Err(InvalidForm) with the duplicate message
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("analyst")
        .build()
        .await?;

    let result = AuthService::new(db)
        .register(registration("analyst", "s3cret-pass"))
        .await;

    let Err(AppError::AuthErr(AuthError::InvalidForm(errors))) = result else {
        panic!("expected invalid form");
    };
    assert_eq!(
        errors.get("username"),
        &["A user with that username already exists.".to_string()]
    );

    Ok(())
}

/// Tests that an invalid form creates nothing.
///
/// Expected: Err(InvalidForm) and no user row
#[tokio::test]
async fn invalid_form_creates_no_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .register(registration("analyst", "short"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidForm(_)))
    ));
    assert!(crate::server::data::user::UserRepository::new(db)
        .find_credentials("analyst")
        .await?
        .is_none());

    Ok(())
}

/// Tests the error reported when the unique username index rejects an insert.
///
/// Covers a registration that loses a race after the uniqueness check passed.
///
/// Expected: Err(InvalidForm) with the duplicate message instead of a database error
#[tokio::test]
async fn unique_violation_on_insert_is_a_form_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("analyst")
        .build()
        .await?;
    let Err(insert_err) = factory::user::UserFactory::new(db)
        .username("analyst")
        .build()
        .await
    else {
        panic!("expected unique violation");
    };

    let AppError::AuthErr(AuthError::InvalidForm(errors)) = registration_conflict(insert_err) else {
        panic!("expected invalid form");
    };
    assert_eq!(
        errors.get("username"),
        &["A user with that username already exists.".to_string()]
    );

    Ok(())
}

/// Tests that other insert failures stay database errors.
///
/// Expected: AppError::DbErr
#[test]
fn other_insert_failures_stay_database_errors() {
    let err = registration_conflict(sea_orm::DbErr::Custom("disk full".to_string()));

    assert!(matches!(err, AppError::DbErr(_)));
}
