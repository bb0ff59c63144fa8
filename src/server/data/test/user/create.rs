use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the username and hash and returns the
/// generated ID.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "analyst".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "analyst");

    let stored = repo.find_credentials("analyst").await?.unwrap();
    assert_eq!(stored.password_hash, "$argon2id$stub");

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
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

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            username: "analyst".to_string(),
            password_hash: "!".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
