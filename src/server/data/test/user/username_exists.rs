use super::*;

/// Tests checking for a taken username.
///
/// Expected: true for an existing username, false otherwise
#[tokio::test]
async fn reports_taken_usernames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_exists("taken").await?);
    assert!(!repo.username_exists("free").await?);

    Ok(())
}
