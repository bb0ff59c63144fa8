use super::*;

/// Tests that credentials are looked up by exact username.
///
/// Expected: Some for the exact name, None for a different case
#[tokio::test]
async fn matches_username_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("Analyst")
        .password_hash("$argon2id$v=19$stub")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_credentials("Analyst").await?;
    let other_case = repo.find_credentials("analyst").await?;

    let found = found.unwrap();
    assert_eq!(found.user.id, created.id);
    assert_eq!(found.password_hash, "$argon2id$v=19$stub");
    assert!(other_case.is_none());

    Ok(())
}
