use super::*;

/// Tests finding an existing user by ID.
///
/// Expected: Ok(Some(User)) with matching username
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let user = UserRepository::new(db).find_by_id(created.id).await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().username, created.username);

    Ok(())
}

/// Tests looking up an ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find_by_id(4242).await?;

    assert!(user.is_none());

    Ok(())
}
