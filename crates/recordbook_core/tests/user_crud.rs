use recordbook_core::{
    open_pool_in_memory, RepoError, SqliteUserRepository, User, UserRepository, UserService,
};

fn service() -> UserService<SqliteUserRepository> {
    let pool = open_pool_in_memory().unwrap();
    UserService::new(SqliteUserRepository::new(pool))
}

#[test]
fn create_and_get_roundtrip() {
    let service = service();

    let created = service
        .register("user1", "user123465", "user@email.com")
        .unwrap();
    assert!(created.id > 0);

    let loaded = service.get_user(created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn create_ignores_caller_supplied_id() {
    let service = service();

    let mut user = User::new("a", "b", "c");
    user.id = 77;
    let created = service.create_user(user).unwrap();
    assert_ne!(created.id, 77);
    assert!(service.get_user(77).unwrap_err().is_not_found());
}

#[test]
fn ids_are_assigned_in_insert_order() {
    let service = service();

    let first = service.register("a", "b", "").unwrap();
    let second = service.register("c", "d", "").unwrap();
    assert!(second.id > first.id);

    let listed = service.list_users().unwrap();
    let ids: Vec<i64> = listed.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn list_is_empty_on_fresh_store() {
    assert!(service().list_users().unwrap().is_empty());
}

#[test]
fn get_unknown_id_is_not_found() {
    let err = service().get_user(42).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "user", id: 42 }));
}

#[test]
fn save_inserts_then_updates() {
    let service = service();

    let mut user = User::new("juan", "jun123", "juan@juan.com");
    service.save(&mut user).unwrap();
    assert!(user.is_persisted());
    let id = user.id;

    user.username = "juana".to_string();
    service.save(&mut user).unwrap();
    assert_eq!(user.id, id);
    assert_eq!(service.get_user(id).unwrap().username, "juana");
    assert_eq!(service.list_users().unwrap().len(), 1);
}

#[test]
fn update_uses_path_id_and_last_writer_wins() {
    let service = service();
    let created = service.register("a", "b", "c").unwrap();

    let mut payload = User::new("first", "p1", "");
    payload.id = 999;
    let updated = service.update_user(created.id, payload).unwrap();
    assert_eq!(updated.id, created.id);

    service
        .update_user(created.id, User::new("second", "p2", "x@y.z"))
        .unwrap();
    let loaded = service.get_user(created.id).unwrap();
    assert_eq!(loaded.username, "second");
    assert_eq!(loaded.email, "x@y.z");
}

#[test]
fn update_missing_id_is_not_found() {
    let err = service()
        .update_user(5, User::new("a", "b", "c"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_returns_removed_row_and_is_idempotent() {
    let service = service();
    let created = service.register("a", "b", "c").unwrap();

    let deleted = service.delete_user(created.id).unwrap();
    assert_eq!(deleted, Some(created.clone()));
    assert!(service.get_user(created.id).unwrap_err().is_not_found());

    assert_eq!(service.delete_user(created.id).unwrap(), None);
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let service = service();

    let err = service.register("", "secret", "").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(service.list_users().unwrap().is_empty());

    let created = service.register("ok", "secret", "").unwrap();
    let err = service
        .update_user(created.id, User::new("ok", "", ""))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(service.get_user(created.id).unwrap().password, "secret");
}

#[test]
fn repository_is_usable_without_service() {
    let pool = open_pool_in_memory().unwrap();
    let repo = SqliteUserRepository::new(pool);

    let id = repo.create_user(&User::new("a", "b", "c")).unwrap();
    assert!(repo.get_user(id).unwrap().is_some());
    assert!(repo.get_user(id + 1).unwrap().is_none());
}

#[test]
fn null_email_rows_map_to_empty_string() {
    let pool = open_pool_in_memory().unwrap();
    pool.get()
        .unwrap()
        .execute(
            "INSERT INTO users (username, password, email) VALUES ('legacy', 'pw', NULL);",
            [],
        )
        .unwrap();

    let users = SqliteUserRepository::new(pool).list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "");
}

#[test]
fn list_fails_whole_when_a_row_cannot_be_mapped() {
    let pool = open_pool_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::new(pool.clone()));
    service.register("good", "pw", "").unwrap();
    pool.get()
        .unwrap()
        .execute(
            "INSERT INTO users (id, username, password, email) VALUES (-1, 'bad', 'pw', '');",
            [],
        )
        .unwrap();

    let err = service.list_users().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
