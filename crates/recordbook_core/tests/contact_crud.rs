use recordbook_core::{
    open_pool, open_pool_in_memory, Contact, ContactService, RepoError, SqliteContactRepository,
    ValidationError,
};

fn contact(name: &str, email: Option<&str>, phone: &str) -> Contact {
    Contact::new(name, email.map(str::to_string), phone)
}

#[test]
fn contacts_survive_reopening_the_pool() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");

    let created = {
        let service = ContactService::new(SqliteContactRepository::new(open_pool(&path).unwrap()));
        service
            .create_contact(contact("Ana", Some("ana@example.org"), "555-0100"))
            .unwrap()
    };

    let service = ContactService::new(SqliteContactRepository::new(open_pool(&path).unwrap()));
    assert_eq!(service.get_contact(created.id).unwrap(), created);
}

#[test]
fn crud_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let pool = open_pool(dir.path().join("contacts.db")).unwrap();
    let service = ContactService::new(SqliteContactRepository::new(pool));

    let ana = service
        .create_contact(contact("Ana", None, "555-0100"))
        .unwrap();
    let ben = service
        .create_contact(contact("Ben", Some("ben@example.org"), "555-0101"))
        .unwrap();

    let listed = service.list_contacts().unwrap();
    assert_eq!(listed, vec![ana.clone(), ben.clone()]);
    assert_eq!(listed[0].email_or_placeholder(), "No email");

    let mut changed = ana.clone();
    changed.email = Some("ana@example.org".to_string());
    service.update_contact(&changed).unwrap();
    assert_eq!(service.get_contact(ana.id).unwrap(), changed);

    assert_eq!(service.delete_contact(ben.id).unwrap(), Some(ben.clone()));
    assert_eq!(service.delete_contact(ben.id).unwrap(), None);
    assert_eq!(service.list_contacts().unwrap(), vec![changed]);
}

#[test]
fn update_missing_contact_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let service =
        ContactService::new(SqliteContactRepository::new(open_pool(dir.path().join("c.db")).unwrap()));

    let mut ghost = contact("Ghost", None, "000");
    ghost.id = 12;
    let err = service.update_contact(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "contact", id: 12 }));
}

#[test]
fn malformed_email_is_rejected_before_sql() {
    let dir = tempfile::tempdir().unwrap();
    let service =
        ContactService::new(SqliteContactRepository::new(open_pool(dir.path().join("c.db")).unwrap()));

    let err = service
        .create_contact(contact("Ana", Some("ana at example"), "555"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::Malformed { field: "email", .. })
    ));
    assert!(service.list_contacts().unwrap().is_empty());
}

#[test]
fn save_inserts_then_updates() {
    let service = ContactService::new(SqliteContactRepository::new(open_pool_in_memory().unwrap()));

    let mut ana = contact("Ana", None, "555-0100");
    service.save(&mut ana).unwrap();
    assert!(ana.is_persisted());
    let id = ana.id;

    ana.phone = "555-0199".to_string();
    ana.email = Some("ana@example.org".to_string());
    service.save(&mut ana).unwrap();
    assert_eq!(ana.id, id);
    assert_eq!(service.get_contact(id).unwrap(), ana);
    assert_eq!(service.list_contacts().unwrap().len(), 1);
}

#[test]
fn save_of_deleted_contact_is_not_found() {
    let service = ContactService::new(SqliteContactRepository::new(open_pool_in_memory().unwrap()));

    let mut ana = contact("Ana", None, "555-0100");
    service.save(&mut ana).unwrap();
    service.delete_contact(ana.id).unwrap();

    let err = service.save(&mut ana).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn list_fails_whole_when_a_row_cannot_be_mapped() {
    let pool = open_pool_in_memory().unwrap();
    let service = ContactService::new(SqliteContactRepository::new(pool.clone()));
    service
        .create_contact(contact("Good", None, "555-0100"))
        .unwrap();
    pool.get()
        .unwrap()
        .execute(
            "INSERT INTO contacts (id, name, email, phone) VALUES (-1, 'Bad', NULL, '000');",
            [],
        )
        .unwrap();

    let err = service.list_contacts().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
