use contacts_core::db::migrations::latest_version;
use contacts_core::db::{open_db_in_memory, seed_contacts, truncate_contacts};
use contacts_core::{
    Contact, ContactId, ContactRepository, ContactService, ContactValidationError, NewContact,
    RepoError, SqliteContactRepository,
};
use rusqlite::Connection;

#[test]
fn create_assigns_ascending_ids_starting_at_one() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();

    let created = repo
        .create(&NewContact::new("Baloney", "McGee"))
        .unwrap();
    assert_eq!(
        created,
        vec![Contact {
            id: ContactId::new(1),
            first_name: "Baloney".to_string(),
            last_name: "McGee".to_string(),
        }]
    );

    let second = repo.create(&NewContact::new("Salami", "McGee")).unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, ContactId::new(2));
}

#[test]
fn create_rejects_malformed_input_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();

    let err = repo
        .create(&NewContact::new("", "McGee"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ContactValidationError::MissingFirstName)
    ));

    let err = repo
        .create(&NewContact::new("Baloney", "   "))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ContactValidationError::MissingLastName)
    ));

    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn store_rejects_blank_names_below_the_validation_layer() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO contacts (first_name, last_name) VALUES ('', 'McGee');",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn find_all_on_empty_table_returns_empty_sequence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();

    assert_eq!(repo.find_all().unwrap(), Vec::new());
}

#[test]
fn find_all_returns_seeded_contacts_in_ascending_id_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    seed_contacts(&conn).unwrap();

    let all = repo.find_all().unwrap();
    assert_eq!(
        all,
        vec![
            Contact {
                id: ContactId::new(1),
                first_name: "Jared".to_string(),
                last_name: "Grippe".to_string(),
            },
            Contact {
                id: ContactId::new(2),
                first_name: "Tanner".to_string(),
                last_name: "Welsh".to_string(),
            },
            Contact {
                id: ContactId::new(3),
                first_name: "NeEddra".to_string(),
                last_name: "James".to_string(),
            },
        ]
    );
}

#[test]
fn find_by_id_returns_the_matching_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    seed_contacts(&conn).unwrap();

    let contact = repo.find_by_id(ContactId::new(2)).unwrap().unwrap();
    assert_eq!(
        contact,
        Contact {
            id: ContactId::new(2),
            first_name: "Tanner".to_string(),
            last_name: "Welsh".to_string(),
        }
    );
}

#[test]
fn find_by_id_for_missing_id_returns_none_not_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    seed_contacts(&conn).unwrap();

    assert!(repo.find_by_id(ContactId::new(7)).unwrap().is_none());
}

#[test]
fn by_id_operations_reject_non_numeric_identifier_text() {
    let err = ContactId::parse("Whatever").unwrap_err();
    assert!(matches!(err, ContactValidationError::InvalidId(_)));

    let err = ContactId::parse("Banana").unwrap_err();
    assert!(matches!(err, ContactValidationError::InvalidId(_)));
}

#[test]
fn destroy_removes_exactly_one_row_without_renumbering() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    seed_contacts(&conn).unwrap();

    let length_before_destroy = repo.find_all().unwrap().len();
    let removed = repo.destroy(ContactId::new(2)).unwrap();
    assert_eq!(removed, 1);

    let remaining = repo.find_all().unwrap();
    assert_eq!(remaining.len(), length_before_destroy - 1);

    let ids: Vec<i64> = remaining.iter().map(|contact| contact.id.value()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn destroy_of_missing_id_is_zero_effect_success() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    seed_contacts(&conn).unwrap();

    let removed = repo.destroy(ContactId::new(7)).unwrap();
    assert_eq!(removed, 0);
    assert_eq!(repo.find_all().unwrap().len(), 3);
}

#[test]
fn truncate_resets_id_assignment_to_one() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    seed_contacts(&conn).unwrap();

    truncate_contacts(&conn).unwrap();
    assert!(repo.find_all().unwrap().is_empty());

    let created = repo.create(&NewContact::new("Baloney", "McGee")).unwrap();
    assert_eq!(created[0].id, ContactId::new(1));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::try_new(&conn).unwrap();
    let service = ContactService::new(repo);

    let created = service.add_contact("Baloney", "McGee").unwrap();
    let id = created[0].id;

    let fetched = service.find_by_id(id).unwrap().unwrap();
    assert_eq!(fetched.first_name, "Baloney");

    assert_eq!(service.find_all().unwrap().len(), 1);
    assert_eq!(service.destroy(id).unwrap(), 1);
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteContactRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_contacts_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteContactRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("contacts"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE contacts (
            id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteContactRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "contacts",
            column: "last_name"
        })
    ));
}
