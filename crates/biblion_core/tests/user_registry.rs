use biblion_core::{ServiceError, UserService};

#[test]
fn add_and_get_roundtrip() {
    let mut registry = UserService::new();
    registry
        .add_user("u-100", "Marlon Delgado", "marlon@example.org")
        .unwrap();

    let user = registry.user_by_id("u-100").unwrap();
    assert_eq!(user.id, "u-100");
    assert_eq!(user.name, "Marlon Delgado");
    assert_eq!(user.email, "marlon@example.org");
    assert!(user.register_date > 0);
}

#[test]
fn add_with_register_date_keeps_supplied_date() {
    let mut registry = UserService::new();
    registry
        .add_user_with_register_date("u-100", "Marlon Delgado", "marlon@example.org", 1_500)
        .unwrap();

    let user = registry.user_by_id("u-100").unwrap();
    assert_eq!(user.register_date, 1_500);
}

#[test]
fn add_rejects_blank_fields_and_stores_nothing() {
    let mut registry = UserService::new();

    let err = registry.add_user("", "Marlon Delgado", "marlon@example.org").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));

    let err = registry.add_user("u-100", "   ", "marlon@example.org").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));

    let err = registry.add_user("u-100", "Marlon Delgado", "").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));

    let err = registry
        .add_user_with_register_date(" ", "Marlon Delgado", "marlon@example.org", 1_500)
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));

    assert!(registry.users().is_empty());
}

#[test]
fn get_missing_user_is_not_found_and_names_the_id() {
    let registry = UserService::new();

    let err = registry.user_by_id("u-404").unwrap_err();
    assert!(matches!(&err, ServiceError::NotFound(message) if message.contains("u-404")));
}

#[test]
fn get_rejects_blank_id() {
    let registry = UserService::new();

    let err = registry.user_by_id("  ").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));
}

#[test]
fn update_email_replaces_only_the_email() {
    let mut registry = UserService::new();
    registry
        .add_user("u-100", "Marlon Delgado", "marlon@example.org")
        .unwrap();

    registry
        .update_user_email("u-100", "marlon.delgado@example.org")
        .unwrap();

    let user = registry.user_by_id("u-100").unwrap();
    assert_eq!(user.email, "marlon.delgado@example.org");
    assert_eq!(user.name, "Marlon Delgado");
}

#[test]
fn update_name_replaces_only_the_name() {
    let mut registry = UserService::new();
    registry
        .add_user("u-100", "Marlon Delgado", "marlon@example.org")
        .unwrap();

    registry
        .update_user_name("u-100", "Marlon Xavier Delgado Ruiz")
        .unwrap();

    let user = registry.user_by_id("u-100").unwrap();
    assert_eq!(user.name, "Marlon Xavier Delgado Ruiz");
    assert_eq!(user.email, "marlon@example.org");
}

#[test]
fn updates_reject_blank_values() {
    let mut registry = UserService::new();
    registry
        .add_user("u-100", "Marlon Delgado", "marlon@example.org")
        .unwrap();

    let err = registry.update_user_email("u-100", "   ").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));

    let err = registry.update_user_name("u-100", "").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));

    let err = registry.update_user_email("", "new@example.org").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));

    let user = registry.user_by_id("u-100").unwrap();
    assert_eq!(user.name, "Marlon Delgado");
    assert_eq!(user.email, "marlon@example.org");
}

#[test]
fn updates_on_missing_user_surface_the_lookup_not_found() {
    let mut registry = UserService::new();

    let err = registry.update_user_email("u-404", "new@example.org").unwrap_err();
    assert!(matches!(&err, ServiceError::NotFound(message) if message.contains("u-404")));

    let err = registry.update_user_name("u-404", "New Name").unwrap_err();
    assert!(matches!(&err, ServiceError::NotFound(message) if message.contains("u-404")));
}

#[test]
fn remove_user_then_lookup_fails() {
    let mut registry = UserService::new();
    registry
        .add_user("u-100", "Marlon Delgado", "marlon@example.org")
        .unwrap();

    registry.remove_user("u-100").unwrap();

    assert!(registry.users().is_empty());
    let err = registry.user_by_id("u-100").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn remove_missing_user_is_not_found() {
    let mut registry = UserService::new();

    let err = registry.remove_user("u-404").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn list_preserves_insertion_order() {
    let mut registry = UserService::new();
    registry
        .add_user("u-100", "Marlon Delgado", "marlon@example.org")
        .unwrap();
    registry
        .add_user("u-200", "Kevin Sanchez", "kevin@example.org")
        .unwrap();

    let ids: Vec<&str> = registry.users().iter().map(|user| user.id.as_str()).collect();
    assert_eq!(ids, vec!["u-100", "u-200"]);
}

#[test]
fn duplicate_id_is_accepted_and_lookup_returns_first_match() {
    let mut registry = UserService::new();
    registry
        .add_user("u-100", "Marlon Delgado", "marlon@example.org")
        .unwrap();
    registry
        .add_user("u-100", "Someone Else", "other@example.org")
        .unwrap();

    assert_eq!(registry.users().len(), 2);
    let user = registry.user_by_id("u-100").unwrap();
    assert_eq!(user.name, "Marlon Delgado");
}
