use super::*;

fn sample_user() -> User {
    User {
        username: "alice01".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        avatar: Some("abc_pic.png".into()),
    }
}

// =============================================================================
// seed_from_user
// =============================================================================

#[test]
fn seed_from_user_copies_identity_fields() {
    let mut fields = FormFields::default();
    seed_from_user(&mut fields, &sample_user());
    assert_eq!(fields.name, "Alice");
    assert_eq!(fields.email, "alice@example.com");
    assert!(fields.password.is_empty());
}

#[test]
fn seed_from_user_overwrites_existing_draft() {
    let mut fields = FormFields { name: "Old".into(), email: "old@b.com".into(), ..FormFields::default() };
    seed_from_user(&mut fields, &sample_user());
    assert_eq!(fields.name, "Alice");
    assert_eq!(fields.email, "alice@example.com");
}

// =============================================================================
// validate_profile_input
// =============================================================================

#[test]
fn validate_profile_input_trims_both_fields() {
    assert_eq!(
        validate_profile_input(" Alice ", " alice@example.com "),
        Ok(("Alice".to_owned(), "alice@example.com".to_owned()))
    );
}

#[test]
fn validate_profile_input_requires_name() {
    assert_eq!(validate_profile_input("  ", "a@b.com"), Err("Name and email are required."));
}

#[test]
fn validate_profile_input_requires_email() {
    assert_eq!(validate_profile_input("Alice", ""), Err("Name and email are required."));
}
