use super::*;

// =============================================================================
// SignupError
// =============================================================================

#[test]
fn signup_error_already_registered_message() {
    let err = SignupError::AlreadyRegistered;
    assert_eq!(err.to_string(), "email or username already registered");
}

#[test]
fn signup_error_wraps_sqlx_error() {
    let err = SignupError::from(sqlx::Error::RowNotFound);
    assert!(err.to_string().starts_with("database error:"));
}

// =============================================================================
// UserRecord serialization — the wire profile shape.
// =============================================================================

#[test]
fn user_record_serializes_without_id() {
    let record = UserRecord {
        id: Uuid::new_v4(),
        username: "alice01".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        avatar: None,
    };
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("id").is_none());
    assert_eq!(json["username"], "alice01");
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "alice@example.com");
    assert!(json["avatar"].is_null());
}

#[test]
fn user_record_serializes_avatar_filename() {
    let record = UserRecord {
        id: Uuid::new_v4(),
        username: "bob".into(),
        name: "Bob".into(),
        email: "bob@example.com".into(),
        avatar: Some("abc_photo.png".into()),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["avatar"], "abc_photo.png");
}
