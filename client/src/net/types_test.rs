use super::*;

// =============================================================================
// avatar_url
// =============================================================================

#[test]
fn avatar_url_joins_base_path() {
    assert_eq!(avatar_url("abc_pic.png"), "/avatars/abc_pic.png");
}

#[test]
fn user_avatar_url_none_when_unset() {
    let user = User {
        username: "alice01".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        avatar: None,
    };
    assert_eq!(user.avatar_url(), None);
}

#[test]
fn user_avatar_url_none_when_empty_string() {
    let user = User {
        username: "alice01".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        avatar: Some(String::new()),
    };
    assert_eq!(user.avatar_url(), None);
}

#[test]
fn user_avatar_url_joins_filename() {
    let user = User {
        username: "alice01".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        avatar: Some("abc_pic.png".into()),
    };
    assert_eq!(user.avatar_url(), Some("/avatars/abc_pic.png".into()));
}

// =============================================================================
// serde shapes
// =============================================================================

#[test]
fn user_deserializes_with_missing_avatar() {
    let user: User =
        serde_json::from_str(r#"{"username":"a","name":"A","email":"a@b.com"}"#).unwrap();
    assert_eq!(user.avatar, None);
}

#[test]
fn user_deserializes_with_avatar() {
    let user: User =
        serde_json::from_str(r#"{"username":"a","name":"A","email":"a@b.com","avatar":"f.png"}"#)
            .unwrap();
    assert_eq!(user.avatar.as_deref(), Some("f.png"));
}

#[test]
fn token_response_ignores_extra_fields() {
    let resp: TokenResponse =
        serde_json::from_str(r#"{"access_token":"t1","token_type":"bearer","extra":1}"#).unwrap();
    assert_eq!(resp.access_token, "t1");
    assert_eq!(resp.token_type, "bearer");
}

#[test]
fn token_response_defaults_token_type() {
    let resp: TokenResponse = serde_json::from_str(r#"{"access_token":"t1"}"#).unwrap();
    assert_eq!(resp.access_token, "t1");
    assert!(resp.token_type.is_empty());
}

#[test]
fn signup_request_serializes_all_fields() {
    let req = SignupRequest {
        username: "alice01".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        password: "pw".into(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["username"], "alice01");
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["password"], "pw");
}
