use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    let a = generate_token();
    let b = generate_token();
    assert_ne!(a, b);
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serialize_round_trip() {
    let user = SessionUser {
        id: Uuid::nil(),
        username: "alice01".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        avatar: Some("pic.png".into()),
    };
    let json = serde_json::to_string(&user).unwrap();
    let restored: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored["username"], "alice01");
    assert_eq!(restored["email"], "alice@example.com");
    assert_eq!(restored["avatar"], "pic.png");
}

#[test]
fn session_user_serialize_none_avatar() {
    let user = SessionUser {
        id: Uuid::nil(),
        username: "bob".into(),
        name: "Bob".into(),
        email: "bob@example.com".into(),
        avatar: None,
    };
    let json = serde_json::to_string(&user).unwrap();
    let restored: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(restored["avatar"].is_null());
}
