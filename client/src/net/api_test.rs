use super::*;

// =============================================================================
// bearer_header
// =============================================================================

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("t1"), "Bearer t1");
}

// =============================================================================
// detail_or
// =============================================================================

#[test]
fn detail_or_uses_server_detail() {
    let body = serde_json::json!({ "detail": "Incorrect email or password" });
    assert_eq!(detail_or(&body, LOGIN_FAILED), "Incorrect email or password");
}

#[test]
fn detail_or_falls_back_when_detail_missing() {
    let body = serde_json::json!({ "error": "nope" });
    assert_eq!(detail_or(&body, LOGIN_FAILED), "Login failed");
}

#[test]
fn detail_or_falls_back_on_null_body() {
    assert_eq!(detail_or(&serde_json::Value::Null, SIGNUP_FAILED), "Signup failed");
}

#[test]
fn detail_or_falls_back_when_detail_not_a_string() {
    let body = serde_json::json!({ "detail": 42 });
    assert_eq!(detail_or(&body, PROFILE_UPDATE_FAILED), "Profile update failed");
}

#[test]
fn detail_or_falls_back_on_empty_detail() {
    let body = serde_json::json!({ "detail": "" });
    assert_eq!(detail_or(&body, PROFILE_FETCH_FAILED), "Session is no longer valid");
}

// =============================================================================
// fallback messages
// =============================================================================

#[test]
fn connect_failed_message_is_fixed() {
    assert_eq!(CONNECT_FAILED, "Could not connect to the server.");
}
