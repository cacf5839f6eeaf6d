use super::*;

fn sample_user() -> User {
    User {
        username: "alice01".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        avatar: None,
    }
}

#[test]
fn default_state_is_signed_out_and_settled() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn signed_in_sets_user_and_clears_loading() {
    let state = AuthState::signed_in(sample_user());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.user.unwrap().name, "Alice");
}
