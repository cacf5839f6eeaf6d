use super::*;

fn fields(name: &str, email: &str, password: &str, confirm: &str) -> FormFields {
    FormFields {
        name: name.into(),
        email: email.into(),
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

#[test]
fn validate_signup_input_builds_request() {
    let req = validate_signup_input(&fields(" Alice ", " alice@example.com ", "pw", "pw")).unwrap();
    assert_eq!(req.username, "Alice");
    assert_eq!(req.name, "Alice");
    assert_eq!(req.email, "alice@example.com");
    assert_eq!(req.password, "pw");
}

#[test]
fn validate_signup_input_requires_all_fields() {
    assert_eq!(
        validate_signup_input(&fields("", "a@b.com", "pw", "pw")),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_signup_input(&fields("Alice", " ", "pw", "pw")),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_signup_input(&fields("Alice", "a@b.com", "", "")),
        Err("All fields are required.")
    );
}

#[test]
fn validate_signup_input_mismatched_passwords_block_submission() {
    assert_eq!(
        validate_signup_input(&fields("Alice", "a@b.com", "pw1", "pw2")),
        Err("Passwords do not match!")
    );
}

#[test]
fn validate_signup_input_missing_confirmation_is_a_mismatch() {
    assert_eq!(
        validate_signup_input(&fields("Alice", "a@b.com", "pw", "")),
        Err("Passwords do not match!")
    );
}
