use crate::{CoreError, Registration};

fn registration(name: &str, email: &str, password: &str) -> Registration {
    Registration {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_normalized_trims_name_and_email() {
    let normalized = registration("  Ada Lovelace ", " ada@example.com ", "secret")
        .normalized()
        .unwrap();

    assert_eq!(normalized.name, "Ada Lovelace");
    assert_eq!(normalized.email, "ada@example.com");
}

#[test]
fn test_blank_name_is_rejected() {
    let result = registration("   ", "ada@example.com", "secret").normalized();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "name"
    ));
}

#[test]
fn test_email_without_at_sign_is_rejected() {
    let result = registration("Ada", "ada.example.com", "secret").normalized();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "email"
    ));
}

#[test]
fn test_empty_password_is_rejected() {
    let result = registration("Ada", "ada@example.com", "").normalized();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "password"
    ));
}

#[test]
fn test_debug_output_hides_password() {
    let rendered = format!("{:?}", registration("Ada", "ada@example.com", "hunter2"));

    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("ada@example.com"));
}
