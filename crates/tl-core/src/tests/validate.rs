use crate::validate::{validate_email, validate_list_name, validate_task_fields};

// =========================================================================
// Email Shape
// =========================================================================

#[test]
fn given_plain_address_when_validated_then_ok() {
    assert!(validate_email("a@x.com").is_ok());
}

#[test]
fn given_subdomain_address_when_validated_then_ok() {
    assert!(validate_email("user.name@mail.example.org").is_ok());
}

#[test]
fn given_missing_at_when_validated_then_error() {
    assert!(validate_email("ax.com").is_err());
}

#[test]
fn given_missing_tld_when_validated_then_error() {
    assert!(validate_email("a@xcom").is_err());
}

#[test]
fn given_empty_local_part_when_validated_then_error() {
    assert!(validate_email("@x.com").is_err());
}

#[test]
fn given_trailing_dot_when_validated_then_error() {
    assert!(validate_email("a@x.").is_err());
}

#[test]
fn given_embedded_whitespace_when_validated_then_error() {
    assert!(validate_email("a b@x.com").is_err());
}

// =========================================================================
// Name Fields
// =========================================================================

#[test]
fn given_blank_list_name_when_validated_then_error() {
    assert!(validate_list_name("   ").is_err());
    assert!(validate_list_name("").is_err());
}

#[test]
fn given_list_name_when_validated_then_ok() {
    assert!(validate_list_name("Groceries").is_ok());
}

#[test]
fn given_blank_task_name_when_validated_then_error() {
    assert!(validate_task_fields("  ", "buy milk").is_err());
}

#[test]
fn given_blank_task_description_when_validated_then_error() {
    assert!(validate_task_fields("Milk", "").is_err());
}

#[test]
fn given_both_task_fields_when_validated_then_ok() {
    assert!(validate_task_fields("Milk", "2 litres, whole").is_ok());
}
