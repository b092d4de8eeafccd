//! Tests for error types.
//!
//! Validates display formatting and that every message carries enough
//! context to act on from a log line alone.

use dockmap::Error;

// =============================================================================
// Name Format Error Tests
// =============================================================================

#[test]
fn test_unmanaged_name_display() {
    let err = Error::UnmanagedName {
        name: "/registry-mirror".to_string(),
    };
    let msg = format!("{}", err);

    assert!(msg.contains("/registry-mirror"), "should include the name");
    assert!(msg.contains("not managed"), "should state the problem");
}

#[test]
fn test_truncated_name_display() {
    let err = Error::TruncatedName {
        name: "/pod_bar.1_foo_ns".to_string(),
        fields: 4,
        expected: 6,
    };
    let msg = format!("{}", err);

    assert!(msg.contains("/pod_bar.1_foo_ns"), "should include the name");
    assert!(msg.contains('4'), "should include the actual count");
    assert!(msg.contains('6'), "should include the expected count");
}

#[test]
fn test_invalid_attempt_display() {
    let err = Error::InvalidAttempt {
        name: "/pod_bar.1_foo_ns_u_x".to_string(),
        value: "x".to_string(),
    };
    let msg = format!("{}", err);

    assert!(msg.contains("'x'"), "should include the bad value");
    assert!(msg.contains("attempt"), "should name the field");
}

#[test]
fn test_empty_name_field_display() {
    let err = Error::EmptyNameField {
        name: "/pod_bar.1__ns_u_0".to_string(),
        field: "pod name",
    };
    let msg = format!("{}", err);

    assert!(msg.contains("empty pod name"), "should name the empty field");
    assert!(msg.contains("/pod_bar.1__ns_u_0"), "should include the name");
}

// =============================================================================
// Composite String Error Tests
// =============================================================================

#[test]
fn test_invalid_pod_full_name_display() {
    let err = Error::InvalidPodFullName("a_b_c".to_string());
    let msg = format!("{}", err);

    assert!(msg.contains("a_b_c"), "should include the input");
    assert!(msg.contains("pod full name"), "should name the format");
}

#[test]
fn test_invalid_container_id_display() {
    let err = Error::InvalidContainerId("bare-id".to_string());
    let msg = format!("{}", err);

    assert!(msg.contains("bare-id"), "should include the input");
    assert!(msg.contains("container id"), "should name the format");
}

// =============================================================================
// Listing Error Tests
// =============================================================================

#[test]
fn test_listing_display() {
    let err = Error::Listing("connection refused".to_string());
    let msg = format!("{}", err);

    assert!(msg.contains("listing failed"), "should state the phase");
    assert!(msg.contains("connection refused"), "should include the cause");
}

#[test]
fn test_errors_are_debug_formattable() {
    let err = Error::UnmanagedName {
        name: "x".to_string(),
    };
    assert!(format!("{:?}", err).contains("UnmanagedName"));
}
