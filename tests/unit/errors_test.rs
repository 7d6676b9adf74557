use tabflow::types::errors::*;

// === TabHostError Tests ===

#[test]
fn tab_host_error_no_active_tab_display() {
    let err = TabHostError::NoActiveTab(42);
    assert_eq!(err.to_string(), "No active tab in window 42");
}

#[test]
fn tab_host_error_tab_not_found_display() {
    let err = TabHostError::TabNotFound(7);
    assert_eq!(err.to_string(), "Tab not found: 7");
}

#[test]
fn tab_host_error_call_failed_display() {
    let err = TabHostError::CallFailed("tab was dragged".to_string());
    assert_eq!(err.to_string(), "Platform call failed: tab was dragged");
}

#[test]
fn tab_host_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabHostError::NoActiveTab(1));
    assert!(err.source().is_none());
}

// === PreferenceError Tests ===

#[test]
fn preference_error_display_variants() {
    assert_eq!(
        PreferenceError::IoError("disk full".to_string()).to_string(),
        "Preference I/O error: disk full"
    );
    assert_eq!(
        PreferenceError::SerializationError("bad json".to_string()).to_string(),
        "Preference serialization error: bad json"
    );
    assert_eq!(
        PreferenceError::InvalidDelay("-1".to_string()).to_string(),
        "Invalid delay value: -1"
    );
}

#[test]
fn preference_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(PreferenceError::InvalidDelay("abc".to_string()));
    assert!(err.source().is_none());
}
