use crate::ServerState;

use googletest::assert_that;
use googletest::prelude::eq;

// =========================================================================
// Status Classification
// =========================================================================

#[test]
fn given_2xx_status_when_classified_then_online() {
    for status in [200, 201, 204, 299] {
        assert_that!(ServerState::from_status(status), eq(ServerState::Online));
    }
}

#[test]
fn given_5xx_status_when_classified_then_restarting() {
    for status in [500, 502, 503, 504, 599] {
        assert_that!(
            ServerState::from_status(status),
            eq(ServerState::Restarting)
        );
    }
}

#[test]
fn given_status_above_5xx_range_when_classified_then_restarting() {
    assert_that!(ServerState::from_status(600), eq(ServerState::Restarting));
}

#[test]
fn given_other_status_when_classified_then_offline() {
    for status in [100, 301, 304, 400, 401, 403, 404, 429, 499] {
        assert_that!(ServerState::from_status(status), eq(ServerState::Offline));
    }
}

// =========================================================================
// Predicates
// =========================================================================

#[test]
fn given_each_state_when_checking_availability_then_only_online_is_available() {
    assert!(ServerState::Online.is_fully_available());
    assert!(!ServerState::Restarting.is_fully_available());
    assert!(!ServerState::Waking.is_fully_available());
    assert!(!ServerState::Offline.is_fully_available());
}

#[test]
fn given_each_state_when_checking_retry_then_only_offline_allows_it() {
    assert!(!ServerState::Online.allows_manual_retry());
    assert!(!ServerState::Restarting.allows_manual_retry());
    assert!(!ServerState::Waking.allows_manual_retry());
    assert!(ServerState::Offline.allows_manual_retry());
}

#[test]
fn given_default_state_then_waking() {
    assert_that!(ServerState::default(), eq(ServerState::Waking));
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn given_state_when_serialized_then_lowercase_string() {
    // Given
    let states = [
        (ServerState::Online, "\"online\""),
        (ServerState::Restarting, "\"restarting\""),
        (ServerState::Waking, "\"waking\""),
        (ServerState::Offline, "\"offline\""),
    ];

    for (state, expected) in states {
        // When
        let json = serde_json::to_string(&state).unwrap();

        // Then
        assert_that!(json.as_str(), eq(expected));
        assert_that!(format!("\"{state}\"").as_str(), eq(expected));
    }
}

#[test]
fn given_lowercase_string_when_deserialized_then_state() {
    let state: ServerState = serde_json::from_str("\"restarting\"").unwrap();
    assert_that!(state, eq(ServerState::Restarting));
}

#[test]
fn given_capitalized_string_when_deserialized_then_error() {
    let result = serde_json::from_str::<ServerState>("\"Online\"");
    assert!(result.is_err());
}
