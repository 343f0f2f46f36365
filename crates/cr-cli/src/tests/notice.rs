use crate::notice::{RETRY_ACTION, STILL_STARTING_AFTER};
use crate::{StatusNotice, WakingTimer, indicator_label};

use cr_health::ServerState;

use std::time::{Duration, Instant};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, none, some};

// =========================================================================
// Indicator
// =========================================================================

#[test]
fn given_online_when_labelled_then_registry_online() {
    assert_that!(indicator_label(ServerState::Online), eq("Registry Online"));
}

#[test]
fn given_not_online_when_labelled_then_registry_offline() {
    for state in [
        ServerState::Restarting,
        ServerState::Waking,
        ServerState::Offline,
    ] {
        assert_that!(indicator_label(state), eq("Registry Offline"));
    }
}

// =========================================================================
// Notices
// =========================================================================

#[test]
fn given_online_when_notice_requested_then_none() {
    let notice = StatusNotice::for_state(ServerState::Online, Duration::ZERO);
    assert_that!(notice, none());
}

#[test]
fn given_waking_briefly_when_notice_requested_then_no_hint() {
    // When
    let notice = StatusNotice::for_state(ServerState::Waking, Duration::from_secs(29)).unwrap();

    // Then
    assert_that!(notice.heading, eq("Waking the server"));
    assert_that!(notice.hint, none());
    assert_that!(notice.action, none());
}

#[test]
fn given_waking_for_30s_when_notice_requested_then_still_starting_hint() {
    // When
    let notice = StatusNotice::for_state(ServerState::Waking, STILL_STARTING_AFTER).unwrap();

    // Then
    assert_that!(notice.hint, some(contains_substring("Still starting")));
}

#[test]
fn given_restarting_when_notice_requested_then_no_retry() {
    // When
    let notice = StatusNotice::for_state(ServerState::Restarting, Duration::ZERO).unwrap();

    // Then
    assert_that!(notice.heading, eq("Server is restarting"));
    assert_that!(notice.action, none());
}

#[test]
fn given_offline_when_notice_requested_then_retry_action() {
    // When
    let notice = StatusNotice::for_state(ServerState::Offline, Duration::ZERO).unwrap();

    // Then
    assert_that!(notice.heading, eq("Could not reach the server"));
    assert_that!(notice.action, some(eq(RETRY_ACTION)));
}

#[test]
fn given_any_state_when_notice_requested_then_retry_only_for_offline() {
    for state in [
        ServerState::Online,
        ServerState::Restarting,
        ServerState::Waking,
        ServerState::Offline,
    ] {
        let has_retry = StatusNotice::for_state(state, Duration::from_secs(60))
            .and_then(|notice| notice.action)
            .is_some();
        assert_that!(has_retry, eq(state.allows_manual_retry()));
    }
}

// =========================================================================
// Waking Timer
// =========================================================================

#[test]
fn given_continuous_waking_when_observed_then_measures_from_first() {
    // Given
    let mut timer = WakingTimer::new();
    let start = Instant::now();

    // When
    let first = timer.observe(ServerState::Waking, start);
    let later = timer.observe(ServerState::Waking, start + Duration::from_secs(31));

    // Then
    assert_that!(first, eq(Duration::ZERO));
    assert_that!(later, eq(Duration::from_secs(31)));
}

#[test]
fn given_waking_interrupted_when_observed_again_then_restarts_count() {
    // Given
    let mut timer = WakingTimer::new();
    let start = Instant::now();
    timer.observe(ServerState::Waking, start);

    // When
    let interrupted = timer.observe(ServerState::Restarting, start + Duration::from_secs(20));
    let resumed = timer.observe(ServerState::Waking, start + Duration::from_secs(40));
    let after = timer.observe(ServerState::Waking, start + Duration::from_secs(45));

    // Then
    assert_that!(interrupted, eq(Duration::ZERO));
    assert_that!(resumed, eq(Duration::ZERO));
    assert_that!(after, eq(Duration::from_secs(5)));
}
