//! Unit tests for the request state accessors

use ai_map_generator::{MapStyle, Phase, RequestState};

#[test]
fn test_default_is_idle() {
    let state = RequestState::default();
    assert_eq!(state, RequestState::Idle);
    assert_eq!(state.phase(), Phase::Idle);
    assert!(!state.is_submitting());
    assert!(!state.is_terminal());
}

#[test]
fn test_submitting_exposes_only_in_flight_data() {
    let state = RequestState::Submitting {
        prompt: "polar ice".to_string(),
        style: MapStyle::Minimalist,
    };

    assert_eq!(state.phase(), Phase::Submitting);
    assert!(state.is_submitting());
    assert!(!state.is_terminal());
    assert_eq!(state.in_flight(), Some(("polar ice", MapStyle::Minimalist)));
    assert_eq!(state.result_url(), None);
    assert_eq!(state.error_message(), None);
}

#[test]
fn test_terminal_accessors() {
    let succeeded = RequestState::Succeeded {
        result_url: "https://x/img.png".to_string(),
    };
    assert_eq!(succeeded.phase(), Phase::Succeeded);
    assert!(succeeded.is_terminal());
    assert_eq!(succeeded.result_url(), Some("https://x/img.png"));
    assert_eq!(succeeded.error_message(), None);
    assert_eq!(succeeded.in_flight(), None);

    let failed = RequestState::Failed {
        message: "Rate limit exceeded".to_string(),
    };
    assert_eq!(failed.phase(), Phase::Failed);
    assert!(failed.is_terminal());
    assert_eq!(failed.error_message(), Some("Rate limit exceeded"));
    assert_eq!(failed.result_url(), None);
}

#[test]
fn test_phase_display() {
    assert_eq!(Phase::Idle.to_string(), "idle");
    assert_eq!(Phase::Submitting.to_string(), "submitting");
    assert_eq!(Phase::Succeeded.to_string(), "succeeded");
    assert_eq!(Phase::Failed.to_string(), "failed");
}
