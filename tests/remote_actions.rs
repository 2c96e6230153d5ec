//! The remote-action contract the host chrome depends on: fixed order,
//! stable request ids, play/pause slot tracking the playing state.

use pip_player::pip::{remote_actions, ControlCode};

#[test]
fn playing_catalog_is_back_pause_forward() {
    let actions = remote_actions(true);
    let controls: Vec<_> = actions.iter().map(|a| a.control).collect();
    assert_eq!(
        controls,
        vec![
            ControlCode::SeekBack,
            ControlCode::Pause,
            ControlCode::SeekForward
        ]
    );
    assert_eq!(actions[1].request_code, 7);
}

#[test]
fn paused_catalog_swaps_only_the_middle_slot() {
    let actions = remote_actions(false);
    let controls: Vec<_> = actions.iter().map(|a| a.control).collect();
    assert_eq!(
        controls,
        vec![
            ControlCode::SeekBack,
            ControlCode::Play,
            ControlCode::SeekForward
        ]
    );
    assert_eq!(actions[1].request_code, 6);
}

#[test]
fn seek_request_ids_are_stable_across_states() {
    for playing in [false, true] {
        let actions = remote_actions(playing);
        assert_eq!(actions[0].request_code, 10);
        assert_eq!(actions[2].request_code, 9);
    }
}

#[test]
fn raw_wire_codes_match_the_external_contract() {
    assert_eq!(ControlCode::Play.to_raw(), 1);
    assert_eq!(ControlCode::Pause.to_raw(), 2);
    assert_eq!(ControlCode::SeekBack.to_raw(), 4);
    assert_eq!(ControlCode::SeekForward.to_raw(), 5);
}
