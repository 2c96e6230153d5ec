//! Inbound control-signal channel: the typed envelope delivered by the
//! host chrome and the router that turns it into player commands.

use log::debug;

use super::actions::ControlCode;
use crate::player::Playback;

/// Action scope accepted by this app. Signals carrying any other scope
/// come from other apps or stale registrations and are ignored outright.
pub const CONTROL_ACTION: &str = "pip_player.PLAYER_CONTROL";

/// Fixed seek offset applied by the seek-back/seek-forward actions.
pub const SEEK_STEP_MS: u64 = 10_000;

/// The envelope of one external control signal: the action scope it was
/// sent under and the raw control code from its payload, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSignal {
    pub action: String,
    pub code: Option<i32>,
}

impl ControlSignal {
    /// A well-formed signal in this app's scope.
    pub fn new(code: ControlCode) -> Self {
        Self {
            action: CONTROL_ACTION.to_owned(),
            code: Some(code.to_raw()),
        }
    }
}

/// Apply a control signal to the player.
///
/// A signal outside [`CONTROL_ACTION`] or with a missing/unknown code is a
/// no-op, logged at debug level at most. A recognized code applies exactly
/// one effect; play/pause are idempotent and seek-back clamps at zero.
/// Seeking past the end is the player's own responsibility and is not
/// re-validated here.
pub fn route(signal: &ControlSignal, player: &mut dyn Playback) {
    if signal.action != CONTROL_ACTION {
        debug!("ignoring control signal with foreign scope {:?}", signal.action);
        return;
    }

    let code = match signal.code.and_then(ControlCode::from_raw) {
        Some(code) => code,
        None => {
            debug!("ignoring control signal with unknown code {:?}", signal.code);
            return;
        }
    };

    match code {
        ControlCode::Play => player.set_play_when_ready(true),
        ControlCode::Pause => player.set_play_when_ready(false),
        ControlCode::SeekBack => {
            let target = player.position_ms().saturating_sub(SEEK_STEP_MS);
            player.seek_to(target);
        }
        ControlCode::SeekForward => {
            let target = player.position_ms() + SEEK_STEP_MS;
            player.seek_to(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::VideoSize;

    struct TestPlayer {
        playing: bool,
        position_ms: u64,
        seeks: Vec<u64>,
        play_calls: u32,
    }

    impl TestPlayer {
        fn at(position_ms: u64) -> Self {
            Self {
                playing: false,
                position_ms,
                seeks: Vec::new(),
                play_calls: 0,
            }
        }
    }

    impl Playback for TestPlayer {
        fn is_playing(&self) -> bool {
            self.playing
        }

        fn video_size(&self) -> Option<VideoSize> {
            None
        }

        fn position_ms(&self) -> u64 {
            self.position_ms
        }

        fn set_play_when_ready(&mut self, play: bool) {
            self.playing = play;
            self.play_calls += 1;
        }

        fn seek_to(&mut self, position_ms: u64) {
            self.position_ms = position_ms;
            self.seeks.push(position_ms);
        }
    }

    #[test]
    fn foreign_scope_never_touches_the_player() {
        let mut player = TestPlayer::at(5_000);
        for code in [None, Some(1), Some(2), Some(4), Some(5), Some(99)] {
            let signal = ControlSignal {
                action: "some.other.app.CONTROL".to_owned(),
                code,
            };
            route(&signal, &mut player);
        }
        assert_eq!(player.play_calls, 0);
        assert!(player.seeks.is_empty());
    }

    #[test]
    fn unknown_or_missing_code_is_ignored() {
        let mut player = TestPlayer::at(5_000);
        route(
            &ControlSignal {
                action: CONTROL_ACTION.to_owned(),
                code: None,
            },
            &mut player,
        );
        route(
            &ControlSignal {
                action: CONTROL_ACTION.to_owned(),
                code: Some(3),
            },
            &mut player,
        );
        assert_eq!(player.play_calls, 0);
        assert!(player.seeks.is_empty());
    }

    #[test]
    fn play_is_idempotent() {
        let mut player = TestPlayer::at(0);
        player.playing = true;
        route(&ControlSignal::new(ControlCode::Play), &mut player);
        assert!(player.playing);
        assert!(player.seeks.is_empty());
    }

    #[test]
    fn pause_stops_playback() {
        let mut player = TestPlayer::at(0);
        player.playing = true;
        route(&ControlSignal::new(ControlCode::Pause), &mut player);
        assert!(!player.playing);
    }

    #[test]
    fn seek_back_clamps_at_zero() {
        let mut player = TestPlayer::at(5_000);
        route(&ControlSignal::new(ControlCode::SeekBack), &mut player);
        assert_eq!(player.seeks, vec![0]);
    }

    #[test]
    fn seek_back_steps_by_fixed_offset() {
        let mut player = TestPlayer::at(42_000);
        route(&ControlSignal::new(ControlCode::SeekBack), &mut player);
        assert_eq!(player.seeks, vec![32_000]);
    }

    #[test]
    fn seek_forward_steps_by_fixed_offset() {
        let mut player = TestPlayer::at(42_000);
        route(&ControlSignal::new(ControlCode::SeekForward), &mut player);
        assert_eq!(player.seeks, vec![52_000]);
    }
}
