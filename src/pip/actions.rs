//! Remote transport actions rendered by the host chrome around the
//! miniature window and delivered back as control signals.

/// Symbolic control codes carried in a control signal's payload.
///
/// The raw values are part of the external contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCode {
    Play,
    Pause,
    SeekBack,
    SeekForward,
}

impl ControlCode {
    pub fn to_raw(self) -> i32 {
        match self {
            ControlCode::Play => 1,
            ControlCode::Pause => 2,
            ControlCode::SeekBack => 4,
            ControlCode::SeekForward => 5,
        }
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(ControlCode::Play),
            2 => Some(ControlCode::Pause),
            4 => Some(ControlCode::SeekBack),
            5 => Some(ControlCode::SeekForward),
            _ => None,
        }
    }
}

// Request ids let the host replace a pending action in place instead of
// stacking duplicates, so they must stay stable across recomputation.
pub const REQUEST_PLAY: u32 = 6;
pub const REQUEST_PAUSE: u32 = 7;
pub const REQUEST_SEEK_FORWARD: u32 = 9;
pub const REQUEST_SEEK_BACK: u32 = 10;

/// One transport action exposed to the host chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteAction {
    pub icon: &'static str,
    pub title: &'static str,
    pub request_code: u32,
    pub control: ControlCode,
}

/// Build the ordered action set for the current playing state.
///
/// Always exactly three actions, rendered left to right in this order:
/// seek-back, play-or-pause, seek-forward. Rebuilt on every parameter
/// submission so the middle slot tracks the playing state.
pub fn remote_actions(is_playing: bool) -> [RemoteAction; 3] {
    let play_pause = if is_playing {
        RemoteAction {
            icon: "⏸",
            title: "Pause",
            request_code: REQUEST_PAUSE,
            control: ControlCode::Pause,
        }
    } else {
        RemoteAction {
            icon: "⏵",
            title: "Play",
            request_code: REQUEST_PLAY,
            control: ControlCode::Play,
        }
    };

    [
        RemoteAction {
            icon: "⏪",
            title: "Seek back",
            request_code: REQUEST_SEEK_BACK,
            control: ControlCode::SeekBack,
        },
        play_pause,
        RemoteAction {
            icon: "⏩",
            title: "Seek forward",
            request_code: REQUEST_SEEK_FORWARD,
            control: ControlCode::SeekForward,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playing_yields_pause_in_the_middle() {
        let actions = remote_actions(true);
        assert_eq!(actions[0].control, ControlCode::SeekBack);
        assert_eq!(actions[1].control, ControlCode::Pause);
        assert_eq!(actions[1].request_code, REQUEST_PAUSE);
        assert_eq!(actions[2].control, ControlCode::SeekForward);
    }

    #[test]
    fn paused_yields_play_in_the_middle() {
        let actions = remote_actions(false);
        assert_eq!(actions[1].control, ControlCode::Play);
        assert_eq!(actions[1].request_code, REQUEST_PLAY);
    }

    #[test]
    fn seek_request_ids_do_not_depend_on_playing_state() {
        for playing in [false, true] {
            let actions = remote_actions(playing);
            assert_eq!(actions[0].request_code, REQUEST_SEEK_BACK);
            assert_eq!(actions[2].request_code, REQUEST_SEEK_FORWARD);
        }
    }

    #[test]
    fn raw_codes_round_trip() {
        for code in [
            ControlCode::Play,
            ControlCode::Pause,
            ControlCode::SeekBack,
            ControlCode::SeekForward,
        ] {
            assert_eq!(ControlCode::from_raw(code.to_raw()), Some(code));
        }
        assert_eq!(ControlCode::from_raw(0), None);
        assert_eq!(ControlCode::from_raw(3), None);
    }
}
