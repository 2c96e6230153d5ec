use std::time::Instant;

/// Natural content dimensions reported by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSize {
    pub width: u32,
    pub height: u32,
}

impl VideoSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Capability surface of the playback engine as seen by the PiP layer.
///
/// The PiP coordination code never creates or releases the player; it holds
/// a borrow for the duration of a single dispatch and issues commands that
/// are assumed to no-op on invalid input rather than fail.
pub trait Playback {
    fn is_playing(&self) -> bool;
    /// Natural content dimensions, `None` until the stream reports them.
    /// Degenerate (zero-area) sizes are never returned.
    fn video_size(&self) -> Option<VideoSize>;
    fn position_ms(&self) -> u64;
    /// Request playback to start or stop. Idempotent.
    fn set_play_when_ready(&mut self, play: bool);
    fn seek_to(&mut self, position_ms: u64);
}

/// Wall-clock-driven stand-in for a real media pipeline.
///
/// Extrapolates the playhead between frames while playing and pauses itself
/// at end of content. The shell calls [`SimulatedPlayer::tick`] once per
/// frame; everything else goes through the [`Playback`] trait.
#[derive(Debug)]
pub struct SimulatedPlayer {
    playing: bool,
    position_ms: u64,
    duration_ms: u64,
    video_size: Option<VideoSize>,
    last_tick: Option<Instant>,
}

impl SimulatedPlayer {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            playing: false,
            position_ms: 0,
            duration_ms,
            video_size: None,
            last_tick: None,
        }
    }

    /// Resume from a position persisted by a previous mount.
    pub fn with_position(mut self, position_ms: u64) -> Self {
        self.position_ms = position_ms.min(self.duration_ms);
        self
    }

    /// Called once the simulated stream has "probed" its dimensions.
    /// Zero-area sizes are treated as still unknown.
    pub fn set_video_size(&mut self, width: u32, height: u32) {
        self.video_size = if width > 0 && height > 0 {
            Some(VideoSize::new(width, height))
        } else {
            None
        };
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Advance the playhead. Pauses at end of content.
    pub fn tick(&mut self, now: Instant) {
        let elapsed_ms = match self.last_tick {
            Some(last) => now.duration_since(last).as_millis() as u64,
            None => 0,
        };
        self.last_tick = Some(now);

        if !self.playing {
            return;
        }

        self.position_ms = (self.position_ms + elapsed_ms).min(self.duration_ms);
        if self.position_ms >= self.duration_ms {
            self.playing = false;
        }
    }
}

impl Playback for SimulatedPlayer {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn video_size(&self) -> Option<VideoSize> {
        self.video_size
    }

    fn position_ms(&self) -> u64 {
        self.position_ms
    }

    fn set_play_when_ready(&mut self, play: bool) {
        if play && self.position_ms >= self.duration_ms {
            // Replay from the start rather than sticking at the end.
            self.position_ms = 0;
        }
        self.playing = play;
    }

    fn seek_to(&mut self, position_ms: u64) {
        self.position_ms = position_ms.min(self.duration_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn position_advances_only_while_playing() {
        let mut player = SimulatedPlayer::new(60_000);
        let start = Instant::now();
        player.tick(start);
        player.tick(start + Duration::from_millis(500));
        assert_eq!(player.position_ms(), 0);

        player.set_play_when_ready(true);
        player.tick(start + Duration::from_millis(1_500));
        assert_eq!(player.position_ms(), 1_000);
    }

    #[test]
    fn pauses_at_end_of_content() {
        let mut player = SimulatedPlayer::new(1_000);
        let start = Instant::now();
        player.tick(start);
        player.set_play_when_ready(true);
        player.tick(start + Duration::from_millis(5_000));
        assert_eq!(player.position_ms(), 1_000);
        assert!(!player.is_playing());
    }

    #[test]
    fn degenerate_video_size_stays_unknown() {
        let mut player = SimulatedPlayer::new(60_000);
        player.set_video_size(1920, 0);
        assert_eq!(player.video_size(), None);
        player.set_video_size(1920, 1080);
        assert_eq!(player.video_size(), Some(VideoSize::new(1920, 1080)));
    }

    #[test]
    fn persisted_position_is_clamped_to_duration() {
        let player = SimulatedPlayer::new(10_000).with_position(25_000);
        assert_eq!(player.position_ms(), 10_000);
    }
}
