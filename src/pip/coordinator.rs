//! Composition root for the miniaturization engine.
//!
//! Owns the eligibility flag, the entry strategy chosen for the platform
//! version, the mode observer and the control-signal gate, and routes the
//! four event sources between player and host. Everything runs on the UI
//! thread as discrete dispatches; every handler recomputes its output from
//! current state, so arbitrary interleaving of the sources is tolerated.

use log::{debug, info};

use super::params::{PipParams, WindowRect};
use super::signal::{self, ControlSignal};
use super::strategy::{EntryStrategy, PlatformVersion};
use super::PipModeObserver;
use crate::player::Playback;

/// Window-side capabilities consumed by the coordinator. Implemented by
/// the shell for the real window and by doubles in tests. Both commands
/// are fire-and-forget: the host fails silently on invalid calls.
pub trait PipHost {
    /// Whether the window is currently rendered in miniature form.
    fn is_in_pip_mode(&self) -> bool;
    /// One-shot "miniaturize now" command (legacy band).
    fn enter_pip(&mut self, params: PipParams);
    /// Declare or update miniaturization parameters (declarative band).
    fn set_pip_params(&mut self, params: PipParams);
}

/// Per-screen coordination state. Created when the screen mounts and torn
/// down with [`Coordinator::unmount`]; events delivered after teardown are
/// dropped so nothing can reach a released player.
#[derive(Debug)]
pub struct Coordinator {
    strategy: EntryStrategy,
    observer: PipModeObserver,
    eligible: bool,
    last_rect: Option<WindowRect>,
    mounted: bool,
}

impl Coordinator {
    /// Mounts the engine for one screen. The strategy is fixed here from
    /// the platform version and never switches afterwards; the mode flag
    /// is seeded synchronously from the host.
    pub fn new(version: PlatformVersion, host: &dyn PipHost) -> Self {
        let strategy = EntryStrategy::for_version(version);
        debug!("mounting pip coordinator with {strategy:?} strategy");
        Self {
            strategy,
            observer: PipModeObserver::new(host.is_in_pip_mode()),
            eligible: false,
            last_rect: None,
            mounted: true,
        }
    }

    /// Playback-state callback. Eligibility mirrors the most recently
    /// delivered value; staleness between deliveries is accepted.
    pub fn on_playing_changed(&mut self, playing: bool) {
        if !self.mounted {
            return;
        }
        self.eligible = playing;
    }

    /// Layout pass of the video surface. Records the rectangle for the
    /// legacy strategy (so a later leave uses the most recent geometry)
    /// and lets the declarative strategy re-declare parameters.
    pub fn on_geometry_changed(
        &mut self,
        rect: WindowRect,
        player: &dyn Playback,
        host: &mut dyn PipHost,
    ) {
        if !self.mounted {
            return;
        }
        self.last_rect = Some(rect);
        if let Some(params) = self
            .strategy
            .on_geometry_changed(player, self.eligible, rect)
        {
            host.set_pip_params(params);
        }
    }

    /// User-leave signal (legacy band's entry trigger).
    pub fn on_user_leave(&mut self, player: &dyn Playback, host: &mut dyn PipHost) {
        if !self.mounted {
            return;
        }
        if let Some(params) = self
            .strategy
            .on_user_leave(player, self.eligible, self.last_rect)
        {
            info!("entering miniature mode on user leave");
            host.enter_pip(params);
        }
    }

    /// Host mode-change callback.
    pub fn on_pip_mode_changed(&mut self, in_pip: bool) {
        if !self.mounted {
            return;
        }
        info!("pip mode changed: {in_pip}");
        self.observer.on_mode_changed(in_pip);
    }

    /// External control signal. Routed to the player only while in
    /// miniature form; anything arriving while foregrounded or after
    /// teardown is dropped, so a duplicate or malicious delivery can
    /// never hijack foreground playback.
    pub fn on_control_signal(&mut self, sig: &ControlSignal, player: &mut dyn Playback) {
        if !self.mounted || !self.observer.is_in_pip() {
            debug!("dropping control signal outside miniature mode");
            return;
        }
        signal::route(sig, player);
    }

    pub fn is_in_pip(&self) -> bool {
        self.mounted && self.observer.is_in_pip()
    }

    /// The on-screen controller overlay is the logical negation of the
    /// miniature mode: remote actions substitute for it while small.
    pub fn controls_visible(&self) -> bool {
        !self.is_in_pip()
    }

    pub fn last_rect(&self) -> Option<WindowRect> {
        self.last_rect
    }

    /// Tears down the screen: resets eligibility, cancels every
    /// subscription (all further events are dropped) and returns the
    /// position to persist for the next mount.
    pub fn unmount(&mut self, player: &dyn Playback) -> u64 {
        self.mounted = false;
        self.eligible = false;
        player.position_ms()
    }
}
