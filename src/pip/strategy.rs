//! Platform-version gating and the two miniaturization entry strategies.
//!
//! Exactly one strategy is chosen when the screen mounts, from the
//! platform version treated as injected configuration. On the legacy band
//! the app decides the entry moment itself when the user leaves the
//! foreground; on newer versions the app only keeps declared parameters
//! current and the host decides when to enter.

use super::actions::remote_actions;
use super::params::{AspectRatio, PipParams, WindowRect};
use crate::player::Playback;

/// Host platform version, injected from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlatformVersion(pub u32);

/// First version with miniature-overlay support at all.
pub const MIN_PIP_VERSION: PlatformVersion = PlatformVersion(26);
/// First version where the host can auto-enter from declared parameters.
pub const MIN_AUTO_ENTER_VERSION: PlatformVersion = PlatformVersion(31);

/// What the platform can do, derived once from the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipSupport {
    /// No miniature form; nothing ever activates.
    None,
    /// One-shot entry on the user-leave signal only.
    Legacy,
    /// Declarative parameters with host-driven auto-enter.
    AutoEnter,
}

impl PlatformVersion {
    pub fn pip_support(self) -> PipSupport {
        if self < MIN_PIP_VERSION {
            PipSupport::None
        } else if self < MIN_AUTO_ENTER_VERSION {
            PipSupport::Legacy
        } else {
            PipSupport::AutoEnter
        }
    }
}

/// The entry strategy mounted for the lifetime of one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStrategy {
    /// Platform below the minimum supported version.
    Unsupported,
    /// Armed on the user-leave signal; fires at most once per leave.
    Legacy,
    /// Re-declares parameters on every geometry change.
    Declarative,
}

impl EntryStrategy {
    pub fn for_version(version: PlatformVersion) -> Self {
        match version.pip_support() {
            PipSupport::None => EntryStrategy::Unsupported,
            PipSupport::Legacy => EntryStrategy::Legacy,
            PipSupport::AutoEnter => EntryStrategy::Declarative,
        }
    }

    /// Legacy path: decide on a user-leave signal.
    ///
    /// Returns the one-shot entry parameters, or `None` when a
    /// precondition fails (not eligible, or content dimensions unknown).
    /// A `None` is a silent skip: the leave event is not re-raised and
    /// nothing retries.
    pub fn on_user_leave(
        &self,
        player: &dyn Playback,
        eligible: bool,
        source_rect: Option<WindowRect>,
    ) -> Option<PipParams> {
        if *self != EntryStrategy::Legacy {
            return None;
        }
        if !eligible {
            return None;
        }
        let size = player.video_size()?;
        Some(PipParams {
            actions: remote_actions(player.is_playing()).to_vec(),
            aspect_ratio: Some(AspectRatio::new(size.width, size.height)),
            source_rect,
            auto_enter: None,
        })
    }

    /// Declarative path: parameters to (re)declare after a geometry change.
    ///
    /// Always carries the current action set. The source rectangle and
    /// aspect ratio are attached only when the player is eligible and its
    /// dimensions are known; auto-enter mirrors eligibility so the host
    /// can trigger entry itself at the right moment.
    pub fn on_geometry_changed(
        &self,
        player: &dyn Playback,
        eligible: bool,
        source_rect: WindowRect,
    ) -> Option<PipParams> {
        if *self != EntryStrategy::Declarative {
            return None;
        }
        let mut params = PipParams {
            actions: remote_actions(player.is_playing()).to_vec(),
            aspect_ratio: None,
            source_rect: None,
            auto_enter: Some(eligible),
        };
        if eligible {
            if let Some(size) = player.video_size() {
                params.aspect_ratio = Some(AspectRatio::new(size.width, size.height));
                params.source_rect = Some(source_rect);
            }
        }
        Some(params)
    }
}
