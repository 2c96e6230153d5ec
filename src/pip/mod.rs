//! Picture-in-Picture coordination engine.
//!
//! Decides when the player window should take its miniature overlay form,
//! builds the parameters describing that form (source rectangle, aspect
//! ratio, remote transport actions), tracks the current mode, and routes
//! external control signals back into the player while miniaturized. The
//! engine is host-independent: the shell feeds it four event sources
//! (playing-changed, geometry-changed, mode-changed, control signals) and
//! implements [`coordinator::PipHost`] for the window side effects.

pub mod actions;
pub mod coordinator;
pub mod observer;
pub mod params;
pub mod signal;
pub mod strategy;

pub use actions::{remote_actions, ControlCode, RemoteAction};
pub use coordinator::{Coordinator, PipHost};
pub use observer::PipModeObserver;
pub use params::{AspectRatio, PipParams, WindowRect};
pub use signal::{ControlSignal, CONTROL_ACTION, SEEK_STEP_MS};
pub use strategy::{EntryStrategy, PipSupport, PlatformVersion};
