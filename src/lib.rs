//! # volume-fader
//!
//! Time-driven volume fading for audio outputs - engine-agnostic.
//!
//! This crate provides:
//! - **Volume fader** - A four-state machine (faded out, fading in, faded in,
//!   fading out) advanced once per frame by the host
//! - **Easing curves** - Linear, exponential, logarithmic, S-curve, equal power,
//!   bezier and the usual power/elastic/bounce/back family
//! - **Completion notifications** - Observer callbacks fired synchronously when a
//!   fade settles
//! - **Audio sinks** - Push volumes into any output, a closure, or a lock-free
//!   shared cell read by an audio thread
//! - **Settings files** - Load/save fader settings as TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use volume_fader::prelude::*;
//!
//! let settings = FaderSettings::new()
//!     .with_bounds(0.0, 1.0)
//!     .with_time_to_fade(1.0)
//!     .with_start_state(FadeState::FadedOut);
//!
//! let mut fader = VolumeFader::new(settings, NullSink, Vec::<FadeEvent>::new()).unwrap();
//!
//! fader.start_fade(FadeState::FadingIn, false);
//! fader.advance(0.5);
//! assert!((fader.current_value() - 0.5).abs() < 1e-6);
//!
//! fader.advance(0.5);
//! assert!(fader.is_faded_in());
//! assert_eq!(fader.observer(), &vec![FadeEvent::FinishedFadingIn]);
//! ```
//!
//! ## Driving an audio thread
//!
//! ```rust
//! use volume_fader::prelude::*;
//!
//! let volume = SharedVolume::new(0.0);
//! let settings = FaderSettings::new().with_curve(FadeCurve::EqualPower);
//! let mut fader = VolumeFader::with_sink(settings, volume.clone()).unwrap();
//!
//! // Update loop
//! fader.fade_out();
//! fader.advance(1.0 / 60.0);
//!
//! // Audio callback
//! let gain = volume.get();
//! assert!(gain < 1.0 && gain > 0.9);
//! ```
//!
//! ## Logging
//!
//! Rejected fade requests and state changes are reported through `tracing` at
//! `debug` level, unknown state names at `warn`, per-tick volumes at `trace`.
//! The crate never installs a subscriber.

pub mod config;
pub mod curve;
pub mod error;
pub mod fader;
pub mod observer;
pub mod sink;
pub mod state;

pub use config::FaderSettings;
pub use curve::FadeCurve;
pub use error::{FaderError, Result};
pub use fader::VolumeFader;
pub use observer::{FadeEvent, FadeObserver, FnObserver};
pub use sink::{NullSink, SharedVolume, VolumeSink};
pub use state::FadeState;

/// Prelude for common imports
pub mod prelude {
    pub use crate::config::FaderSettings;
    pub use crate::curve::FadeCurve;
    pub use crate::error::FaderError;
    pub use crate::fader::VolumeFader;
    pub use crate::observer::{FadeEvent, FadeObserver, FnObserver};
    pub use crate::sink::{NullSink, SharedVolume, VolumeSink};
    pub use crate::state::FadeState;
}
