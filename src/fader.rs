//! Volume fader state machine
//!
//! A [`VolumeFader`] moves an audio output between a faded-out and a faded-in
//! volume over `time_to_fade` seconds. The host calls
//! [`advance`](VolumeFader::advance) once per frame with the elapsed time and
//! requests fades with [`start_fade`](VolumeFader::start_fade).
//!
//! ```text
//!            start_fade(FadingIn)            t >= 1
//! FadedOut ───────────────────────▶ FadingIn ───────▶ FadedIn
//!    ▲                                ▲  │               │
//!    │                        reverse │  │ reverse       │ start_fade(FadingOut)
//!    │          t >= 1                │  ▼               │
//!    └─────────────────────────── FadingOut ◀────────────┘
//! ```
//!
//! Reversing mid-fade seeds the timer with the time left in the abandoned
//! fade, so the output continues from where it was instead of jumping.

use crate::config::{validate_bound, validate_duration, FaderSettings};
use crate::curve::FadeCurve;
use crate::error::Result;
use crate::observer::FadeObserver;
use crate::sink::VolumeSink;
use crate::state::FadeState;
use std::time::Duration;
use tracing::{debug, trace, warn};

pub struct VolumeFader<S, O = ()> {
    settings: FaderSettings,
    state: FadeState,
    timer: f32,
    current_value: f32,
    sink: S,
    observer: O,
}

impl<S: VolumeSink> VolumeFader<S> {
    /// Fader without a completion listener
    pub fn with_sink(settings: FaderSettings, sink: S) -> Result<Self> {
        Self::new(settings, sink, ())
    }
}

impl<S, O> VolumeFader<S, O>
where
    S: VolumeSink,
    O: FadeObserver,
{
    /// Builds a fader already settled in (or running) `settings.start_state`.
    ///
    /// The start state is applied without a transition and without firing
    /// notifications. A transitional start state begins at the bound the fade
    /// departs from.
    pub fn new(settings: FaderSettings, sink: S, observer: O) -> Result<Self> {
        settings.validate()?;

        let start_value = match settings.start_state {
            FadeState::FadedOut | FadeState::FadingIn => settings.faded_out_value,
            FadeState::FadedIn | FadeState::FadingOut => settings.faded_in_value,
        };
        let mut fader = Self {
            settings,
            state: settings.start_state,
            timer: 0.0,
            current_value: start_value,
            sink,
            observer,
        };
        fader.set_volume(start_value);
        debug!(state = %fader.state, volume = start_value, "Fader created");
        Ok(fader)
    }

    // ==================== Fade requests ====================

    /// Requests a fade toward `target`, which must be `FadingIn` or `FadingOut`.
    ///
    /// The request is ignored when `target` is a steady state, when the fader
    /// already settled where `target` leads, or when it is already fading in
    /// that direction. Requesting the opposite direction mid-fade reverses it.
    ///
    /// With `force_instant` the output snaps to the target bound, the fader
    /// settles immediately and the completion notification fires before this
    /// call returns.
    pub fn start_fade(&mut self, target: FadeState, force_instant: bool) {
        if !self.accepts(target) {
            debug!(state = %self.state, target = %target, "Fade request ignored");
            return;
        }

        if force_instant {
            match target {
                FadeState::FadingOut => self.instant_fade_out(),
                _ => self.instant_fade_in(),
            }
            return;
        }

        let time_left = if self.state.is_transitioning() {
            (self.settings.time_to_fade - self.timer).max(0.0)
        } else {
            0.0
        };
        self.switch_state(target, time_left);
    }

    /// Like [`start_fade`](Self::start_fade), for hosts that name states in
    /// data. An unknown name is logged and otherwise ignored.
    pub fn start_fade_named(&mut self, target: &str, force_instant: bool) {
        match target.parse::<FadeState>() {
            Ok(state) => self.start_fade(state, force_instant),
            Err(error) => warn!("{}", error),
        }
    }

    pub fn fade_in(&mut self) {
        self.start_fade(FadeState::FadingIn, false);
    }

    pub fn fade_out(&mut self) {
        self.start_fade(FadeState::FadingOut, false);
    }

    pub fn fade_in_instant(&mut self) {
        self.start_fade(FadeState::FadingIn, true);
    }

    pub fn fade_out_instant(&mut self) {
        self.start_fade(FadeState::FadingOut, true);
    }

    /// Fades toward whichever bound the fader is not heading to
    pub fn toggle(&mut self, force_instant: bool) {
        self.start_fade(self.state.reversed(), force_instant);
    }

    fn accepts(&self, target: FadeState) -> bool {
        match target {
            FadeState::FadingIn => !matches!(self.state, FadeState::FadedIn | FadeState::FadingIn),
            FadeState::FadingOut => {
                !matches!(self.state, FadeState::FadedOut | FadeState::FadingOut)
            }
            FadeState::FadedOut | FadeState::FadedIn => false,
        }
    }

    fn instant_fade_out(&mut self) {
        self.set_volume(self.settings.faded_out_value);
        self.switch_state(FadeState::FadedOut, 0.0);
        self.observer.finished_fading_out();
    }

    fn instant_fade_in(&mut self) {
        self.set_volume(self.settings.faded_in_value);
        self.switch_state(FadeState::FadedIn, 0.0);
        self.observer.finished_fading_in();
    }

    // ==================== Ticking ====================

    /// Advances the fade by `dt` seconds. Negative or NaN steps count as 0.
    pub fn advance(&mut self, dt: f32) {
        self.timer += dt.max(0.0);

        match self.state {
            FadeState::FadingIn => self.update_fading_in(),
            FadeState::FadingOut => self.update_fading_out(),
            FadeState::FadedOut | FadeState::FadedIn => {}
        }
    }

    pub fn advance_duration(&mut self, dt: Duration) {
        self.advance(dt.as_secs_f32());
    }

    fn update_fading_in(&mut self) {
        let t = self.elapsed_fraction();
        let value = self.curve_value(t);
        self.set_volume(value);

        if t >= 1.0 {
            self.observer.finished_fading_in();
            self.switch_state(FadeState::FadedIn, 0.0);
        }
    }

    fn update_fading_out(&mut self) {
        let t = 1.0 - self.elapsed_fraction();
        let value = self.curve_value(t);
        self.set_volume(value);

        if t <= 0.0 {
            self.observer.finished_fading_out();
            self.switch_state(FadeState::FadedOut, 0.0);
        }
    }

    /// `timer / time_to_fade` clamped to `[0, 1]`; a zero duration is always done
    fn elapsed_fraction(&self) -> f32 {
        if self.settings.time_to_fade <= 0.0 {
            return 1.0;
        }
        (self.timer / self.settings.time_to_fade).clamp(0.0, 1.0)
    }

    fn curve_value(&self, t: f32) -> f32 {
        self.settings
            .curve
            .interpolate(self.settings.faded_out_value, self.settings.faded_in_value, t)
    }

    // ==================== State transitions ====================

    fn switch_state(&mut self, new_state: FadeState, forced_start_time: f32) {
        if self.state == new_state {
            return;
        }

        match self.state {
            FadeState::FadedOut => {
                self.timer = 0.0;
                self.set_volume(self.settings.faded_out_value);
            }
            FadeState::FadedIn => {
                self.timer = 0.0;
                self.set_volume(self.settings.faded_in_value);
            }
            FadeState::FadingIn | FadeState::FadingOut => self.timer = 0.0,
        }

        match new_state {
            FadeState::FadedOut => {
                self.timer = 0.0;
                self.set_volume(self.settings.faded_out_value);
            }
            FadeState::FadedIn => {
                self.timer = 0.0;
                self.set_volume(self.settings.faded_in_value);
            }
            FadeState::FadingIn | FadeState::FadingOut => self.timer = forced_start_time,
        }

        debug!(from = %self.state, to = %new_state, timer = self.timer, "Fade state changed");
        self.state = new_state;
    }

    fn set_volume(&mut self, value: f32) {
        trace!(volume = value, "Fader volume");
        self.current_value = value;
        self.sink.set_volume(value);
    }

    // ==================== Runtime configuration ====================

    /// Changes both bounds. A settled fader moves its output to the new bound.
    pub fn set_bounds(&mut self, faded_out_value: f32, faded_in_value: f32) -> Result<()> {
        validate_bound("faded_out_value", faded_out_value)?;
        validate_bound("faded_in_value", faded_in_value)?;

        self.settings.faded_out_value = faded_out_value;
        self.settings.faded_in_value = faded_in_value;
        match self.state {
            FadeState::FadedOut => self.set_volume(faded_out_value),
            FadeState::FadedIn => self.set_volume(faded_in_value),
            // Picked up on the next tick
            FadeState::FadingIn | FadeState::FadingOut => {}
        }
        Ok(())
    }

    /// Changes the fade duration; a running fade keeps its elapsed time
    pub fn set_time_to_fade(&mut self, seconds: f32) -> Result<()> {
        validate_duration(seconds)?;
        self.settings.time_to_fade = seconds;
        Ok(())
    }

    pub fn set_curve(&mut self, curve: FadeCurve) {
        self.settings.curve = curve;
    }

    // ==================== Queries ====================

    #[must_use]
    #[inline]
    pub fn current_value(&self) -> f32 {
        self.current_value
    }

    #[must_use]
    #[inline]
    pub fn state(&self) -> FadeState {
        self.state
    }

    #[must_use]
    #[inline]
    pub fn is_faded_out(&self) -> bool {
        self.state == FadeState::FadedOut
    }

    #[must_use]
    #[inline]
    pub fn is_fading_in(&self) -> bool {
        self.state == FadeState::FadingIn
    }

    #[must_use]
    #[inline]
    pub fn is_faded_in(&self) -> bool {
        self.state == FadeState::FadedIn
    }

    #[must_use]
    #[inline]
    pub fn is_fading_out(&self) -> bool {
        self.state == FadeState::FadingOut
    }

    #[must_use]
    #[inline]
    pub fn is_fading(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Seconds spent in the current state (seeded on reversal)
    #[must_use]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Position between the bounds before easing: 0 at faded out, 1 at faded in
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.state {
            FadeState::FadedOut => 0.0,
            FadeState::FadedIn => 1.0,
            FadeState::FadingIn => self.elapsed_fraction(),
            FadeState::FadingOut => 1.0 - self.elapsed_fraction(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &FaderSettings {
        &self.settings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_parts(self) -> (S, O) {
        (self.sink, self.observer)
    }
}

impl<S, O> std::fmt::Debug for VolumeFader<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VolumeFader")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("timer", &self.timer)
            .field("current_value", &self.current_value)
            .finish_non_exhaustive()
    }
}
