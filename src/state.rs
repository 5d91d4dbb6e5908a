//! Fade state machine states
//!
//! | State     | Output                                    |
//! |-----------|-------------------------------------------|
//! | FadedOut  | Settled at the faded-out bound            |
//! | FadingIn  | Moving toward the faded-in bound          |
//! | FadedIn   | Settled at the faded-in bound             |
//! | FadingOut | Moving toward the faded-out bound         |
//!
//! Only the two transitional states can be requested with
//! [`VolumeFader::start_fade`](crate::VolumeFader::start_fade); the steady
//! states are reached when a fade completes.

use crate::curve::normalize_name;
use crate::error::FaderError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FadeState {
    FadedOut,
    FadingIn,
    #[default]
    FadedIn,
    FadingOut,
}

impl FadeState {
    #[must_use]
    #[inline]
    pub fn is_steady(&self) -> bool {
        matches!(self, Self::FadedOut | Self::FadedIn)
    }

    #[must_use]
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::FadingIn | Self::FadingOut)
    }

    /// The steady state this state ends up in
    #[must_use]
    #[inline]
    pub fn settles_to(&self) -> FadeState {
        match self {
            Self::FadedOut | Self::FadingOut => Self::FadedOut,
            Self::FadedIn | Self::FadingIn => Self::FadedIn,
        }
    }

    /// The transition heading the other way
    #[must_use]
    pub fn reversed(&self) -> FadeState {
        match self {
            Self::FadedOut | Self::FadingOut => Self::FadingIn,
            Self::FadedIn | Self::FadingIn => Self::FadingOut,
        }
    }

    #[must_use]
    pub fn all() -> &'static [FadeState] {
        &[Self::FadedOut, Self::FadingIn, Self::FadedIn, Self::FadingOut]
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FadedOut => "Faded Out",
            Self::FadingIn => "Fading In",
            Self::FadedIn => "Faded In",
            Self::FadingOut => "Fading Out",
        }
    }
}

impl std::fmt::Display for FadeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for FadeState {
    type Err = FaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Self::all()
            .iter()
            .copied()
            .find(|state| normalize_name(state.display_name()) == wanted)
            .ok_or_else(|| FaderError::InvalidState(s.to_string()))
    }
}

impl TryFrom<u8> for FadeState {
    type Error = FaderError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| FaderError::InvalidState(index.to_string()))
    }
}
