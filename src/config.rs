//! Fader settings
//!
//! Settings can be built in code or loaded from a TOML file:
//!
//! ```toml
//! faded_out_value = 0.0
//! faded_in_value = 0.8
//! time_to_fade = 1.5
//! curve = "SCurve"
//! start_state = "FadedOut"
//! ```
//!
//! Missing keys fall back to [`FaderSettings::default`].

use crate::curve::FadeCurve;
use crate::error::{FaderError, ParseError, Result};
use crate::state::FadeState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaderSettings {
    /// Volume when fully faded out, in `[0, 1]`
    pub faded_out_value: f32,
    /// Volume when fully faded in, in `[0, 1]`
    pub faded_in_value: f32,
    /// Seconds for a full transition; 0 completes on the first tick
    pub time_to_fade: f32,
    pub curve: FadeCurve,
    /// Applied instantly on construction
    pub start_state: FadeState,
}

impl Default for FaderSettings {
    fn default() -> Self {
        Self {
            faded_out_value: 0.0,
            faded_in_value: 1.0,
            time_to_fade: 0.75,
            curve: FadeCurve::Linear,
            start_state: FadeState::FadedIn,
        }
    }
}

impl FaderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, faded_out_value: f32, faded_in_value: f32) -> Self {
        self.faded_out_value = faded_out_value;
        self.faded_in_value = faded_in_value;
        self
    }

    pub fn with_time_to_fade(mut self, seconds: f32) -> Self {
        self.time_to_fade = seconds;
        self
    }

    pub fn with_curve(mut self, curve: FadeCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_start_state(mut self, state: FadeState) -> Self {
        self.start_state = state;
        self
    }

    /// Checks bounds and duration
    pub fn validate(&self) -> Result<()> {
        validate_bound("faded_out_value", self.faded_out_value)?;
        validate_bound("faded_in_value", self.faded_in_value)?;
        validate_duration(self.time_to_fade)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: FaderSettings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No fader settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(error) => return Err(FaderError::Io(error)),
        };
        let settings: FaderSettings = match toml::from_str(&contents) {
            Ok(settings) => settings,
            Err(error) if error.span().is_some() => {
                return Err(FaderError::Parse(ParseError {
                    filename: path.display().to_string(),
                    message: error.message().to_string(),
                }));
            }
            Err(error) => return Err(FaderError::TomlDe(error)),
        };
        settings.validate()?;
        tracing::debug!("Loaded fader settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

pub(crate) fn validate_bound(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FaderError::InvalidBound { name, value })
    }
}

pub(crate) fn validate_duration(seconds: f32) -> Result<()> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(())
    } else {
        Err(FaderError::InvalidDuration(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = FaderSettings::default();
        assert_eq!(settings.faded_out_value, 0.0);
        assert_eq!(settings.faded_in_value, 1.0);
        assert_eq!(settings.time_to_fade, 0.75);
        assert_eq!(settings.curve, FadeCurve::Linear);
        assert_eq!(settings.start_state, FadeState::FadedIn);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let settings = FaderSettings::new()
            .with_bounds(0.2, 0.9)
            .with_time_to_fade(2.0)
            .with_curve(FadeCurve::SCurve)
            .with_start_state(FadeState::FadedOut);

        assert_eq!(settings.faded_out_value, 0.2);
        assert_eq!(settings.faded_in_value, 0.9);
        assert_eq!(settings.time_to_fade, 2.0);
        assert_eq!(settings.curve, FadeCurve::SCurve);
        assert_eq!(settings.start_state, FadeState::FadedOut);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let settings = FaderSettings::new().with_bounds(-0.1, 1.0);
        assert!(matches!(
            settings.validate(),
            Err(FaderError::InvalidBound { name: "faded_out_value", .. })
        ));

        let settings = FaderSettings::new().with_bounds(0.0, f32::NAN);
        assert!(matches!(
            settings.validate(),
            Err(FaderError::InvalidBound { name: "faded_in_value", .. })
        ));

        let settings = FaderSettings::new().with_time_to_fade(-1.0);
        assert!(matches!(settings.validate(), Err(FaderError::InvalidDuration(_))));

        let settings = FaderSettings::new().with_time_to_fade(f32::INFINITY);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_duration_is_valid() {
        assert!(FaderSettings::new().with_time_to_fade(0.0).validate().is_ok());
    }

    #[test]
    fn test_toml_partial() {
        let settings = FaderSettings::from_toml_str(
            r#"
            faded_in_value = 0.5
            curve = "CubicInOut"
            start_state = "FadedOut"
            "#,
        )
        .unwrap();

        assert_eq!(settings.faded_out_value, 0.0);
        assert_eq!(settings.faded_in_value, 0.5);
        assert_eq!(settings.time_to_fade, 0.75);
        assert_eq!(settings.curve, FadeCurve::CubicInOut);
        assert_eq!(settings.start_state, FadeState::FadedOut);
    }

    #[test]
    fn test_toml_bezier_curve() {
        let settings = FaderSettings::from_toml_str("curve = { Bezier = [0.25, 0.75] }").unwrap();
        assert_eq!(settings.curve, FadeCurve::Bezier(0.25, 0.75));
    }

    #[test]
    fn test_toml_unknown_state_is_error() {
        let result = FaderSettings::from_toml_str(r#"start_state = "Invalid""#);
        assert!(matches!(result, Err(FaderError::TomlDe(_))));
    }

    #[test]
    fn test_toml_invalid_values_are_rejected() {
        let result = FaderSettings::from_toml_str("faded_in_value = 2.0");
        assert!(matches!(result, Err(FaderError::InvalidBound { .. })));
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = FaderSettings::new()
            .with_bounds(0.1, 0.6)
            .with_curve(FadeCurve::QuartOut)
            .with_start_state(FadeState::FadingOut);
        let text = settings.to_toml_string().unwrap();
        assert_eq!(FaderSettings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FaderSettings::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, FaderSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fader.toml");
        let settings = FaderSettings::new()
            .with_time_to_fade(3.0)
            .with_curve(FadeCurve::EqualPower);

        settings.save(&path).unwrap();
        assert_eq!(FaderSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_reports_file_name_on_syntax_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "time_to_fade = = 1").unwrap();

        match FaderSettings::load(&path) {
            Err(FaderError::Parse(error)) => assert!(error.filename.ends_with("broken.toml")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
