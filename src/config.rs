//! Playback settings and the optional TOML settings file.

#[cfg(feature = "toml")]
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::parser::DEFAULT_SEPARATOR;
use crate::{PassLimit, PlayerOptions};

/// Unvalidated playback settings, as written in a settings file.
///
/// Missing fields take their defaults, so a file only needs the values it
/// changes:
///
/// ```toml
/// delay_secs = 0.05
/// loops = 3
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PlaybackSettings {
    /// Seconds between frame draws
    pub delay_secs: f64,
    /// Number of passes; 0 loops forever
    pub loops: u32,
    /// Frame separator in the animation file
    pub separator: String,
    /// Center frames in the terminal
    pub center: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            delay_secs: 0.1,
            loops: 0,
            separator: DEFAULT_SEPARATOR.to_string(),
            center: true,
        }
    }
}

impl PlaybackSettings {
    /// Parse settings from a TOML string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read and parse a TOML settings file.
    #[cfg(feature = "toml")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings file");
        Ok(settings)
    }

    /// The frame delay as a `Duration`.
    ///
    /// Rejects negative, NaN and infinite values.
    pub fn delay(&self) -> Result<Duration> {
        if self.delay_secs.is_finite() && self.delay_secs >= 0.0 {
            Duration::try_from_secs_f64(self.delay_secs).map_err(|_| Error::InvalidDelay(self.delay_secs))
        } else {
            Err(Error::InvalidDelay(self.delay_secs))
        }
    }

    /// Validate the settings into player options.
    pub fn player_options(&self) -> Result<PlayerOptions> {
        if self.separator.is_empty() {
            return Err(Error::EmptySeparator);
        }
        Ok(PlayerOptions {
            delay: self.delay()?,
            passes: PassLimit::from_loops(self.loops),
            center: self.center,
        })
    }
}
