//! Error type shared by the frame store, the player and the settings loader.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can end a playback invocation.
///
/// None of these are retried; each one is terminal to the current run.
#[derive(Debug, Error)]
pub enum Error {
    /// The animation file could not be read
    #[error("failed to read animation file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An empty separator would split between every character
    #[error("frame separator must not be empty")]
    EmptySeparator,

    /// Terminal dimensions could not be determined (e.g. stdout is not a tty)
    #[error("failed to query terminal size: {0}")]
    TerminalSize(#[source] io::Error),

    /// Clearing, writing or flushing the terminal failed
    #[error("failed to write to terminal: {0}")]
    Output(#[source] io::Error),

    #[error("invalid frame delay {0}: must be a finite number of seconds >= 0")]
    InvalidDelay(f64),

    /// The settings file could not be read
    #[error("failed to read settings file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid TOML for [`crate::PlaybackSettings`]
    #[cfg(feature = "toml")]
    #[error("invalid settings file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_file() {
        let err = Error::Read {
            path: PathBuf::from("missing.ta"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("missing.ta"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn invalid_delay_message() {
        assert_eq!(
            Error::InvalidDelay(-1.5).to_string(),
            "invalid frame delay -1.5: must be a finite number of seconds >= 0"
        );
    }
}
