//! # textanim
//!
//! Centered, timed playback of plain-text frame animations in a terminal.
//!
//! This crate provides:
//! - Parsing animation text files into ordered frames
//! - Centering an animation within the terminal dimensions
//! - A blocking player that clears, draws, flushes and sleeps per frame,
//!   for a bounded number of passes or until cancelled
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`PlaybackSettings`] from a TOML file
//! - `cli` - Build the `textanim` binary (enabled by default)
//!
//! ## Example
//!
//! ```rust,no_run
//! use textanim::terminal::{CrosstermSize, CrosstermSurface};
//! use textanim::{read_animation, CancelToken, PassLimit, Player, PlayerOptions};
//!
//! let animation = read_animation("spinner.ta", "#")?;
//! let player = Player::new(PlayerOptions {
//!     passes: PassLimit::Count(3),
//!     ..Default::default()
//! });
//! player.play(&animation, &CrosstermSize, &mut CrosstermSurface::stdout(), &CancelToken::new())?;
//! # Ok::<(), textanim::Error>(())
//! ```

mod animation;
mod cancel;
mod config;
mod data;
mod error;
mod loader;
mod parser;
pub mod render;
mod sizing;
pub mod terminal;

pub use animation::{PassLimit, PlaybackOutcome, PlaybackSummary, Player, PlayerOptions, DEFAULT_DELAY};
pub use cancel::CancelToken;
pub use config::PlaybackSettings;
pub use data::{Animation, Frame};
pub use error::{Error, Result};
pub use loader::read_animation;
pub use parser::{parse_frames, DEFAULT_SEPARATOR};
pub use render::RenderConfig;
pub use sizing::{Offset, TerminalSize};
