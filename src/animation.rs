//! Timed, centered playback of an animation.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::render::{compose_frame, RenderConfig};
use crate::terminal::{TerminalSizeProvider, TerminalSurface};
use crate::{Animation, CancelToken, Frame, Offset};

/// Delay between frame draws when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Longest uninterrupted sleep; the cancel token is polled at this interval
/// while waiting out a frame delay.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// How many passes over the frames to play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassLimit {
    /// Loop until cancelled
    #[default]
    Forever,
    /// Stop after this many full passes
    Count(u32),
}

impl PassLimit {
    /// Interpret a loop count where 0 means "forever".
    pub fn from_loops(loops: u32) -> Self {
        match loops {
            0 => PassLimit::Forever,
            n => PassLimit::Count(n),
        }
    }

    /// Whether pass number `pass` (0-based) should be played.
    #[inline]
    pub fn allows(&self, pass: u64) -> bool {
        match *self {
            PassLimit::Forever => true,
            PassLimit::Count(n) => pass < u64::from(n),
        }
    }
}

/// How a playback session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// All requested passes were played
    Completed,
    /// The cancel token was set
    Cancelled,
    /// There were no frames to play
    Empty,
}

/// Statistics returned once playback ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackSummary {
    pub outcome: PlaybackOutcome,
    /// Full passes over every frame
    pub passes_completed: u64,
    pub frames_drawn: u64,
    /// Offset applied to every frame, if playback got that far
    pub offset: Option<Offset>,
}

impl PlaybackSummary {
    fn empty() -> Self {
        Self {
            outcome: PlaybackOutcome::Empty,
            passes_completed: 0,
            frames_drawn: 0,
            offset: None,
        }
    }
}

/// Validated playback options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerOptions {
    /// Pause after each frame draw
    pub delay: Duration,
    pub passes: PassLimit,
    /// Center frames in the terminal; otherwise draw at the top-left corner
    pub center: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            passes: PassLimit::Forever,
            center: true,
        }
    }
}

/// Single-threaded animation player.
///
/// The player freezes the terminal size and the centering offset when a
/// session starts, then for every frame clears the screen, writes the
/// composed frame, flushes and sleeps. The cancel token is checked before
/// each draw and while sleeping.
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use textanim::terminal::{FixedSize, RecordingSurface};
/// use textanim::{parse_frames, CancelToken, PassLimit, Player, PlayerOptions, TerminalSize};
///
/// let animation = parse_frames("o#O#", "#").unwrap();
/// let player = Player::new(PlayerOptions {
///     delay: Duration::ZERO,
///     passes: PassLimit::Count(2),
///     center: true,
/// });
///
/// let mut surface = RecordingSurface::new();
/// let summary = player
///     .play(&animation, &FixedSize(TerminalSize::new(9, 3)), &mut surface, &CancelToken::new())
///     .unwrap();
///
/// assert_eq!(summary.passes_completed, 2);
/// assert_eq!(surface.screens().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Player {
    options: PlayerOptions,
}

impl Player {
    pub fn new(options: PlayerOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    /// Play `animation` until the pass limit is reached or `cancel` is set.
    ///
    /// An empty animation returns immediately with
    /// [`PlaybackOutcome::Empty`]; the terminal is neither queried nor drawn.
    pub fn play<P, S>(&self, animation: &Animation, size: &P, surface: &mut S, cancel: &CancelToken) -> Result<PlaybackSummary>
    where
        P: TerminalSizeProvider + ?Sized,
        S: TerminalSurface + ?Sized,
    {
        if animation.is_empty() {
            tracing::warn!("animation has no frames, nothing to play");
            return Ok(PlaybackSummary::empty());
        }

        let (width, height) = animation.dimensions();
        let terminal = size.terminal_size().map_err(Error::TerminalSize)?;
        let offset = if self.options.center {
            Offset::centered(terminal, width, height)
        } else {
            Offset::default()
        };
        tracing::debug!(
            frames = animation.frame_count(),
            width,
            height,
            term_width = terminal.width,
            term_height = terminal.height,
            offset_x = offset.x,
            offset_y = offset.y,
            "starting playback"
        );
        if offset.is_clipped() {
            tracing::warn!(
                width,
                height,
                term_width = terminal.width,
                term_height = terminal.height,
                "animation is larger than the terminal and will be clipped"
            );
        }

        let config = RenderConfig::new(offset, terminal);
        let mut summary = PlaybackSummary {
            outcome: PlaybackOutcome::Completed,
            passes_completed: 0,
            frames_drawn: 0,
            offset: Some(offset),
        };

        let mut pass = 0u64;
        while self.options.passes.allows(pass) {
            for frame in animation.frames() {
                if cancel.is_cancelled() {
                    summary.outcome = PlaybackOutcome::Cancelled;
                    tracing::info!(
                        passes = summary.passes_completed,
                        frames = summary.frames_drawn,
                        "playback cancelled"
                    );
                    return Ok(summary);
                }
                self.draw(frame, &config, surface)?;
                summary.frames_drawn += 1;
                sleep_unless_cancelled(self.options.delay, cancel);
            }
            pass += 1;
            summary.passes_completed = pass;
            tracing::trace!(pass, "pass completed");
        }

        tracing::info!(passes = summary.passes_completed, frames = summary.frames_drawn, "playback finished");
        Ok(summary)
    }

    /// Clear the surface and draw one frame at the configured offset.
    pub fn draw<S>(&self, frame: &Frame, config: &RenderConfig, surface: &mut S) -> Result<()>
    where
        S: TerminalSurface + ?Sized,
    {
        let text = compose_frame(frame, config);
        surface.clear().map_err(Error::Output)?;
        surface.write_text(&text).map_err(Error::Output)?;
        surface.flush().map_err(Error::Output)
    }
}

/// Block for `delay`, returning early once `cancel` is set.
///
/// A delay too long to represent as an `Instant` has no deadline and only
/// ends through `cancel`.
fn sleep_unless_cancelled(delay: Duration, cancel: &CancelToken) {
    let deadline = Instant::now().checked_add(delay);
    loop {
        if cancel.is_cancelled() {
            return;
        }
        let slice = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return;
                }
                (deadline - now).min(CANCEL_POLL_INTERVAL)
            }
            None => CANCEL_POLL_INTERVAL,
        };
        thread::sleep(slice);
    }
}
