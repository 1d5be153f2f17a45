//! Rendering logic for text frames.

use crate::{Frame, Offset, TerminalSize};

/// Configuration for drawing frames into a terminal of a fixed size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Displacement applied to every frame
    pub offset: Offset,
    /// Terminal size frozen at playback start
    pub terminal: TerminalSize,
}

impl RenderConfig {
    pub fn new(offset: Offset, terminal: TerminalSize) -> Self {
        Self { offset, terminal }
    }

    /// Blank lines written under a frame of `frame_height` lines so that the
    /// total output is one line shorter than the terminal.
    #[inline]
    pub fn trailing_lines(&self, frame_height: usize) -> usize {
        usize::from(self.terminal.height)
            .saturating_sub(self.offset.rows())
            .saturating_sub(frame_height)
            .saturating_sub(1)
    }
}

/// Compose the text written for one frame draw, after the screen is cleared.
///
/// The output is `offset.y` blank lines, then every frame line prefixed with
/// `offset.x` spaces and terminated by `\n`, then blank lines up to one short
/// of the terminal height. Padding to the bottom keeps terminals that scroll
/// instead of repainting from showing remnants of the previous frame.
/// Negative offsets produce no padding on that axis.
///
/// ## Example
///
/// ```rust
/// use textanim::{Frame, Offset, RenderConfig, TerminalSize};
/// use textanim::render::compose_frame;
///
/// let config = RenderConfig::new(Offset::new(2, 1), TerminalSize::new(10, 5));
/// let text = compose_frame(&Frame::new("ab"), &config);
/// assert_eq!(text, "\n  ab\n\n\n");
/// ```
pub fn compose_frame(frame: &Frame, config: &RenderConfig) -> String {
    let indent = " ".repeat(config.offset.columns());
    let top = config.offset.rows();
    let bottom = config.trailing_lines(frame.height());

    let mut out = String::with_capacity(
        top + bottom + frame.content().len() + frame.height() * (indent.len() + 1),
    );

    out.extend(std::iter::repeat('\n').take(top));
    for line in frame.lines() {
        out.push_str(&indent);
        out.push_str(line);
        out.push('\n');
    }
    out.extend(std::iter::repeat('\n').take(bottom));

    out
}
