//! Core data structures for text frames.

use unicode_width::UnicodeWidthChar;

/// One block of text shown for a single delay interval.
///
/// Lines are split on `\n` exactly, so a trailing newline contributes a
/// trailing empty line: `"AAA\n"` is 3 cells wide and 2 lines tall.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    content: String,
}

impl Frame {
    /// Create a frame from its verbatim text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The verbatim text of this frame.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Iterate over the frame's lines.
    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.content.split('\n')
    }

    /// Display width of the longest line, in terminal cells.
    ///
    /// Wide glyphs count as two cells. Tabs and other control characters
    /// count as one cell each, the same as any narrow character; tab stops
    /// are not expanded.
    pub fn width(&self) -> usize {
        self.lines().map(line_width).max().unwrap_or(0)
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines().count()
    }

    /// Get the frame dimensions as (columns, rows).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }
}

fn line_width(line: &str) -> usize {
    // `width()` is None for control characters
    line.chars().map(|c| c.width().unwrap_or(1)).sum()
}

impl From<&str> for Frame {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Frame {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

/// An ordered sequence of frames; insertion order is playback order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    frames: Vec<Frame>,
}

impl Animation {
    /// Build an animation that owns `frames`.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Width of the widest frame, or 0 for an empty animation.
    pub fn width(&self) -> usize {
        self.frames.iter().map(Frame::width).max().unwrap_or(0)
    }

    /// Height of the tallest frame, or 0 for an empty animation.
    pub fn height(&self) -> usize {
        self.frames.iter().map(Frame::height).max().unwrap_or(0)
    }

    /// Overall (width, height), scanning the frames once.
    pub fn dimensions(&self) -> (usize, usize) {
        self.frames.iter().fold((0, 0), |(w, h), frame| {
            let (fw, fh) = frame.dimensions();
            (w.max(fw), h.max(fh))
        })
    }
}

impl FromIterator<Frame> for Animation {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
