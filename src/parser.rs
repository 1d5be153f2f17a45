//! Text format parsing for animation files.

use crate::error::{Error, Result};
use crate::{Animation, Frame};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "#";

/// Split raw animation text into frames.
///
/// ## Format
///
/// Frames are separated by `separator`. Every segment between separators
/// becomes one frame, verbatim, unless it is empty or exactly `"\n"`; those
/// are dropped. The separator is a hard boundary and never appears inside a
/// frame.
///
/// Text is taken as-is: a `"\r\n"` segment is not blank here. Files read
/// through [`crate::read_animation`] have their line endings normalised to
/// `\n` before they reach this function.
///
/// ## Example
///
/// ```rust
/// use textanim::parse_frames;
///
/// let anim = parse_frames("AAA\n#BBB\n#", "#").unwrap();
/// let frames: Vec<&str> = anim.frames().iter().map(|f| f.content()).collect();
/// assert_eq!(frames, vec!["AAA\n", "BBB\n"]);
/// ```
pub fn parse_frames(text: &str, separator: &str) -> Result<Animation> {
    if separator.is_empty() {
        return Err(Error::EmptySeparator);
    }

    Ok(text
        .split(separator)
        .filter(|segment| !is_blank_segment(segment))
        .map(Frame::from)
        .collect())
}

#[inline]
fn is_blank_segment(segment: &str) -> bool {
    segment.is_empty() || segment == "\n"
}
