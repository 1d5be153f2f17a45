//! Centering calculations for fitting an animation into the terminal.

/// Terminal dimensions in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl TerminalSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Cell displacement applied to every frame of an animation.
///
/// Either axis may be negative when the animation is larger than the
/// terminal; rendering treats negative values as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

impl Offset {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Compute the offset that centers `width` x `height` cells in `terminal`.
    ///
    /// Each axis is `terminal/2 - content/2` in exact arithmetic, truncated
    /// toward zero. That equals `(terminal - content) / 2` with integer
    /// division, which is what is evaluated here. Truncation (not flooring)
    /// matters for negative results: a difference of -3 gives -1, not -2.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use textanim::{Offset, TerminalSize};
    ///
    /// let offset = Offset::centered(TerminalSize::new(80, 24), 2, 1);
    /// assert_eq!(offset, Offset::new(39, 11));
    /// ```
    pub fn centered(terminal: TerminalSize, width: usize, height: usize) -> Self {
        Self {
            x: center_axis(terminal.width, width),
            y: center_axis(terminal.height, height),
        }
    }

    /// Whether the content spills past the left or top edge.
    #[inline]
    pub fn is_clipped(&self) -> bool {
        self.x < 0 || self.y < 0
    }

    /// Horizontal padding actually written before each line.
    #[inline]
    pub fn columns(&self) -> usize {
        usize::try_from(self.x).unwrap_or(0)
    }

    /// Blank lines actually written above the frame.
    #[inline]
    pub fn rows(&self) -> usize {
        usize::try_from(self.y).unwrap_or(0)
    }
}

#[inline]
fn center_axis(terminal: u16, content: usize) -> i64 {
    let content = i64::try_from(content).unwrap_or(i64::MAX);
    // i64 division truncates toward zero
    i64::from(terminal).saturating_sub(content) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_small_frame() {
        let offset = Offset::centered(TerminalSize::new(80, 24), 2, 1);
        assert_eq!(offset, Offset::new(39, 11));
    }

    #[test]
    fn test_exact_fit_is_origin() {
        let offset = Offset::centered(TerminalSize::new(80, 24), 80, 24);
        assert_eq!(offset, Offset::new(0, 0));
        assert!(!offset.is_clipped());
    }

    #[test]
    fn test_oversize_is_negative() {
        let offset = Offset::centered(TerminalSize::new(10, 5), 13, 10);
        // (10 - 13) / 2 truncates -1.5 to -1; (5 - 10) / 2 truncates -2.5 to -2
        assert_eq!(offset, Offset::new(-1, -2));
        assert!(offset.is_clipped());
        assert_eq!(offset.columns(), 0);
        assert_eq!(offset.rows(), 0);
    }

    #[test]
    fn test_odd_differences_truncate() {
        assert_eq!(Offset::centered(TerminalSize::new(81, 25), 2, 2), Offset::new(39, 11));
        assert_eq!(Offset::centered(TerminalSize::new(7, 7), 0, 0), Offset::new(3, 3));
    }

    #[test]
    fn test_pure_function_of_dimensions() {
        let term = TerminalSize::new(120, 40);
        let a = Offset::centered(term, 33, 9);
        let b = Offset::centered(term, 33, 9);
        assert_eq!(a, b);
        assert_eq!(a, Offset::new(43, 15));
    }
}
