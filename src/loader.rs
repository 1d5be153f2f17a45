//! Reading animation files from disk.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::{parse_frames, Animation};

/// Read an animation text file and split it into frames on `separator`.
///
/// The whole file is read as UTF-8 before parsing; a read failure yields
/// [`Error::Read`] and no frames. Line endings are normalised first: `\r\n`
/// and lone `\r` both become `\n`, so a CRLF file splits into the same
/// frames as its LF equivalent.
pub fn read_animation(path: impl AsRef<Path>, separator: &str) -> Result<Animation> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let animation = parse_frames(&normalize_newlines(&text), separator)?;
    tracing::debug!(
        path = %path.display(),
        bytes = text.len(),
        frames = animation.frame_count(),
        "loaded animation"
    );
    Ok(animation)
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
