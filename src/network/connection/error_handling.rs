//! Classification of line transport errors.

use tokio_util::codec::LinesCodecError;

/// Classification of transport read errors for appropriate handling.
pub(super) enum ReadErrorAction {
    /// Line too long - reply 417 and continue. The codec has already
    /// discarded the rest of the line.
    InputTooLong,
    /// I/O error or invalid UTF-8 - connection is unusable, disconnect.
    Disconnect,
}

/// Classify a transport read error into an actionable category.
pub(super) fn classify_read_error(e: &LinesCodecError) -> ReadErrorAction {
    match e {
        LinesCodecError::MaxLineLengthExceeded => ReadErrorAction::InputTooLong,
        LinesCodecError::Io(_) => ReadErrorAction::Disconnect,
    }
}
