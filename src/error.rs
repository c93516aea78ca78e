use crate::geometry::Position;

/// Errors raised while applying pointer, tool or text events to the board.
///
/// These correspond to programmer errors rather than user mistakes: the
/// toolbar only offers valid tools, so an error here means the editor was
/// driven into a state it should never reach.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BoardError {
    /// No element with this id exists in the document
    #[error("no element with id {0}")]
    UnknownElement(usize),

    /// The grabbed position cannot resize this kind of shape
    #[error("cannot resize a {shape} through {position:?}")]
    HandleMismatch {
        shape: &'static str,
        position: Position,
    },

    /// A move/resize was requested without a grabbed element
    #[error("{action} requires a selected element")]
    NoSelection { action: &'static str },

    /// Text was committed while no text box was open
    #[error("no pending text entry to commit")]
    NoTextEntry,
}

/// Errors raised while loading a [`crate::BoardConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
