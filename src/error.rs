use thiserror::Error;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an argument that can never be valid.
    InvalidArgument,
    /// The call is not valid in the current state of the game.
    IllegalState,
}

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading the lexicon file
    #[error("Lexicon \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// The number of tiles is not a positive perfect square
    #[error("Invalid number of tiles {0} (expect a positive perfect square)")]
    InvalidTileCount(usize),

    /// A tile without any letters
    #[error("Empty tile at position {0}")]
    EmptyTile(usize),

    /// The board is larger than the configured maximum
    #[error("Board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },

    /// Minimum word length must be at least 1
    #[error("Invalid minimum word length {0} (expect at least 1)")]
    InvalidMinimumWordLength(usize),

    /// Position is not on the board
    #[error("Position {position} is out of bounds for a board of {len} tiles")]
    PositionOutOfBounds { position: usize, len: usize },

    /// A dictionary query was made before a lexicon was loaded
    #[error("No lexicon has been loaded")]
    LexiconNotLoaded,
}

impl Error {
    /// Returns whether this error is a bad argument or a bad state.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LexiconNotLoaded => ErrorKind::IllegalState,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
