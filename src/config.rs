#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest board side accepted unless configured otherwise.
pub const DEFAULT_MAX_BOARD_SIZE: usize = 32;

/// Minimum word length used when none is given.
pub const DEFAULT_MINIMUM_WORD_LENGTH: usize = 3;

/// Limits and defaults of a [`Game`](crate::Game).
///
/// The search runs on an explicit stack, so the board size is not limited by
/// the call stack, but the number of paths grows exponentially with it.
/// ## Examples
/// ```
/// use wordsearch_solver::Config;
/// let config = Config::new().with_max_board_size(8).with_minimum_word_length(4);
/// assert_eq!(config.max_board_size, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Boards with more squares along a side are rejected.
    pub max_board_size: usize,
    /// Minimum word length for callers that do not pass one.
    pub minimum_word_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_board_size: DEFAULT_MAX_BOARD_SIZE,
            minimum_word_length: DEFAULT_MINIMUM_WORD_LENGTH,
        }
    }
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    #[must_use]
    pub fn with_max_board_size(mut self, max_board_size: usize) -> Config {
        self.max_board_size = max_board_size;
        self
    }

    #[must_use]
    pub fn with_minimum_word_length(mut self, minimum_word_length: usize) -> Config {
        self.minimum_word_length = minimum_word_length;
        self
    }
}
