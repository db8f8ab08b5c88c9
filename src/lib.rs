//! A word search library for Rust.
//! <br>
//! This crate finds all dictionary words on a square board of letter tiles,
//! in the manner of the well known 4x4 dice game. A word is spelled by a path
//! of horizontally, vertically or diagonally adjacent tiles, using each tile
//! at most once. A tile may hold more than one letter, e.g. `QU`.
//!
//! It can use the `rayon` crate to search from all squares of a board in parallel.
//!
//! # How to use `wordsearch_solver`
//! Start by creating a [`Game`], then load the lexicon, and set the tiles on the board.
//! By default a fixed 4x4 board is used.
//! The lexicon file must be in utf-8 and contain whitespace separated words.
//! Words are stored in uppercase; only the letters `A`..`Z` and `-` are supported.
//!
//! # Basic usage
//!  ```
//! # use wordsearch_solver::{Game, Error};
//! let mut game = Game::default().with_lexicon_from_words(&["rust", "rut", "stun"]);
//! game.set_board(&["R", "U", "S", "N", "T", "A", "E", "K", "O"])?;
//! let words = game.all_scorable_words(3)?;
//! assert_eq!(words.len(), 3);
//! for word in &words {
//!     println!("{} {:?}", word, game.is_on_board(word)?);
//! }
//! assert_eq!(game.score_for_words(&words, 3)?, 5);
//! println!("{}", game);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod config;
mod error;
mod game;
mod labelset;
mod lexicon;
mod score;
mod search;

pub use crate::board::{Board, Neighbours, Position};
pub use crate::config::{Config, DEFAULT_MAX_BOARD_SIZE, DEFAULT_MINIMUM_WORD_LENGTH};
pub use crate::error::{Error, ErrorKind};
pub use crate::game::Game;
pub use crate::labelset::Label;
pub use crate::lexicon::{Lexicon, TrieNode};
pub use crate::score::{score_words, word_points};
pub use crate::search::{all_scorable_words, locate, scorable_words_from, Path};
