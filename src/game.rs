use crate::board::Board;
use crate::config::Config;
use crate::lexicon::Lexicon;
use crate::score::score_words;
use crate::search::{all_scorable_words, locate, Path};
use crate::Error;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Display the current board.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// The state of a word search game:
/// * The lexicon of valid words, once loaded,
/// * The current board, which starts as a fixed 4x4 board,
/// * The configured limits.
///
/// Every query that needs the lexicon fails with
/// [`LexiconNotLoaded`](Error::LexiconNotLoaded) until one is loaded.
#[derive(Debug, Clone, Default)]
pub struct Game {
    lexicon: Option<Lexicon>,
    board: Board,
    config: Config,
}

fn check_minimum_word_length(minimum_word_length: usize) -> Result<(), Error> {
    if minimum_word_length < 1 {
        return Err(Error::InvalidMinimumWordLength(minimum_word_length));
    }
    Ok(())
}

impl Game {
    /// Create a game with the default board and no lexicon.
    /// ## Errors
    /// - If the configured minimum word length is 0.
    /// - If the configured maximum board size does not fit the default board.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Config, Error, Game};
    /// let game = Game::new(Config::default())?;
    /// assert!(game.lexicon().is_err());
    /// assert!(Game::new(Config::new().with_max_board_size(3)).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    /// Additional builder functions can be used to set the lexicon and board.
    /// See also:
    /// - [`with_lexicon_from_file`](Game::with_lexicon_from_file)
    /// - [`with_lexicon_from_words`](Game::with_lexicon_from_words)
    /// - [`with_board`](Game::with_board)
    pub fn new(config: Config) -> Result<Game, Error> {
        check_minimum_word_length(config.minimum_word_length)?;
        let board = Board::default();
        if board.size() > config.max_board_size {
            return Err(Error::BoardTooLarge {
                size: board.size(),
                max: config.max_board_size,
            });
        }
        Ok(Game {
            lexicon: None,
            board,
            config,
        })
    }

    /// Load the lexicon from `path`, and return the modified game.
    /// ## Errors
    /// If the file can not be read.
    pub fn with_lexicon_from_file(mut self, path: &str) -> Result<Game, Error> {
        self.load_lexicon(path)?;
        Ok(self)
    }

    /// Build the lexicon from a list of words, and return the modified game.
    #[must_use]
    pub fn with_lexicon_from_words(mut self, words: &[&str]) -> Game {
        self.set_lexicon(Lexicon::from_words(words));
        self
    }

    /// Replace the board, and return the modified game.
    /// ## Errors
    /// See [`set_board`](Game::set_board).
    pub fn with_board<S: AsRef<str>>(mut self, tiles: &[S]) -> Result<Game, Error> {
        self.set_board(tiles)?;
        Ok(self)
    }

    /// Load the lexicon from a file with whitespace separated words.
    /// If loading fails, the lexicon loaded before (if any) stays in use.
    /// ## Errors
    /// If the file can not be read.
    pub fn load_lexicon(&mut self, path: &str) -> Result<(), Error> {
        let lexicon = Lexicon::from_file(path)?;
        self.set_lexicon(lexicon);
        Ok(())
    }

    /// Use `lexicon` for all following queries.
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.lexicon = Some(lexicon);
    }

    /// Replace the board with `tiles`, given in row-major order.
    /// ## Errors
    /// - If the number of tiles is not a positive perfect square.
    /// - If a tile is empty.
    /// - If the board is larger than the configured maximum board size.
    ///
    /// The current board is kept on error.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Game, ErrorKind};
    /// let mut game = Game::default();
    /// let err = game.set_board(&["A", "B", "C", "D", "E"]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn set_board<S: AsRef<str>>(&mut self, tiles: &[S]) -> Result<(), Error> {
        self.board = Board::with_max_size(tiles, self.config.max_board_size)?;
        debug!(size = self.board.size(), "board replaced");
        Ok(())
    }

    /// A printable representation of the board.
    pub fn render(&self) -> String {
        self.board.render()
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configured limits.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The loaded lexicon.
    /// ## Errors
    /// If no lexicon has been loaded.
    pub fn lexicon(&self) -> Result<&Lexicon, Error> {
        self.lexicon.as_ref().ok_or(Error::LexiconNotLoaded)
    }

    /// All words on the board with at least `minimum_word_length` characters
    /// that are in the lexicon, in sorted order.
    /// ## Errors
    /// - If `minimum_word_length` is 0.
    /// - If no lexicon has been loaded.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Game, Error};
    /// let game = Game::default().with_lexicon_from_words(&["ace", "lea", "leap", "zoo"]);
    /// let words = game.all_scorable_words(3)?;
    /// assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["ACE", "LEA", "LEAP"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn all_scorable_words(&self, minimum_word_length: usize) -> Result<BTreeSet<String>, Error> {
        check_minimum_word_length(minimum_word_length)?;
        let lexicon = self.lexicon()?;
        let words = all_scorable_words(lexicon, &self.board, minimum_word_length);
        debug!(count = words.len(), minimum_word_length, "scorable words found");
        Ok(words)
    }

    /// The total score of `words` on the current board. Each word that has
    /// at least `minimum_word_length` characters, is in the lexicon and is on
    /// the board scores one point plus one per extra character.
    /// ## Errors
    /// - If `minimum_word_length` is 0.
    /// - If no lexicon has been loaded.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Game, Error};
    /// let game = Game::default().with_lexicon_from_words(&["ace", "leap"]);
    /// assert_eq!(game.score_for_words(&["ACE", "LEAP", "ZOO"], 3)?, 3);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn score_for_words<I, S>(&self, words: I, minimum_word_length: usize) -> Result<usize, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_minimum_word_length(minimum_word_length)?;
        let lexicon = self.lexicon()?;
        Ok(score_words(lexicon, &self.board, words, minimum_word_length))
    }

    /// Returns true if `word` is in the lexicon.
    /// ## Errors
    /// If no lexicon has been loaded.
    pub fn is_valid_word(&self, word: &str) -> Result<bool, Error> {
        Ok(self.lexicon()?.contains_word(word))
    }

    /// Returns true if some word in the lexicon starts with `prefix`.
    /// ## Errors
    /// If no lexicon has been loaded.
    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool, Error> {
        Ok(self.lexicon()?.has_prefix(prefix))
    }

    /// The positions that spell `word` on the board, or an empty path if the
    /// word is not on the board. The word does not need to be in the lexicon.
    /// ## Errors
    /// If no lexicon has been loaded.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Game, Error};
    /// let game = Game::default().with_lexicon_from_words(&["ace"]);
    /// assert_eq!(game.is_on_board("ACE")?, vec![3, 2, 1]);
    /// assert!(game.is_on_board("ZOO")?.is_empty());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_on_board(&self, word: &str) -> Result<Path, Error> {
        self.lexicon()?;
        Ok(locate(&self.board, word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    type Result<T> = std::result::Result<T, Error>;

    fn game() -> Game {
        Game::default().with_lexicon_from_words(&["ace", "lea", "leap", "pea", "eel"])
    }

    #[test]
    fn test_not_loaded() {
        let game = Game::default();
        for err in [
            game.is_valid_word("ACE").unwrap_err(),
            game.is_valid_prefix("A").unwrap_err(),
            game.is_on_board("ACE").unwrap_err(),
            game.all_scorable_words(3).unwrap_err(),
            game.score_for_words(&["ACE"], 3).unwrap_err(),
        ]
        .iter()
        {
            assert!(matches!(err, Error::LexiconNotLoaded));
            assert_eq!(err.kind(), ErrorKind::IllegalState);
        }
    }

    #[test]
    fn test_minimum_word_length_checked_first() {
        let err = Game::default().all_scorable_words(0).unwrap_err();
        assert!(matches!(err, Error::InvalidMinimumWordLength(0)));
        let err = game().score_for_words(&["ACE"], 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_set_board() -> Result<()> {
        let mut game = game();
        assert!(game.is_valid_word("ace")?);
        game.set_board(&["l", "e", "a", "p"])?;
        assert_eq!(game.render(), "| L E |\n| A P |");
        assert!(game.is_on_board("ACE")?.is_empty());
        let words: Vec<String> = game.all_scorable_words(3)?.into_iter().collect();
        assert_eq!(words, vec!["LEA", "LEAP", "PEA"]);
        // the lexicon survives board changes
        assert!(game.is_valid_word("ace")?);
        Ok(())
    }

    #[test]
    fn test_set_board_error_keeps_board() {
        let mut game = game();
        assert!(matches!(
            game.set_board(&["A", "B", "C", "D", "E"]),
            Err(Error::InvalidTileCount(5))
        ));
        assert_eq!(game.board(), &Board::default());
    }

    #[test]
    fn test_max_board_size() -> Result<()> {
        let mut game = Game::new(Config::new().with_max_board_size(4))?;
        assert!(game.set_board(&["A"; 16]).is_ok());
        let err = game.set_board(&["A"; 25]).unwrap_err();
        assert!(matches!(err, Error::BoardTooLarge { size: 5, max: 4 }));
        assert_eq!(game.board().size(), 4);
        Ok(())
    }

    #[test]
    fn test_new_checks_config() {
        let err = Game::new(Config::new().with_max_board_size(3)).unwrap_err();
        assert!(matches!(err, Error::BoardTooLarge { size: 4, max: 3 }));
        let err = Game::new(Config::new().with_minimum_word_length(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidMinimumWordLength(0)));
        assert!(Game::new(Config::default()).is_ok());
    }

    #[test]
    fn test_case_folding_does_not_expand() -> Result<()> {
        let game = Game::default()
            .with_lexicon_from_words(&["straße"])
            .with_board(&["S", "T", "R", "S", "S", "A", "E", "X", "X"])?;
        assert!(!game.is_valid_word("STRASSE")?);
        assert!(!game.is_valid_word("straße")?);
        assert_eq!(game.score_for_words(&["straße", "strasse"], 3)?, 0);
        Ok(())
    }

    #[test]
    fn test_failed_load_keeps_lexicon() {
        let mut game = game();
        assert!(game.load_lexicon("no/such/file.txt").is_err());
        assert_eq!(game.lexicon().map(Lexicon::word_count).ok(), Some(5));
    }

    #[test]
    fn test_display() {
        let game = Game::default();
        assert_eq!(game.to_string(), game.render());
        assert_eq!(game.render().lines().count(), 4);
    }
}
