use crate::config::DEFAULT_MAX_BOARD_SIZE;
use crate::Error;
use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// Linear index of a board square, numbered in row-major order.
pub type Position = usize;

/// The (at most 8) neighbours of a position.
pub type Neighbours = ArrayVec<[Position; 8]>;

/// Tiles of the board the game starts with.
const DEFAULT_TILES: [&str; 16] = [
    "E", "E", "C", "A", //
    "A", "L", "E", "P", //
    "H", "N", "B", "O", //
    "Q", "T", "T", "Y", //
];

/// The sixteen dice of the classic 4x4 game. A `Q` face is played as `QU`.
const DICE: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", //
    "DISTTY", "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ", //
];

/// Display the board as one line per row, e.g. `| E E C A |`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .tiles
            .chunks(self.size)
            .map(|row| format!("| {} |", row.join(" ")))
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            size: 4,
            tiles: DEFAULT_TILES.iter().map(|&tile| String::from(tile)).collect(),
        }
    }
}

/// Parse a board from whitespace separated tiles in row-major order.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles: Vec<&str> = s.split_whitespace().collect();
        Board::new(&tiles)
    }
}

/// A square board of N x N tiles. A tile holds one or more letters, e.g. `QU`.
///
/// Positions are numbered from 0 at the top left to N*N - 1 at the bottom
/// right, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    size: usize,
    tiles: Vec<String>,
}

/// Integer square root of `n`, if `n` is a perfect square.
fn exact_sqrt(n: usize) -> Option<usize> {
    let root = (n as f64).sqrt().round() as usize;
    if root * root == n {
        Some(root)
    } else {
        None
    }
}

impl Board {
    /// Create a board from `tiles` in row-major order. The letters `a`..`z`
    /// are stored in uppercase; other characters are kept as they are.
    /// ## Errors
    /// - If the number of tiles is not a positive perfect square.
    /// - If a tile is empty.
    /// - If the board is wider than the default maximum board size.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Board, Error};
    /// let board = Board::new(&["a", "b", "qu", "d"])?;
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.tile_at(2), Some("QU"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new<S: AsRef<str>>(tiles: &[S]) -> Result<Board, Error> {
        Board::with_max_size(tiles, DEFAULT_MAX_BOARD_SIZE)
    }

    /// Like [`new`](Board::new), with an explicit limit on the board size.
    /// ## Errors
    /// See [`new`](Board::new).
    pub fn with_max_size<S: AsRef<str>>(tiles: &[S], max_size: usize) -> Result<Board, Error> {
        let size = match exact_sqrt(tiles.len()) {
            Some(size) if size > 0 => size,
            _ => return Err(Error::InvalidTileCount(tiles.len())),
        };
        if size > max_size {
            return Err(Error::BoardTooLarge {
                size,
                max: max_size,
            });
        }
        let tiles = tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| match tile.as_ref() {
                "" => Err(Error::EmptyTile(i)),
                tile => Ok(tile.to_ascii_uppercase()),
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Board { size, tiles })
    }

    /// Create a random board of `size` x `size` tiles by rolling the dice of
    /// the classic game. Dice are reused for boards with more than 16 squares.
    /// ## Errors
    /// - If `size` is 0.
    /// - If `size` is larger than the default maximum board size.
    /// ## Examples
    /// ```
    /// # use wordsearch_solver::{Board, Error};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let board = Board::random(5, &mut rng)?;
    /// assert_eq!(board.tile_count(), 25);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Board, Error> {
        Board::random_with_max_size(size, DEFAULT_MAX_BOARD_SIZE, rng)
    }

    /// Like [`random`](Board::random), with an explicit limit on the board size.
    /// ## Errors
    /// See [`random`](Board::random).
    pub fn random_with_max_size<R: Rng + ?Sized>(
        size: usize,
        max_size: usize,
        rng: &mut R,
    ) -> Result<Board, Error> {
        if size == 0 {
            return Err(Error::InvalidTileCount(0));
        }
        let count = match size.checked_mul(size) {
            Some(count) if size <= max_size => count,
            _ => {
                return Err(Error::BoardTooLarge {
                    size,
                    max: max_size,
                })
            }
        };
        let mut tiles: Vec<String> = DICE
            .iter()
            .cycle()
            .take(count)
            .map(|die| {
                let faces = die.as_bytes();
                match faces[rng.gen_range(0..faces.len())] {
                    b'Q' => String::from("QU"),
                    face => String::from(face as char),
                }
            })
            .collect();
        tiles.shuffle(rng);
        Ok(Board { size, tiles })
    }

    /// The number of squares along one side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of squares, `size * size`.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// The tile at `position`, or `None` if it is not on the board.
    pub fn tile_at(&self, position: Position) -> Option<&str> {
        self.tiles.get(position).map(String::as_str)
    }

    /// The tile at a position known to be on the board.
    #[inline]
    pub(crate) fn tile(&self, position: Position) -> &str {
        &self.tiles[position]
    }

    /// The position at `row`, `col`, or `None` if it is not on the board.
    pub fn position(&self, row: usize, col: usize) -> Option<Position> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    /// The `(row, col)` of a position on the board. Positions past the end
    /// map to rows below the board.
    pub fn coordinates(&self, position: Position) -> (usize, usize) {
        (position / self.size, position % self.size)
    }

    /// Returns true if `a` and `b` are different squares that touch
    /// horizontally, vertically or diagonally.
    pub fn is_adjacent(&self, a: Position, b: Position) -> bool {
        if a == b || a >= self.tile_count() || b >= self.tile_count() {
            return false;
        }
        let (ra, ca) = self.coordinates(a);
        let (rb, cb) = self.coordinates(b);
        ra.max(rb) - ra.min(rb) <= 1 && ca.max(cb) - ca.min(cb) <= 1
    }

    /// The neighbours of `position` that are not in `excluding`.
    ///
    /// Neighbours are listed in row-major order: the row above from left to
    /// right, then left and right on the same row, then the row below. The
    /// path found by a search depends on this order. A position that is not
    /// on the board has no neighbours.
    pub fn adjacent_positions(&self, position: Position, excluding: &[Position]) -> Neighbours {
        let mut neighbours = Neighbours::new();
        if position >= self.tile_count() {
            return neighbours;
        }
        let (row, col) = self.coordinates(position);
        for r in row.saturating_sub(1)..=(row + 1).min(self.size - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(self.size - 1) {
                let p = r * self.size + c;
                if p != position && !excluding.contains(&p) {
                    neighbours.push(p);
                }
            }
        }
        neighbours
    }

    /// The word spelled by the tiles along `path`.
    /// ## Errors
    /// If a position of the path is not on the board.
    pub fn word_for_path(&self, path: &[Position]) -> Result<String, Error> {
        path.iter()
            .map(|&position| {
                self.tile_at(position)
                    .ok_or(Error::PositionOutOfBounds {
                        position,
                        len: self.tile_count(),
                    })
            })
            .collect()
    }

    /// Human readable representation of the board, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
