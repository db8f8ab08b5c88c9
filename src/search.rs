//! Depth first searches over simple paths on the board.
//!
//! Both searches keep an explicit stack with one frame per square on the
//! current path. A frame owns the iterator over the neighbours of its square
//! that were not on the path when the square was entered, so backtracking is
//! a pop and nothing is shared between start squares.
use crate::board::{Board, Neighbours, Position};
use crate::lexicon::{Lexicon, TrieNode};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::BTreeSet;
use tinyvec::ArrayVecIterator;

/// An ordered list of distinct, adjacent board positions.
pub type Path = Vec<Position>;

type NeighbourIter = ArrayVecIterator<[Position; 8]>;

/// Length of a word in characters.
#[inline]
pub(crate) fn word_length(word: &str) -> usize {
    word.chars().count()
}

struct Frame<'a> {
    /// Lexicon node reached by the word so far
    node: &'a TrieNode,
    /// Byte length of the word when this frame was pushed
    word_len: usize,
    neighbours: NeighbourIter,
}

fn neighbours(board: &Board, position: Position, path: &[Position]) -> NeighbourIter {
    let neighbours: Neighbours = board.adjacent_positions(position, path);
    neighbours.into_iter()
}

/// Add every lexicon word of at least `minimum_word_length` characters that
/// is spelled by a simple path beginning at `start` to `found`.
///
/// A path is only extended while its word is a prefix of some lexicon word.
pub fn scorable_words_from(
    lexicon: &Lexicon,
    board: &Board,
    start: Position,
    minimum_word_length: usize,
    found: &mut BTreeSet<String>,
) {
    let tile = board.tile(start);
    let node = match lexicon.root().walk(tile) {
        Some(node) => node,
        None => return,
    };
    let mut word = String::from(tile);
    let mut path: Path = vec![start];
    if node.terminal() && word_length(&word) >= minimum_word_length {
        found.insert(word.clone());
    }
    let mut stack = vec![Frame {
        node,
        word_len: word.len(),
        neighbours: neighbours(board, start, &path),
    }];

    loop {
        let (node, next) = match stack.last_mut() {
            Some(frame) => (frame.node, frame.neighbours.next()),
            None => break,
        };
        match next {
            Some(position) => {
                let tile = board.tile(position);
                // prune: no lexicon word continues with this tile
                let child = match node.walk(tile) {
                    Some(child) => child,
                    None => continue,
                };
                word.push_str(tile);
                path.push(position);
                if child.terminal() && word_length(&word) >= minimum_word_length {
                    found.insert(word.clone());
                }
                stack.push(Frame {
                    node: child,
                    word_len: word.len(),
                    neighbours: neighbours(board, position, &path),
                });
            }
            None => {
                stack.pop();
                path.pop();
                if let Some(frame) = stack.last() {
                    word.truncate(frame.word_len);
                }
            }
        }
    }
}

/// All lexicon words of at least `minimum_word_length` characters that can
/// be spelled by a simple path on `board`, sorted and without duplicates.
#[cfg(not(feature = "rayon"))]
pub fn all_scorable_words(
    lexicon: &Lexicon,
    board: &Board,
    minimum_word_length: usize,
) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for start in 0..board.tile_count() {
        scorable_words_from(lexicon, board, start, minimum_word_length, &mut found);
    }
    found
}

/// All lexicon words of at least `minimum_word_length` characters that can
/// be spelled by a simple path on `board`, sorted and without duplicates.
/// Start squares are searched in parallel.
#[cfg(feature = "rayon")]
pub fn all_scorable_words(
    lexicon: &Lexicon,
    board: &Board,
    minimum_word_length: usize,
) -> BTreeSet<String> {
    (0..board.tile_count())
        .into_par_iter()
        .map(|start| {
            let mut found = BTreeSet::new();
            scorable_words_from(lexicon, board, start, minimum_word_length, &mut found);
            found
        })
        .reduce(BTreeSet::new, |mut a, b| {
            a.extend(b);
            a
        })
}

/// The first simple path beginning at `start` whose tiles spell `target`.
/// `target` must be uppercase and not empty.
fn locate_from(board: &Board, target: &str, start: Position) -> Option<Path> {
    let tile = board.tile(start);
    if !target.starts_with(tile) {
        return None;
    }
    let mut path: Path = vec![start];
    if tile.len() == target.len() {
        return Some(path);
    }
    // each frame holds the byte length of the target matched so far
    let mut stack: Vec<(usize, NeighbourIter)> =
        vec![(tile.len(), neighbours(board, start, &path))];

    loop {
        let (matched, next) = match stack.last_mut() {
            Some((matched, iter)) => (*matched, iter.next()),
            None => return None,
        };
        match next {
            Some(position) => {
                let tile = board.tile(position);
                if !target[matched..].starts_with(tile) {
                    continue;
                }
                path.push(position);
                let matched = matched + tile.len();
                if matched == target.len() {
                    return Some(path);
                }
                stack.push((matched, neighbours(board, position, &path)));
            }
            None => {
                stack.pop();
                path.pop();
            }
        }
    }
}

/// The path of positions that spells `word` on `board`, or an empty path if
/// there is none. The comparison ignores the case of `a`..`z`.
///
/// Start squares are tried in position order and neighbours in the order of
/// [`Board::adjacent_positions`]; the first complete path is returned.
pub fn locate(board: &Board, word: &str) -> Path {
    let target = word.to_ascii_uppercase();
    if target.is_empty() {
        return Path::new();
    }
    (0..board.tile_count())
        .find_map(|start| locate_from(board, &target, start))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    type Result<T> = std::result::Result<T, Error>;

    fn assert_valid_path(board: &Board, path: &[Position], word: &str) {
        assert_eq!(board.word_for_path(path).unwrap(), word);
        for (i, p) in path.iter().enumerate() {
            assert!(!path[i + 1..].contains(p), "{:?} repeats {}", path, p);
        }
        for pair in path.windows(2) {
            assert!(board.is_adjacent(pair[0], pair[1]), "{:?}", path);
        }
    }

    #[test]
    fn test_all_scorable_words() {
        let lexicon = Lexicon::from_words(&[
            "ace", "aces", "lea", "leap", "pea", "peal", "bone", "boy", "toy", "tot", "ant",
            "eel", "cap",
        ]);
        let board = Board::default();
        let words: Vec<String> = all_scorable_words(&lexicon, &board, 3).into_iter().collect();
        // ACES, PEAL, BONE and TOT are not on the board
        assert_eq!(
            words,
            vec!["ACE", "ANT", "BOY", "CAP", "EEL", "LEA", "LEAP", "PEA", "TOY"]
        );
        let words: Vec<String> = all_scorable_words(&lexicon, &board, 4).into_iter().collect();
        assert_eq!(words, vec!["LEAP"]);
    }

    #[test]
    fn test_no_reuse_of_squares() -> Result<()> {
        let lexicon = Lexicon::from_words(&["aa", "aaa", "aaaa", "aaaaa"]);
        let board = Board::new(&["A", "A", "B", "A"])?;
        let words: Vec<String> = all_scorable_words(&lexicon, &board, 1).into_iter().collect();
        assert_eq!(words, vec!["AA", "AAA"]);
        Ok(())
    }

    #[test]
    fn test_multi_letter_tiles() -> Result<()> {
        let lexicon = Lexicon::from_words(&["quit", "quits", "it", "qi"]);
        let board = Board::new(&["QU", "I", "S", "T"])?;
        let words: Vec<String> = all_scorable_words(&lexicon, &board, 2).into_iter().collect();
        // QI is not on the board, QU is a single tile
        assert_eq!(words, vec!["IT", "QUIT", "QUITS"]);
        let path = locate(&board, "quits");
        assert_eq!(path, vec![0, 1, 3, 2]);
        assert!(locate(&board, "qi").is_empty());
        Ok(())
    }

    #[test]
    fn test_unsupported_tile_is_pruned() -> Result<()> {
        let lexicon = Lexicon::from_words(&["ab", "b-a"]);
        let board = Board::new(&["A", "B", "?", "-"])?;
        let words: Vec<String> = all_scorable_words(&lexicon, &board, 1).into_iter().collect();
        assert_eq!(words, vec!["AB", "B-A"]);
        Ok(())
    }

    #[test]
    fn test_locate() {
        let board = Board::default();
        let path = locate(&board, "ACE");
        assert_eq!(path.len(), 3);
        assert_valid_path(&board, &path, "ACE");
        // first start square in position order, first neighbour in row-major order
        assert_eq!(path, vec![3, 2, 1]);
        assert_eq!(locate(&board, "ace"), path);
    }

    #[test]
    fn test_locate_folds_ascii_only() -> Result<()> {
        let board = Board::new(&["S", "T", "R", "S", "S", "A", "E", "X", "X"])?;
        assert_eq!(locate(&board, "strasse"), vec![0, 1, 2, 5, 4, 3, 6]);
        // 'ß' does not become "SS"
        assert!(locate(&board, "straße").is_empty());
        Ok(())
    }

    #[test]
    fn test_locate_backtracks() -> Result<()> {
        let board = Board::new(&["A", "B", "X", "X", "A", "X", "X", "B", "C"])?;
        // the B next to the first A leads nowhere, as does the first B next to the second A
        let path = locate(&board, "ABC");
        assert_valid_path(&board, &path, "ABC");
        assert_eq!(path, vec![4, 7, 8]);
        let board = Board::default();
        let path = locate(&board, "PEEL");
        assert_valid_path(&board, &path, "PEEL");
        assert_eq!(path, vec![7, 6, 1, 5]);
        Ok(())
    }

    #[test]
    fn test_locate_not_found() {
        let board = Board::default();
        assert!(locate(&board, "HOT").is_empty());
        // needs the single L twice
        assert!(locate(&board, "LEEL").is_empty());
        assert!(locate(&board, "EECAEE").is_empty());
        assert!(locate(&board, "ZOO").is_empty());
        assert!(locate(&board, "").is_empty());
    }

    #[test]
    fn test_locate_single_tile() -> Result<()> {
        let board = Board::new(&["QU"])?;
        assert_eq!(locate(&board, "QU"), vec![0]);
        assert!(locate(&board, "Q").is_empty());
        assert!(locate(&board, "QUQU").is_empty());
        Ok(())
    }

    #[test]
    fn test_found_words_are_located() {
        let lexicon = Lexicon::from_words(&[
            "eel", "elan", "lean", "peel", "plea", "bent", "then", "hat", "thy", "tot",
        ]);
        let board = Board::default();
        for word in all_scorable_words(&lexicon, &board, 3) {
            let path = locate(&board, &word);
            assert_valid_path(&board, &path, &word);
        }
    }
}
