use crate::board::Board;
use crate::lexicon::Lexicon;
use crate::search::{locate, word_length};

/// Points for a word of `length` characters: one for reaching the minimum,
/// plus one for every character beyond it.
#[inline]
pub fn word_points(length: usize, minimum_word_length: usize) -> usize {
    length + 1 - minimum_word_length
}

/// The total score of `words`. A word scores only if it has at least
/// `minimum_word_length` characters, is in the lexicon, and can be spelled
/// on the board. Words that do not score are ignored.
pub fn score_words<I, S>(
    lexicon: &Lexicon,
    board: &Board,
    words: I,
    minimum_word_length: usize,
) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|word| {
            let word = word.as_ref();
            let length = word_length(word);
            if length >= minimum_word_length
                && lexicon.contains_word(word)
                && !locate(board, word).is_empty()
            {
                Some(word_points(length, minimum_word_length))
            } else {
                None
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_points() {
        assert_eq!(word_points(3, 3), 1);
        assert_eq!(word_points(5, 3), 3);
        assert_eq!(word_points(4, 1), 4);
    }

    #[test]
    fn test_score_words() {
        let lexicon = Lexicon::from_words(&["ace", "leap", "lea", "cap", "peal", "toy"]);
        let board = Board::default();
        // ACE 1, LEAP 2, LEA 1; PEAL is not on the board, ZOO not in the lexicon
        let words = &["ACE", "LEAP", "LEA", "PEAL", "ZOO"];
        assert_eq!(score_words(&lexicon, &board, words, 3), 4);
        // LEA and ACE are too short
        assert_eq!(score_words(&lexicon, &board, words, 4), 1);
        assert_eq!(score_words(&lexicon, &board, words, 1), 3 + 4 + 3);
    }

    #[test]
    fn test_score_nothing() {
        let lexicon = Lexicon::from_words(&["ace"]);
        let board = Board::default();
        let empty: [&str; 0] = [];
        assert_eq!(score_words(&lexicon, &board, &empty, 3), 0);
        assert_eq!(score_words(&lexicon, &board, &["ZOO", "PEAL"], 3), 0);
    }

    #[test]
    fn test_score_ignores_case() {
        let lexicon = Lexicon::from_words(&["ace"]);
        let board = Board::default();
        assert_eq!(score_words(&lexicon, &board, vec![String::from("ace")], 3), 1);
    }
}
