mod trie;

pub use self::trie::TrieNode;
use crate::labelset::{classify, label_char, Label};
use crate::Error;
use std::fmt;
use std::fs::read_to_string;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A prefix tree that holds all the words of the game dictionary.
///
/// Words are stored in uppercase. The supported characters are `A`..`Z` and
/// `-`; the letters `a`..`z` of a query are uppercased before lookup, and a
/// query containing any other character never matches.
pub struct Lexicon {
    root: TrieNode,
    /// Path of the file used to build the lexicon.
    /// Empty if the lexicon is not built from a file.
    source: String,
    word_count: usize,
    node_count: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::new()
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words, {} nodes from '{}'>",
            self.word_count, self.node_count, self.source
        )
    }
}

/// Translate `word` to labels, or `None` if it has a character the lexicon
/// can not hold. Case is folded per character, so a character never expands
/// into letters.
fn encode(word: &str) -> Option<Vec<Label>> {
    word.chars()
        .map(|ch| classify(ch.to_ascii_uppercase()))
        .collect()
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Lexicon {
        Lexicon {
            root: TrieNode::new(),
            source: String::new(),
            word_count: 0,
            node_count: 1,
        }
    }

    /// Build a lexicon from a list of words. Words that can not be stored
    /// are skipped.
    /// ## Examples
    /// ```
    /// use wordsearch_solver::Lexicon;
    /// let lexicon = Lexicon::from_words(&["ace", "aces", "x-ray"]);
    /// assert_eq!(lexicon.word_count(), 3);
    /// assert!(lexicon.contains_word("ACE"));
    /// assert!(lexicon.has_prefix("X-"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        let mut skipped = 0;
        for word in words {
            if !lexicon.insert(word.as_ref()) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            debug!(skipped, "skipped words with unsupported characters");
        }
        lexicon
    }

    /// Read the lexicon from a file. The file must be encoded in utf-8; every
    /// whitespace separated token is one word.
    /// ## Errors
    /// If the file can not be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, Error> {
        let path = path.as_ref();
        let contents = read_to_string(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let mut lexicon = Lexicon::from_words(contents.split_whitespace());
        lexicon.source = path.display().to_string();
        info!(
            words = lexicon.word_count,
            nodes = lexicon.node_count,
            source = %lexicon.source,
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Insert `word` in uppercase. Returns `false` if the word is empty or
    /// contains a character that is not `A`..`Z` or `-` (in any case); such
    /// words are not stored. Inserting a word twice has no further effect.
    pub fn insert(&mut self, word: &str) -> bool {
        let labels = match encode(word) {
            Some(labels) if !labels.is_empty() => labels,
            _ => {
                debug!(word, "word not inserted");
                return false;
            }
        };
        if self.root.find(&labels).map_or(false, TrieNode::terminal) {
            return true;
        }
        self.node_count += self.root.insert(&labels);
        self.word_count += 1;
        true
    }

    /// Returns true if `word` is in the lexicon.
    pub fn contains_word(&self, word: &str) -> bool {
        self.node(word).map_or(false, TrieNode::terminal)
    }

    /// Returns true if at least one word in the lexicon starts with `prefix`.
    /// The empty prefix is never valid.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.node(prefix).is_some()
    }

    fn node(&self, word: &str) -> Option<&TrieNode> {
        encode(word).and_then(|labels| self.root.find(labels))
    }

    /// The root of the prefix tree.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Path of the file the lexicon was read from, if any.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The number of distinct words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// All words in the lexicon, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut word = String::new();
        let mut stack = vec![(0, self.root.children())];
        loop {
            let (len, next) = match stack.last_mut() {
                Some((len, children)) => (*len, children.next()),
                None => break,
            };
            match next {
                Some((label, child)) => {
                    word.truncate(len);
                    word.push(label_char(label));
                    if child.terminal() {
                        words.push(word.clone());
                    }
                    stack.push((len + 1, child.children()));
                }
                None => {
                    stack.pop();
                }
            }
        }
        // trie order puts '-' after 'Z'
        words.sort();
        words
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_lexicon() -> Lexicon {
        Lexicon::from_words(WORDS)
    }

    #[test]
    fn test_counts() {
        let lexicon = test_lexicon();
        assert_eq!(lexicon.word_count(), 11);
        assert_eq!(lexicon.node_count(), 17);
        assert_eq!(
            lexicon.to_string(),
            "<Lexicon: 11 words, 17 nodes from ''>"
        );
    }

    #[test]
    fn test_node_count_shares_prefixes() {
        let mut lexicon = Lexicon::from_words(&["tea", "ten"]);
        // root, T, E, A, N
        assert_eq!(lexicon.node_count(), 5);
        assert!(lexicon.insert("ten"));
        assert!(lexicon.insert("te"));
        assert_eq!(lexicon.node_count(), 5);
        assert_eq!(lexicon.word_count(), 3);
    }

    #[test]
    fn test_contains_word() {
        let lexicon = test_lexicon();
        for &word in WORDS {
            assert!(lexicon.contains_word(word));
            assert!(lexicon.contains_word(&word.to_uppercase()));
        }
        assert!(!lexicon.contains_word("be"));
        assert!(!lexicon.contains_word("belts"));
        assert!(!lexicon.contains_word(""));
    }

    #[test]
    fn test_has_prefix() {
        let lexicon = test_lexicon();
        assert!(lexicon.has_prefix("b"));
        assert!(lexicon.has_prefix("BE"));
        // a complete word is also a prefix
        assert!(lexicon.has_prefix("belt"));
        assert!(!lexicon.has_prefix("belts"));
        assert!(!lexicon.has_prefix("c"));
        assert!(!lexicon.has_prefix(""));
    }

    #[test]
    fn test_unsupported_characters() {
        let mut lexicon = Lexicon::from_words(&["x-ray", "don't", "café", ""]);
        assert_eq!(lexicon.word_count(), 1);
        assert!(lexicon.contains_word("X-RAY"));
        assert!(!lexicon.insert("it's"));
        // the apostrophe is not skipped: the query is rejected
        assert!(!lexicon.contains_word("x-r'ay"));
        assert!(!lexicon.has_prefix("x'"));
        assert!(!lexicon.has_prefix("caf"));
    }

    #[test]
    fn test_no_case_expansion() {
        let mut lexicon = Lexicon::from_words(&["straße", "STRAẞE"]);
        assert_eq!(lexicon.word_count(), 0);
        assert!(!lexicon.insert("straße"));
        assert!(!lexicon.contains_word("STRASSE"));
        assert!(!lexicon.contains_word("straße"));
        assert!(!lexicon.has_prefix("STRASS"));
        // dotted and dotless i are not letters of the alphabet either
        assert!(!lexicon.insert("İt"));
        assert!(!lexicon.insert("ıt"));
    }

    #[test]
    fn test_insert_idempotent() {
        let mut lexicon = test_lexicon();
        let before = lexicon.clone();
        assert!(lexicon.insert("BELT"));
        assert!(lexicon.insert("belt"));
        assert_eq!(lexicon, before);
        assert!(lexicon.insert("be"));
        assert_eq!(lexicon.word_count(), 12);
        assert_eq!(lexicon.node_count(), 17);
    }

    #[test]
    fn test_words_sorted() {
        let lexicon = Lexicon::from_words(&["zoo", "x-ray", "xray", "ace", "aces", "ace"]);
        assert_eq!(lexicon.words(), vec!["ACE", "ACES", "X-RAY", "XRAY", "ZOO"]);
    }

    #[test]
    fn test_from_file_error() {
        let err = Lexicon::from_file("no/such/lexicon.txt").unwrap_err();
        assert!(matches!(err, Error::ReadError { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::InvalidArgument);
    }
}
