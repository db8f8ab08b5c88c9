#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Iterator;

/// Character class of a lexicon letter: 0..26 for `A`..`Z`, 26 for `-`.
pub type Label = u8;

/// Number of character classes a trie node can branch on.
pub const ALPHABET: usize = 27;

/// Label reserved for the hyphen.
pub const HYPHEN: Label = 26;

/// Map a character to its label, or `None` if the lexicon does not support it.
/// Only uppercase input is accepted; callers fold case first.
#[inline]
pub fn classify(ch: char) -> Option<Label> {
    match ch {
        'A'..='Z' => Some(ch as u8 - b'A'),
        '-' => Some(HYPHEN),
        _ => None,
    }
}

/// The character for `label`. Inverse of [`classify`].
#[inline]
pub fn label_char(label: Label) -> char {
    if label == HYPHEN {
        '-'
    } else {
        (b'A' + label) as char
    }
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// A bitset representing the labels present in a trie node
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(u32);

impl Default for LabelSet {
    fn default() -> Self {
        LabelSet::new()
    }
}

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        self.0 & (1 << label) != 0
    }

    pub fn insert(&mut self, label: Label) -> bool {
        assert!((label as usize) < ALPHABET);
        let r = self.contains(label);
        self.0 |= 1 << label;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet::new(self.0)
    }

    /// Number of labels in the set that sort before `label`.
    pub fn rank(&self, label: Label) -> usize {
        count_ones(zero_highbits(self.0, label as u32)) as usize
    }

    /// Return the bit position corresponding to `label` if present.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(self.rank(label))
    }
}

/// Show the set as its letters, e.g. `{Q,U,-}`.
impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|label| label_char(label).to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLabelSet {
    count: u32,
    value: u32,
}

impl IteratorLabelSet {
    pub fn new(value: u32) -> IteratorLabelSet {
        IteratorLabelSet { count: 0, value }
    }
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        while self.count < ALPHABET as u32 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(i as Label);
            }
        }
        None
    }
}
