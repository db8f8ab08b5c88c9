use crate::labelset::{classify, Label, LabelSet};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of the lexicon prefix tree.
///
/// Each node owns its children. The labels of the children present are kept
/// in a `LabelSet`, and the children themselves in a dense vector ordered by
/// label, so the slot of a child is the rank of its label in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrieNode {
    labels: LabelSet,
    children: Vec<TrieNode>,
    terminal: bool,
}

impl TrieNode {
    pub fn new() -> TrieNode {
        TrieNode::default()
    }

    /// True if a word ends at this node.
    pub fn terminal(&self) -> bool {
        self.terminal
    }

    /// Iterate over `(label, child)` pairs in label order.
    pub fn children(&self) -> impl Iterator<Item = (Label, &TrieNode)> {
        self.labels.iter().zip(self.children.iter())
    }

    /// Get the child for `label` if present.
    #[inline]
    pub fn child(&self, label: Label) -> Option<&TrieNode> {
        self.labels.index_of(label).map(|i| &self.children[i])
    }

    /// Insert `key`, creating missing nodes, and mark the last one terminal.
    /// Returns the number of nodes created.
    pub fn insert<K: AsRef<[Label]>>(&mut self, key: K) -> usize {
        let mut created = 0;
        let mut t = self;
        for &c in key.as_ref() {
            let pos = t.labels.rank(c);
            if !t.labels.insert(c) {
                t.children.insert(pos, TrieNode::new());
                created += 1;
            }
            debug_assert_eq!(t.labels.len(), t.children.len());
            t = &mut { t }.children[pos];
        }
        t.terminal = true;
        created
    }

    /// Follow `key` from this node.
    pub fn find<K: AsRef<[Label]>>(&self, key: K) -> Option<&TrieNode> {
        let mut t = self;
        for &c in key.as_ref() {
            t = t.child(c)?;
        }
        Some(t)
    }

    /// Follow the characters of `s` from this node. Any character without a
    /// label ends the walk with `None`. `s` must already be uppercase.
    #[inline]
    pub fn walk(&self, s: &str) -> Option<&TrieNode> {
        let mut t = self;
        for ch in s.chars() {
            t = t.child(classify(ch)?)?;
        }
        Some(t)
    }
}
