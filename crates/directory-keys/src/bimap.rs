//! Small fixed one-to-one tables.

use std::collections::HashMap;

/// An immutable bidirectional map between two sets of static strings.
///
/// Lookups are O(1) in both directions. The table never changes after
/// [`from_pairs`](Self::from_pairs).
#[derive(Debug, Clone)]
pub struct Bimap {
    pairs: Vec<(&'static str, &'static str)>,
    forward: HashMap<&'static str, &'static str>,
    reverse: HashMap<&'static str, &'static str>,
}

impl Bimap {
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            pairs: pairs.to_vec(),
            forward: pairs.iter().copied().collect(),
            reverse: pairs.iter().map(|&(l, r)| (r, l)).collect(),
        }
    }

    /// Right-hand value for `left`.
    pub fn right(&self, left: &str) -> Option<&'static str> {
        self.forward.get(left).copied()
    }

    /// Left-hand value for `right`.
    pub fn left(&self, right: &str) -> Option<&'static str> {
        self.reverse.get(right).copied()
    }

    /// True when no value repeats on either side.
    pub fn is_bijective(&self) -> bool {
        self.forward.len() == self.pairs.len() && self.reverse.len() == self.pairs.len()
    }

    /// Registered pairs, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
