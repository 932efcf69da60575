use std::collections::BTreeSet;

/// Unconsumed tails of one input string.
///
/// Every member is a suffix of the same input, so a suffix is identified by
/// the byte offset where it starts. Iteration runs from the longest suffix
/// to the shortest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SuffixSet<'a> {
    input: &'a str,
    offsets: BTreeSet<usize>,
}

impl<'a> SuffixSet<'a> {
    /// The set holding the whole input.
    pub fn new(input: &'a str) -> Self {
        SuffixSet {
            input,
            offsets: BTreeSet::from([0]),
        }
    }

    /// An empty set over the same input.
    pub fn empty(&self) -> Self {
        SuffixSet {
            input: self.input,
            offsets: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, offset: usize) -> bool {
        debug_assert!(self.input.is_char_boundary(offset));
        self.offsets.insert(offset)
    }

    pub fn union(mut self, other: SuffixSet<'a>) -> Self {
        self.offsets.extend(other.offsets);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// `(offset, suffix)` pairs, longest suffix first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        let input = self.input;
        self.offsets.iter().map(move |&offset| (offset, &input[offset..]))
    }

    /// Offset of the shortest (most consumed) suffix.
    pub fn shortest(&self) -> Option<usize> {
        self.offsets.last().copied()
    }

    /// Length in characters of the longest suffix, 0 for an empty set.
    pub fn longest_char_len(&self) -> usize {
        self.offsets
            .first()
            .map_or(0, |&offset| self.input[offset..].chars().count())
    }

    /// Whether some member has consumed the whole input.
    pub fn contains_empty(&self) -> bool {
        self.offsets.contains(&self.input.len())
    }

    pub fn is_end(&self, offset: usize) -> bool {
        offset == self.input.len()
    }
}
