// Letter headings: the derived index the contact lists render, one bucket
// per uppercased first letter of the label field. The index is recomputed
// whole from the collection on every change, never patched in place.

use std::collections::BTreeMap;

// Bucket for records whose label is empty. '#' sorts ahead of every letter
// and digit, so the bucket always lists first.
pub const OTHER_HEADING: char = '#';

// Heading for one label: the first character, case-folded to uppercase.
// Where the uppercase mapping expands to several characters the first one is
// the heading.
pub fn heading_for(label: &str) -> char {
    match label.chars().next() {
        Some(c) => c.to_uppercase().next().unwrap_or(OTHER_HEADING),
        None => OTHER_HEADING,
    }
}

// Divide a list into sub-lists according to the first character of the label
// field, creating each bucket on first encounter. Input order is preserved
// within each bucket.
pub fn group_by_first_letter<T, F>(items: &[T], label: F) -> BTreeMap<char, Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let mut headings: BTreeMap<char, Vec<T>> = BTreeMap::new();
    for item in items {
        headings
            .entry(heading_for(label(item)))
            .or_default()
            .push(item.clone());
    }
    headings
}

// The grouped view of one collection. Buckets iterate in ascending heading
// order; flattening them yields every grouped record exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingIndex<R> {
    buckets: BTreeMap<char, Vec<R>>,
}

impl<R> Default for HeadingIndex<R> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<R: Clone> HeadingIndex<R> {
    pub fn build<F>(records: &[R], label: F) -> Self
    where
        F: Fn(&R) -> &str,
    {
        Self {
            buckets: group_by_first_letter(records, label),
        }
    }

    pub fn headings(&self) -> impl Iterator<Item = char> + '_ {
        self.buckets.keys().copied()
    }

    pub fn bucket(&self, heading: char) -> Option<&[R]> {
        self.buckets.get(&heading).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &[R])> {
        self.buckets.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    // Number of records across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    // Bucket contents concatenated in ascending heading order.
    pub fn flatten(&self) -> Vec<R> {
        self.buckets.values().flat_map(|b| b.iter().cloned()).collect()
    }
}
