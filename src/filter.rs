// Search filtering over record collections: a case-insensitive substring
// match against a record's textual fields, the same contract the list views
// applied before grouping.

use crate::record::Record;

// True when needle occurs anywhere in haystack, ignoring case. An empty
// needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// The filtered view of a collection: matching records in their original
// order. An empty query returns the whole collection.
pub fn filter_records<R: Record>(records: &[R], query: &str) -> Vec<R> {
    if query.is_empty() {
        return records.to_vec();
    }
    records.iter().filter(|r| r.matches(query)).cloned().collect()
}
