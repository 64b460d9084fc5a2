// Live grouped view over one resource's collection: the letter index the
// list screens render, kept current as the collection mutates or the search
// string changes.

use tokio::sync::watch;

use crate::filter::filter_records;
use crate::headings::HeadingIndex;
use crate::record::Record;
use crate::resource::Resource;

pub struct Listing<R: Record> {
    records: watch::Receiver<Vec<R>>,
    search: String,
    index: HeadingIndex<R>,
}

impl<R: Record> Listing<R> {
    // A listing starts from the collection as it stands; later mutations
    // arrive through changed().
    pub fn new(resource: &Resource<R>) -> Self {
        let mut listing = Self {
            records: resource.subscribe(),
            search: String::new(),
            index: HeadingIndex::default(),
        };
        listing.refresh();
        listing
    }

    // Recompute the whole index from the latest collection snapshot and the
    // current search string. The index is never patched incrementally.
    fn refresh(&mut self) {
        let snapshot = self.records.borrow_and_update().clone();
        let visible = filter_records(&snapshot, &self.search);
        self.index = HeadingIndex::build(&visible, |r| r.label());
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    // Change the active filter; the index reflects it immediately.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.refresh();
    }

    pub fn index(&self) -> &HeadingIndex<R> {
        &self.index
    }

    // Wait for the next collection mutation and fold it in. The index is
    // already recomputed when this returns, so a render that follows always
    // sees the post-mutation grouping. Returns false once every handle on
    // the resource is gone and no further change can arrive.
    pub async fn changed(&mut self) -> bool {
        match self.records.changed().await {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(_) => false,
        }
    }
}
