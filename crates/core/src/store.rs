//! Process-wide resource state: one collection per category.
//!
//! The store is an explicit container owned by the event loop, not an
//! ambient singleton. Each category tracks its own fetch lifecycle and a
//! request sequence number; a completion carrying a superseded sequence is
//! discarded, so a slow stale response can never overwrite a newer page.

use crate::domain::{Book, Category, Character, House};

/// Lifecycle of a collection fetch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// One category's records for the current remote page.
///
/// Items are replaced wholesale on success. On failure the prior items are
/// retained so the view degrades to a stale-but-consistent state.
#[derive(Clone, Debug, Default)]
pub struct Collection<T> {
    items: Vec<T>,
    status: FetchStatus,
    error: Option<String>,
}

impl<T> Collection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    fn complete(&mut self, outcome: Result<Vec<T>, String>) {
        match outcome {
            Ok(items) => {
                self.items = items;
                self.status = FetchStatus::Succeeded;
                self.error = None;
            }
            Err(message) => {
                self.status = FetchStatus::Failed;
                self.error = Some(message);
            }
        }
    }
}

/// Holds the three independently fetched collections.
#[derive(Clone, Debug, Default)]
pub struct ResourceStore {
    houses: Collection<House>,
    characters: Collection<Character>,
    books: Collection<Book>,
    /// Latest issued request sequence, per category (indexed by tab order).
    seq: [u64; 3],
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the category as loading and returns the sequence number the
    /// caller must hand back with the completion.
    pub fn begin_fetch(&mut self, category: Category) -> u64 {
        let slot = &mut self.seq[Self::index(category)];
        *slot += 1;
        match category {
            Category::Houses => self.houses.begin(),
            Category::Characters => self.characters.begin(),
            Category::Books => self.books.begin(),
        }
        *slot
    }

    /// Applies a houses fetch outcome. Returns `false` when the response was
    /// superseded by a later request and therefore discarded.
    pub fn complete_houses(&mut self, seq: u64, outcome: Result<Vec<House>, String>) -> bool {
        if self.is_stale(Category::Houses, seq) {
            return false;
        }
        self.houses.complete(outcome);
        true
    }

    /// Applies a characters fetch outcome; see [`Self::complete_houses`].
    pub fn complete_characters(
        &mut self,
        seq: u64,
        outcome: Result<Vec<Character>, String>,
    ) -> bool {
        if self.is_stale(Category::Characters, seq) {
            return false;
        }
        self.characters.complete(outcome);
        true
    }

    /// Applies a books fetch outcome; see [`Self::complete_houses`].
    pub fn complete_books(&mut self, seq: u64, outcome: Result<Vec<Book>, String>) -> bool {
        if self.is_stale(Category::Books, seq) {
            return false;
        }
        self.books.complete(outcome);
        true
    }

    pub fn houses(&self) -> &Collection<House> {
        &self.houses
    }

    pub fn characters(&self) -> &Collection<Character> {
        &self.characters
    }

    pub fn books(&self) -> &Collection<Book> {
        &self.books
    }

    /// Fetch status of the active category.
    pub fn status(&self, category: Category) -> FetchStatus {
        match category {
            Category::Houses => self.houses.status(),
            Category::Characters => self.characters.status(),
            Category::Books => self.books.status(),
        }
    }

    /// Last fetch error of the active category, if any.
    pub fn error(&self, category: Category) -> Option<&str> {
        match category {
            Category::Houses => self.houses.error(),
            Category::Characters => self.characters.error(),
            Category::Books => self.books.error(),
        }
    }

    fn is_stale(&self, category: Category, seq: u64) -> bool {
        self.seq[Self::index(category)] != seq
    }

    fn index(category: Category) -> usize {
        match category {
            Category::Houses => 0,
            Category::Characters => 1,
            Category::Books => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house(name: &str) -> House {
        House {
            name: name.to_string(),
            ..House::default()
        }
    }

    #[test]
    fn begin_fetch_marks_loading() {
        let mut store = ResourceStore::new();
        assert_eq!(store.status(Category::Houses), FetchStatus::Idle);

        store.begin_fetch(Category::Houses);
        assert_eq!(store.status(Category::Houses), FetchStatus::Loading);
        assert_eq!(store.status(Category::Books), FetchStatus::Idle);
    }

    #[test]
    fn successful_fetch_replaces_items() {
        let mut store = ResourceStore::new();
        let seq = store.begin_fetch(Category::Houses);
        assert!(store.complete_houses(seq, Ok(vec![house("Stark"), house("Tully")])));

        let seq = store.begin_fetch(Category::Houses);
        assert!(store.complete_houses(seq, Ok(vec![house("Lannister")])));

        let names: Vec<_> = store.houses().items().iter().map(|h| &h.name).collect();
        assert_eq!(names, ["Lannister"]);
        assert_eq!(store.status(Category::Houses), FetchStatus::Succeeded);
    }

    #[test]
    fn failed_fetch_retains_prior_items() {
        let mut store = ResourceStore::new();
        let seq = store.begin_fetch(Category::Houses);
        assert!(store.complete_houses(seq, Ok(vec![house("Stark")])));

        let seq = store.begin_fetch(Category::Houses);
        assert!(store.complete_houses(seq, Err("connection refused".into())));

        assert_eq!(store.houses().items().len(), 1);
        assert_eq!(store.status(Category::Houses), FetchStatus::Failed);
        assert_eq!(store.error(Category::Houses), Some("connection refused"));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut store = ResourceStore::new();
        let first = store.begin_fetch(Category::Houses);
        let second = store.begin_fetch(Category::Houses);

        // The newer request lands first.
        assert!(store.complete_houses(second, Ok(vec![house("Arryn")])));
        // The older one arrives late and must not overwrite it.
        assert!(!store.complete_houses(first, Ok(vec![house("Stark")])));

        let names: Vec<_> = store.houses().items().iter().map(|h| &h.name).collect();
        assert_eq!(names, ["Arryn"]);
    }

    #[test]
    fn sequences_are_independent_per_category() {
        let mut store = ResourceStore::new();
        let houses_seq = store.begin_fetch(Category::Houses);
        let books_seq = store.begin_fetch(Category::Books);

        assert!(store.complete_books(books_seq, Ok(vec![])));
        assert!(store.complete_houses(houses_seq, Ok(vec![house("Stark")])));
        assert_eq!(store.status(Category::Books), FetchStatus::Succeeded);
        assert_eq!(store.status(Category::Houses), FetchStatus::Succeeded);
    }
}
