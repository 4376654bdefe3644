//! In-memory address book store.
//!
//! Records are keyed by the lower-cased contact name and kept in
//! key-insertion order, so listings and search results come out in the
//! order contacts were first added.

use crate::models::Record;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// Contacts per block in paginated listings.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// The in-memory store of all records, keyed by normalized name.
///
/// Invariant: every key equals the lower-cased name of its record, and
/// every key appears exactly once in the insertion-order list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    /// Keys in the order they were first inserted.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its lower-cased name.
    ///
    /// A record with the same normalized name replaces the existing one,
    /// keeping its original position in the listing order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().key();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(&name.to_lowercase())
    }

    /// Look up a record for mutation by name, case-insensitively.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&name.to_lowercase())
    }

    /// Remove a record by name, ending its lifecycle.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let key = name.to_lowercase();
        let removed = self.records.remove(&key);
        if removed.is_some() {
            self.order.retain(|k| k != &key);
        }
        removed
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in key-insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Linear substring search.
    ///
    /// Matches case-insensitively against the name, or case-sensitively
    /// against any phone value. Results come back in insertion order.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        self.records()
            .filter(|record| {
                record.name().key().contains(&query_lower)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    /// Lazy paginated listing: each item is a text block of up to
    /// `page_size` contacts as `Name: phone1, phone2` lines, in insertion
    /// order. The iterator is finite; call again for a fresh pass.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages {
            book: self,
            offset: 0,
            page_size: page_size.max(1),
        }
    }
}

/// Iterator over formatted listing blocks. See [`AddressBook::pages`].
#[derive(Debug)]
pub struct Pages<'a> {
    book: &'a AddressBook,
    offset: usize,
    page_size: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.offset >= self.book.order.len() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.book.order.len());
        let block: Vec<String> = self.book.order[self.offset..end]
            .iter()
            .filter_map(|key| self.book.records.get(key))
            .map(Record::summary)
            .collect();
        self.offset = end;
        Some(block.join("\n"))
    }
}

// Storage contract: the book serializes as its ordered record sequence;
// deserializing re-adds each record, restoring keys and order.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_get_case_insensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["+380501234567"]));
        assert!(book.get("alice").is_some());
        assert!(book.get("ALICE").is_some());
        assert!(book.get("Bob").is_none());
    }

    #[test]
    fn test_add_same_name_overwrites() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["+380501234567"]));
        book.add_record(record("alice", &["+380509998888"]));
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Alice").unwrap().phones()[0].as_str(), "+380509998888");
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["+380501234567"]));
        book.add_record(record("Bob", &["+380671112233"]));
        book.add_record(record("ALICE", &["+380509998888"]));
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["ALICE", "Bob"]);
    }

    #[test]
    fn test_remove() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["+380501234567"]));
        assert!(book.remove("ALICE").is_some());
        assert!(book.is_empty());
        assert!(book.remove("Alice").is_none());
    }

    #[test]
    fn test_search_by_name_any_case() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["+380501234567"]));
        book.add_record(record("Bob", &["+380671112233"]));
        let results = book.search("aLiCe");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name().as_str(), "Alice");
    }

    #[test]
    fn test_search_by_phone_substring() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["+380501234567"]));
        book.add_record(record("Bob", &["+380671112233"]));
        let results = book.search("050123");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name().as_str(), "Alice");
        // prefix shared by both numbers
        assert_eq!(book.search("380").len(), 2);
    }

    #[test]
    fn test_search_no_match() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["+380501234567"]));
        assert!(book.search("zzz").is_empty());
    }

    #[test]
    fn test_search_results_in_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &["+380501110001"]));
        book.add_record(record("Hanna", &["+380501110002"]));
        book.add_record(record("Joanna", &["+380501110003"]));
        let names: Vec<&str> = book
            .search("anna")
            .iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, vec!["Anna", "Hanna", "Joanna"]);
    }

    #[test]
    fn test_pages_blocks_of_five() {
        let mut book = AddressBook::new();
        for i in 0..12 {
            book.add_record(record(&format!("Contact{:02}", i), &["+380501234567"]));
        }
        let pages: Vec<String> = book.pages(DEFAULT_PAGE_SIZE).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].lines().count(), 5);
        assert_eq!(pages[1].lines().count(), 5);
        assert_eq!(pages[2].lines().count(), 2);
        assert!(pages[0].starts_with("Contact00: "));
        assert!(pages[2].ends_with("Contact11: +380501234567"));
    }

    #[test]
    fn test_pages_empty_book_yields_nothing() {
        let book = AddressBook::new();
        assert_eq!(book.pages(DEFAULT_PAGE_SIZE).count(), 0);
    }

    #[test]
    fn test_pages_fresh_iterator_restarts() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["+380501234567"]));
        let first: Vec<String> = book.pages(DEFAULT_PAGE_SIZE).collect();
        let second: Vec<String> = book.pages(DEFAULT_PAGE_SIZE).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialization_preserves_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Zoe", &["+380501110001"]));
        book.add_record(record("Adam", &["+380501110002"]));
        let json = serde_json::to_string(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = back.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Adam"]);
        assert_eq!(back, book);
    }
}
