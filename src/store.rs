//! In-memory todo store.
//!
//! The store is the single owner of the todo sequence. Bulk loads keep the
//! service order; locally added records go to the front so the newest shows
//! first.

use crate::todo::TodoRecord;

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    records: Vec<TodoRecord>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence.
    pub fn load_all(&mut self, records: Vec<TodoRecord>) {
        self.records = records;
    }

    /// Insert at the head. The id must not already be present.
    pub fn add_front(&mut self, record: TodoRecord) {
        debug_assert!(!self.contains(record.id), "duplicate todo id {}", record.id);
        self.records.insert(0, record);
    }

    /// Remove the record with `id`, returning it if it was present.
    pub fn remove_by_id(&mut self, id: i64) -> Option<TodoRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: i64) -> Option<&TodoRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
