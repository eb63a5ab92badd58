use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use app_models::{Entity, EntityId};

struct Rows<T> {
    items: Vec<T>,
    next_id: EntityId,
}

/// An append-only, insertion-ordered table of entities.
///
/// Ids come from a counter owned by the collection rather than from its
/// length, so they stay unique even if rows are ever removed.
pub struct Collection<T> {
    table_name: String,
    rows: RwLock<Rows<T>>,
}

impl<T: Entity> Collection<T> {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self::with_rows(table_name, Vec::new())
    }

    /// Build a collection from existing rows; the counter resumes after the highest id.
    pub fn with_rows(table_name: impl Into<String>, items: Vec<T>) -> Self {
        let next_id = items.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            table_name: table_name.into(),
            rows: RwLock::new(Rows { items, next_id }),
        }
    }

    // A panic while holding the lock cannot leave a row half-written, so poison is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Rows<T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Rows<T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// First row with the given id, if any
    pub fn get_by_id(&self, id: EntityId) -> Option<T> {
        self.read().items.iter().find(|item| item.id() == id).cloned()
    }

    /// Every row in insertion order
    pub fn all(&self) -> Vec<T> {
        self.read().items.clone()
    }

    /// Rows matching `predicate`, in insertion order
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.read()
            .items
            .iter()
            .filter(|&item| predicate(item))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assign the next id, build the row with it and append it.
    ///
    /// Id assignment and the push happen under one write lock.
    pub fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(EntityId) -> T,
    {
        let mut rows = self.write();
        let id = rows.next_id;
        rows.next_id += 1;

        let item = build(id);
        rows.items.push(item.clone());

        debug!(table = %self.table_name, id, "Appended row");
        item
    }
}
