//! Linear undo/redo over immutable snapshots.
//!
//! The store is a list of snapshots plus a cursor. Committing drops everything
//! after the cursor before appending, so an undone branch is discarded rather
//! than kept as a tree.

use crate::document::Document;

#[derive(Clone, Debug)]
pub struct HistoryStore<T> {
    snapshots: Vec<T>,
    cursor: usize,
    limit: Option<usize>,
}

impl<T: Clone + Default> Default for HistoryStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> HistoryStore<T> {
    /// Store holding `initial` as its only snapshot.
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Keep at most `limit` snapshots (at least one), dropping the oldest first.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|l| l.max(1));
        self.enforce_limit();
        self
    }

    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Append `mutator(current)` after truncating any redo tail.
    pub fn commit<F>(&mut self, mutator: F) -> &T
    where
        F: FnOnce(&T) -> T,
    {
        let next = mutator(self.current());
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;
        self.enforce_limit();
        log::debug!(
            "history commit: cursor={} len={}",
            self.cursor,
            self.snapshots.len()
        );
        self.current()
    }

    /// Commit a mutation applied to a copy of the current snapshot.
    pub fn edit<F>(&mut self, f: F) -> &T
    where
        F: FnOnce(&mut T),
    {
        self.commit(|current| {
            let mut next = current.clone();
            f(&mut next);
            next
        })
    }

    /// Like [`HistoryStore::edit`], but nothing is committed if `f` fails.
    pub fn try_edit<F, E>(&mut self, f: F) -> Result<&T, E>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        let mut next = self.current().clone();
        f(&mut next)?;
        Ok(self.commit(move |_| next))
    }

    /// Replace the whole history with a single snapshot.
    pub fn overwrite(&mut self, value: T) {
        self.snapshots.clear();
        self.snapshots.push(value);
        self.cursor = 0;
        log::debug!("history overwritten");
    }

    /// Step back; returns whether the cursor moved.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward; returns whether the cursor moved.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.snapshots.len() > limit {
            let excess = self.snapshots.len() - limit;
            self.snapshots.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess);
        }
    }
}

/// The engine's document history.
pub type DocumentHistory = HistoryStore<Document>;
