use crate::diff::compute_change_set;
use crate::models::{ChangeSet, WorkId, WorkRecord};

/// The current page of records: the last server-confirmed `snapshot` and the
/// user-mutable `editable` copy.
///
/// The two vectors never share records. `snapshot` only changes on `load`, when the
/// server confirms a deletion and when a confirmed save could not be reloaded.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    snapshot: Vec<WorkRecord>,
    editable: Vec<WorkRecord>,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, records: Vec<WorkRecord>) {
        self.snapshot = records.into_iter().map(WorkRecord::normalized).collect();
        self.editable = self.snapshot.clone();
    }

    pub fn reset(&mut self) {
        self.editable = self.snapshot.clone();
    }

    pub fn add_new(&mut self) {
        self.editable.insert(0, WorkRecord::blank());
    }

    pub fn snapshot(&self) -> &[WorkRecord] {
        &self.snapshot
    }

    pub fn editable(&self) -> &[WorkRecord] {
        &self.editable
    }

    pub fn record_mut(&mut self, index: usize) -> Option<&mut WorkRecord> {
        self.editable.get_mut(index)
    }

    /// Returns the new selection state, or `None` if there is no record at `index`.
    pub fn toggle_select(&mut self, index: usize) -> Option<bool> {
        let record = self.editable.get_mut(index)?;
        record.selected = !record.selected;
        Some(record.selected)
    }

    pub fn mark_deleted(&mut self, index: usize) -> bool {
        match self.editable.get_mut(index) {
            Some(record) => {
                record.is_deleted = true;
                true
            }
            None => false,
        }
    }

    /// Selected records already marked deleted are not counted.
    pub fn selection_empty(&self) -> bool {
        !self
            .editable
            .iter()
            .any(|record| record.selected && !record.is_deleted)
    }

    pub fn visible_records(&self) -> Vec<&WorkRecord> {
        self.editable
            .iter()
            .filter(|record| !record.is_deleted)
            .collect()
    }

    pub fn selected_persisted_ids(&self) -> Vec<WorkId> {
        self.editable
            .iter()
            .filter(|record| record.selected && !record.is_new)
            .filter_map(|record| record.id)
            .collect()
    }

    /// Drops records the server has confirmed as deleted from both sequences.
    pub fn remove_ids(&mut self, ids: &[WorkId]) {
        let deleted = |record: &WorkRecord| {
            !record.is_new && record.id.is_some_and(|id| ids.contains(&id))
        };
        self.editable.retain(|record| !deleted(record));
        self.snapshot.retain(|record| !deleted(record));
    }

    /// Takes the current edits as saved when no fresh page is available.
    ///
    /// New records are dropped; they come back with server ids on the next load.
    /// Modified records replace their snapshot counterpart so they are no longer dirty.
    pub fn confirm_saved(&mut self) {
        self.editable.retain(|record| !record.is_new);

        for record in self.editable.iter().filter(|record| !record.is_deleted) {
            let Some(id) = record.id else {
                continue;
            };
            let matches: Vec<usize> = self
                .snapshot
                .iter()
                .enumerate()
                .filter(|(_, original)| !original.is_new && original.id == Some(id))
                .map(|(index, _)| index)
                .collect();
            if let [index] = matches[..] {
                self.snapshot[index] = WorkRecord {
                    selected: false,
                    ..record.clone()
                };
            }
        }
    }

    pub fn change_set(&self) -> ChangeSet {
        compute_change_set(&self.snapshot, &self.editable)
    }

    pub fn is_dirty(&self) -> bool {
        !self.change_set().is_empty()
    }
}
