use crate::models::{ChangeSet, WorkPayload, WorkRecord};

/// Computes what has to be sent to the backend to bring it in line with `editable`.
///
/// New records are sent without `id`/`version`. A persisted record counts as modified
/// only when exactly one original record carries its id and one of `date`, `time`,
/// `description` or `minutes` differs. Records marked deleted are never included;
/// deletion goes through its own call.
pub fn compute_change_set(original: &[WorkRecord], editable: &[WorkRecord]) -> ChangeSet {
    let originals: Vec<WorkPayload> = original
        .iter()
        .filter(|record| !record.is_new)
        .map(WorkRecord::to_payload)
        .collect();

    let mut change_set = ChangeSet::default();

    for record in editable.iter().filter(|record| !record.is_deleted) {
        if record.is_new {
            change_set.new_records.push(record.to_new_payload());
            continue;
        }

        let candidate = record.to_payload();
        let mut matches = originals.iter().filter(|orig| orig.id == candidate.id);

        match (matches.next(), matches.next()) {
            (Some(orig), None) => {
                if !orig.same_content(&candidate) {
                    change_set.modified_records.push(candidate);
                }
            }
            (Some(_), Some(_)) => {
                tracing::warn!(id = ?candidate.id, "duplicate record id in snapshot, skipping");
            }
            (None, _) => {}
        }
    }

    change_set
}
