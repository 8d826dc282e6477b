use crate::backend::TrackerBackend;
use crate::constants::*;
use crate::errors::ClientResult;
use crate::models::{ChangeSet, WorkId};
use crate::search::SearchOutcome;
use crate::tracker::Tracker;

impl<B: TrackerBackend> Tracker<B> {
    /// Sends new and modified records to the backend, then reloads the current page so the
    /// snapshot picks up server-assigned ids and versions.
    ///
    /// On failure the edits are kept as they are so the user can fix them and retry. If the
    /// save went through but the reload did not, the edits are taken as saved locally so
    /// they are not submitted twice.
    pub async fn save(&mut self) -> ClientResult<ChangeSet> {
        self.state_mut().notices.clear_error();

        let change_set = self.state().working_set.change_set();
        let new_count = change_set.new_records.len();
        let modified_count = change_set.modified_records.len();
        let payload = change_set.clone().into_payload();

        if let Err(error) = self.backend().save_works(&payload).await {
            tracing::warn!(%error, new_count, modified_count, "save failed");
            self.state_mut().notices.show_error(error.message());
            return Err(error);
        }
        tracing::info!(new_count, modified_count, "works saved");

        match self.reload().await {
            Ok(SearchOutcome::Applied) => {}
            outcome => {
                if let Err(error) = outcome {
                    tracing::warn!(%error, "reload after save failed");
                }
                self.state_mut().working_set.confirm_saved();
            }
        }
        self.state_mut().notices.show_info(INFO_SAVED);
        if let Err(error) = self.refresh_profile().await {
            tracing::warn!(%error, "profile refresh after save failed");
        }

        Ok(change_set)
    }

    /// Deletes the selected records that already exist on the server.
    pub async fn delete_selected(&mut self) -> ClientResult<Vec<WorkId>> {
        let ids = self.state().working_set.selected_persisted_ids();
        self.delete(ids).await
    }

    pub async fn delete(&mut self, ids: Vec<WorkId>) -> ClientResult<Vec<WorkId>> {
        self.state_mut().notices.clear_error();

        if ids.is_empty() {
            return Ok(ids);
        }

        if let Err(error) = self.backend().delete_works(&ids).await {
            tracing::warn!(%error, count = ids.len(), "delete failed");
            self.state_mut().notices.show_error(ERR_DELETION_FAILED);
            return Err(error);
        }
        tracing::info!(count = ids.len(), "works deleted");

        let state = self.state_mut();
        state.working_set.remove_ids(&ids);
        state.notices.clear();
        state.notices.show_info(INFO_DELETED);

        if let Err(error) = self.refresh_profile().await {
            tracing::warn!(%error, "profile refresh after delete failed");
        }

        Ok(ids)
    }
}
