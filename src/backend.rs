use async_trait::async_trait;

use crate::errors::ClientResult;
use crate::models::{SearchCriteria, UserProfile, WorkId, WorkPayload, WorksPage};

/// Remote operations the tracker depends on.
#[async_trait]
pub trait TrackerBackend: Send + Sync {
    async fn fetch_works(
        &self,
        criteria: &SearchCriteria,
        page_number: u32,
    ) -> ClientResult<WorksPage>;

    async fn save_works(&self, works: &[WorkPayload]) -> ClientResult<()>;

    async fn delete_works(&self, ids: &[WorkId]) -> ClientResult<()>;

    async fn get_user_profile(&self) -> ClientResult<UserProfile>;

    async fn update_threshold(&self, max_minutes_per_day: u64) -> ClientResult<()>;

    async fn logout(&self) -> ClientResult<()>;
}
