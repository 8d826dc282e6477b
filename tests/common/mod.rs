#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use minutes_tracker_client::backend::TrackerBackend;
use minutes_tracker_client::config::ClientConfig;
use minutes_tracker_client::errors::ClientResult;
use minutes_tracker_client::models::{
    SearchCriteria, UserProfile, WorkId, WorkPayload, WorkRecord, WorksPage,
};
use minutes_tracker_client::tracker::Tracker;

pub const TEST_USER: &str = "alice";
pub const TEST_MAX_MINUTES: u64 = 480;

/// A backend call as observed by the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch {
        criteria: SearchCriteria,
        page_number: u32,
    },
    Save(Vec<WorkPayload>),
    Delete(Vec<WorkId>),
    GetProfile,
    UpdateThreshold(u64),
    Logout,
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    pages: VecDeque<ClientResult<WorksPage>>,
    save_results: VecDeque<ClientResult<()>>,
    delete_results: VecDeque<ClientResult<()>>,
    profiles: VecDeque<ClientResult<UserProfile>>,
    threshold_results: VecDeque<ClientResult<()>>,
    logout_results: VecDeque<ClientResult<()>>,
}

/// Records every call and replays queued responses. When a queue is empty the call
/// succeeds with an empty page, `test_profile()` or `()`.
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_inner<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        let mut inner = self.inner.lock().expect("mock backend lock poisoned");
        f(&mut inner)
    }

    pub fn push_page(&self, page: ClientResult<WorksPage>) {
        self.with_inner(|inner| inner.pages.push_back(page));
    }

    pub fn push_save(&self, result: ClientResult<()>) {
        self.with_inner(|inner| inner.save_results.push_back(result));
    }

    pub fn push_delete(&self, result: ClientResult<()>) {
        self.with_inner(|inner| inner.delete_results.push_back(result));
    }

    pub fn push_profile(&self, profile: ClientResult<UserProfile>) {
        self.with_inner(|inner| inner.profiles.push_back(profile));
    }

    pub fn push_threshold(&self, result: ClientResult<()>) {
        self.with_inner(|inner| inner.threshold_results.push_back(result));
    }

    pub fn push_logout(&self, result: ClientResult<()>) {
        self.with_inner(|inner| inner.logout_results.push_back(result));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.with_inner(|inner| inner.calls.clone())
    }

    pub fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Fetch { .. }))
            .count()
    }

    pub fn clear_calls(&self) {
        self.with_inner(|inner| inner.calls.clear());
    }
}

#[async_trait]
impl TrackerBackend for MockBackend {
    async fn fetch_works(
        &self,
        criteria: &SearchCriteria,
        page_number: u32,
    ) -> ClientResult<WorksPage> {
        self.with_inner(|inner| {
            inner.calls.push(Call::Fetch {
                criteria: *criteria,
                page_number,
            });
            inner
                .pages
                .pop_front()
                .unwrap_or_else(|| Ok(page_of(Vec::new(), page_number, 0)))
        })
    }

    async fn save_works(&self, works: &[WorkPayload]) -> ClientResult<()> {
        self.with_inner(|inner| {
            inner.calls.push(Call::Save(works.to_vec()));
            inner.save_results.pop_front().unwrap_or(Ok(()))
        })
    }

    async fn delete_works(&self, ids: &[WorkId]) -> ClientResult<()> {
        self.with_inner(|inner| {
            inner.calls.push(Call::Delete(ids.to_vec()));
            inner.delete_results.pop_front().unwrap_or(Ok(()))
        })
    }

    async fn get_user_profile(&self) -> ClientResult<UserProfile> {
        self.with_inner(|inner| {
            inner.calls.push(Call::GetProfile);
            inner
                .profiles
                .pop_front()
                .unwrap_or_else(|| Ok(test_profile(None)))
        })
    }

    async fn update_threshold(&self, max_minutes_per_day: u64) -> ClientResult<()> {
        self.with_inner(|inner| {
            inner.calls.push(Call::UpdateThreshold(max_minutes_per_day));
            inner.threshold_results.pop_front().unwrap_or(Ok(()))
        })
    }

    async fn logout(&self) -> ClientResult<()> {
        self.with_inner(|inner| {
            inner.calls.push(Call::Logout);
            inner.logout_results.pop_front().unwrap_or(Ok(()))
        })
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig {
        notice_duration: Duration::from_millis(1000),
        ..ClientConfig::default()
    }
}

pub fn setup_tracker() -> (Tracker<MockBackend>, MockBackend) {
    let backend = MockBackend::new();
    let tracker = Tracker::new(backend.clone(), test_config());
    (tracker, backend)
}

pub fn test_profile(todays_minutes: Option<u64>) -> UserProfile {
    UserProfile {
        user_name: TEST_USER.to_string(),
        max_minutes_per_day: TEST_MAX_MINUTES,
        todays_minutes,
    }
}

pub fn work(id: WorkId, date: &str, time: &str, description: &str, minutes: u64) -> WorkRecord {
    WorkRecord {
        id: Some(id),
        date: Some(date.to_string()),
        time: Some(time.to_string()),
        description: Some(description.to_string()),
        minutes: Some(minutes),
        version: Some(json!(1)),
        ..Default::default()
    }
}

pub fn page_of(works: Vec<WorkRecord>, current_page: u32, total_pages: u32) -> WorksPage {
    WorksPage {
        current_page,
        total_pages,
        works,
    }
}

pub fn sample_works() -> Vec<WorkRecord> {
    vec![
        work(1, "2020/01/01", "08:00", "standup", 15),
        work(2, "2020/01/01", "09:00", "code review", 45),
        work(3, "2020/01/02", "10:30", "planning", 60),
    ]
}

/// Loads `works` as page `current_page` of `total_pages` through a real search.
pub async fn load_page(
    tracker: &mut Tracker<MockBackend>,
    backend: &MockBackend,
    works: Vec<WorkRecord>,
    current_page: u32,
    total_pages: u32,
) {
    backend.push_page(Ok(page_of(works, current_page, total_pages)));
    tracker
        .search(SearchCriteria::default(), Some(current_page))
        .await
        .expect("Failed to load test page");
    backend.clear_calls();
}
