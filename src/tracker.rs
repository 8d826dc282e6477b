use crate::backend::TrackerBackend;
use crate::config::ClientConfig;
use crate::errors::ClientResult;
use crate::models::{SearchCriteria, UserProfile};
use crate::notices::Notices;
use crate::search::SearchController;
use crate::status::{MinutesStatus, status};
use crate::working_set::WorkingSet;

/// Everything the UI renders for the current page.
#[derive(Debug, Clone)]
pub struct TrackerState {
    pub working_set: WorkingSet,
    pub search: SearchController,
    pub profile: UserProfile,
    pub status: MinutesStatus,
    pub notices: Notices,
    /// Set once the first search has completed, successfully or not.
    pub app_ready: bool,
}

impl TrackerState {
    pub fn new(config: &ClientConfig) -> Self {
        let profile = UserProfile::with_threshold(config.default_max_minutes_per_day);
        let status = status(profile.todays_minutes, profile.max_minutes_per_day);

        TrackerState {
            working_set: WorkingSet::new(),
            search: SearchController::new(),
            profile,
            status,
            notices: Notices::new(config.notice_duration),
            app_ready: false,
        }
    }

    pub fn recompute_status(&mut self) {
        self.status = status(self.profile.todays_minutes, self.profile.max_minutes_per_day);
    }
}

/// Owns the backend and the single state object the engine mutates.
pub struct Tracker<B> {
    backend: B,
    config: ClientConfig,
    state: TrackerState,
}

impl<B: TrackerBackend> Tracker<B> {
    pub fn new(backend: B, config: ClientConfig) -> Self {
        let state = TrackerState::new(&config);
        Tracker {
            backend,
            config,
            state,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut TrackerState {
        &mut self.state
    }

    /// User edits go through here.
    pub fn working_set_mut(&mut self) -> &mut WorkingSet {
        &mut self.state.working_set
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads the user profile and the first page of the default search.
    pub async fn init(&mut self) {
        if let Err(error) = self.refresh_profile().await {
            tracing::debug!(%error, "profile unavailable during init");
        }
        if let Err(error) = self.search(SearchCriteria::default(), None).await {
            tracing::debug!(%error, "initial search failed");
        }
    }

    pub async fn refresh_profile(&mut self) -> ClientResult<()> {
        match self.backend.get_user_profile().await {
            Ok(profile) => {
                tracing::debug!(user = %profile.user_name, "user profile refreshed");
                self.state.profile = profile;
                self.state.recompute_status();
                Ok(())
            }
            Err(error) => {
                self.state.notices.show_error(error.message());
                Err(error)
            }
        }
    }

    /// Returns `true` when the session ended. The whole client state is then discarded.
    /// A failure is only logged.
    pub async fn logout(&mut self) -> bool {
        match self.backend.logout().await {
            Ok(()) => {
                tracing::info!("logged out, resetting client state");
                self.state = TrackerState::new(&self.config);
                true
            }
            Err(error) => {
                tracing::warn!(%error, "logout failed");
                false
            }
        }
    }
}
