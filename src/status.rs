use crate::backend::TrackerBackend;
use crate::errors::ClientResult;
use crate::tracker::Tracker;
use crate::utils::validate_threshold;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinutesStatus {
    Ok,
    Exceeded,
}

impl MinutesStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinutesStatus::Ok => "OK",
            MinutesStatus::Exceeded => "EXCEEDED",
        }
    }
}

pub fn status(todays_minutes: Option<u64>, max_minutes_per_day: u64) -> MinutesStatus {
    match todays_minutes {
        Some(minutes) if minutes > max_minutes_per_day => MinutesStatus::Exceeded,
        _ => MinutesStatus::Ok,
    }
}

impl<B: TrackerBackend> Tracker<B> {
    /// Applies the new daily threshold locally before the backend confirms it.
    /// Negative values are rejected without touching any state.
    pub async fn update_threshold(&mut self, value: i64) -> ClientResult<()> {
        let max_minutes_per_day = validate_threshold(value)?;

        let state = self.state_mut();
        state.notices.clear_error();
        state.profile.max_minutes_per_day = max_minutes_per_day;
        state.recompute_status();
        tracing::info!(
            max_minutes_per_day,
            status = state.status.as_str(),
            "daily threshold updated"
        );

        if let Err(error) = self.backend().update_threshold(max_minutes_per_day).await {
            tracing::warn!(%error, "failed to persist daily threshold");
            self.state_mut().notices.show_error(error.message());
            return Err(error);
        }

        Ok(())
    }
}
