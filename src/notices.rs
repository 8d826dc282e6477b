use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct InfoNotice {
    message: String,
    expires_at: Instant,
}

/// Error banner plus a single-slot info notice that expires on its own.
///
/// The banner stays until the next action clears it. A new info notice replaces the
/// pending one and restarts the expiry.
#[derive(Debug, Clone)]
pub struct Notices {
    error: Option<String>,
    info: Option<InfoNotice>,
    info_duration: Duration,
}

impl Notices {
    pub fn new(info_duration: Duration) -> Self {
        Notices {
            error: None,
            info: None,
            info_duration,
        }
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.info = None;
        self.error = Some(message.into());
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.info = Some(InfoNotice {
            message: message.into(),
            expires_at: Instant::now() + self.info_duration,
        });
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.error = None;
        self.info = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn info(&self) -> Option<&str> {
        self.info
            .as_ref()
            .filter(|notice| Instant::now() < notice.expires_at)
            .map(|notice| notice.message.as_str())
    }
}
