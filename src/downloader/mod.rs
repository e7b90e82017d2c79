//! Social downloader stub
//!
//! Placeholder panel for third-party video downloading. Submissions are
//! validated for non-empty input and logged, then "complete" after a
//! simulated delay driven by the GUI. No network calls are made; real
//! backend integration is deliberately left unimplemented.

use chrono::{DateTime, Local};
use std::fmt;
use tracing::info;
use uuid::Uuid;

/// Simulated duration of a single-URL download.
pub const URL_DELAY_MS: u64 = 1_500;
/// Simulated duration of a bulk by-username download.
pub const BULK_DELAY_MS: u64 = 2_000;

/// Supported source platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    TikTok,
    Instagram,
    Facebook,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::TikTok,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a stub request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    /// One video by direct URL.
    Url(String),
    /// Every video of an account, by username.
    Username(String),
}

/// A submitted stub request, kept in the session log.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub id: Uuid,
    pub platform: Platform,
    pub target: RequestTarget,
    pub submitted_at: DateTime<Local>,
    pub completed: bool,
}

impl DownloadRequest {
    fn new(platform: Platform, target: RequestTarget) -> Self {
        Self {
            id: Uuid::new_v4(),
            platform,
            target,
            submitted_at: Local::now(),
            completed: false,
        }
    }

    /// Delay the GUI waits before marking this request complete.
    pub fn simulated_delay_ms(&self) -> u64 {
        match self.target {
            RequestTarget::Url(_) => URL_DELAY_MS,
            RequestTarget::Username(_) => BULK_DELAY_MS,
        }
    }
}

/// Downloader panel state: selected platform, inputs, status line, and the
/// session request log.
#[derive(Debug, Clone)]
pub struct DownloaderState {
    pub platform: Platform,
    pub url_input: String,
    pub username_input: String,
    pub status: String,
    pub requests: Vec<DownloadRequest>,
}

impl Default for DownloaderState {
    fn default() -> Self {
        Self {
            platform: Platform::TikTok,
            url_input: String::new(),
            username_input: String::new(),
            status: String::new(),
            requests: Vec::new(),
        }
    }
}

impl DownloaderState {
    /// Submit the single-URL form. Returns the request the GUI should
    /// schedule a completion for, or `None` when the input was rejected
    /// (in which case the status line carries the error message).
    pub fn submit_url(&mut self) -> Option<DownloadRequest> {
        let url = self.url_input.trim();
        if url.is_empty() {
            self.status = "Please enter a valid video URL.".to_string();
            return None;
        }

        self.status = "Downloading video...".to_string();
        let request = DownloadRequest::new(self.platform, RequestTarget::Url(url.to_string()));
        info!(platform = %self.platform, id = %request.id, "stub url download submitted");
        self.requests.push(request.clone());
        self.url_input.clear();
        Some(request)
    }

    /// Submit the by-username form.
    pub fn submit_username(&mut self) -> Option<DownloadRequest> {
        let username = self.username_input.trim().trim_start_matches('@');
        if username.is_empty() {
            self.status = "Please enter a valid username.".to_string();
            return None;
        }

        self.status = format!("Downloading all videos from {}...", username);
        let request =
            DownloadRequest::new(self.platform, RequestTarget::Username(username.to_string()));
        info!(platform = %self.platform, id = %request.id, "stub bulk download submitted");
        self.requests.push(request.clone());
        self.username_input.clear();
        Some(request)
    }

    /// Mark a previously submitted request as complete and update the
    /// status line. Unknown ids are ignored (the request may have been
    /// superseded by a session reset).
    pub fn finish(&mut self, id: Uuid) {
        let Some(request) = self.requests.iter_mut().find(|r| r.id == id) else {
            return;
        };
        request.completed = true;
        self.status = match &request.target {
            RequestTarget::Url(_) => "Download complete".to_string(),
            RequestTarget::Username(user) => format!("Downloaded videos from @{}", user),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_sets_error_status() {
        let mut state = DownloaderState::default();
        assert!(state.submit_url().is_none());
        assert_eq!(state.status, "Please enter a valid video URL.");
        assert!(state.requests.is_empty());
    }

    #[test]
    fn url_submission_logs_request_and_clears_input() {
        let mut state = DownloaderState::default();
        state.url_input = "https://www.tiktok.com/@user/video/123".to_string();

        let request = state.submit_url().expect("request");
        assert_eq!(state.requests.len(), 1);
        assert!(state.url_input.is_empty());
        assert_eq!(state.status, "Downloading video...");
        assert_eq!(request.simulated_delay_ms(), URL_DELAY_MS);

        state.finish(request.id);
        assert_eq!(state.status, "Download complete");
        assert!(state.requests[0].completed);
    }

    #[test]
    fn username_submission_strips_at_sign() {
        let mut state = DownloaderState::default();
        state.platform = Platform::Instagram;
        state.username_input = "@somecreator".to_string();

        let request = state.submit_username().expect("request");
        assert_eq!(
            request.target,
            RequestTarget::Username("somecreator".to_string())
        );
        assert_eq!(request.simulated_delay_ms(), BULK_DELAY_MS);

        state.finish(request.id);
        assert_eq!(state.status, "Downloaded videos from @somecreator");
    }

    #[test]
    fn blank_username_sets_error_status() {
        let mut state = DownloaderState::default();
        state.username_input = "  @ ".to_string();
        assert!(state.submit_username().is_none());
        assert_eq!(state.status, "Please enter a valid username.");
    }

    #[test]
    fn finish_for_unknown_id_is_ignored() {
        let mut state = DownloaderState::default();
        state.status = "Ready".to_string();
        state.finish(Uuid::new_v4());
        assert_eq!(state.status, "Ready");
    }
}
