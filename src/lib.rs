//! Multiview library

pub mod downloader;
pub mod gui;
pub mod normalizer;
pub mod panel;
pub mod utils;

// Re-export main types for easier use
pub use downloader::{DownloadRequest, DownloaderState, Platform, RequestTarget};
pub use gui::{Message, MultiviewApp, Tab};
pub use normalizer::{embed_address, extract_video_id, normalize, PlayerFlags};
pub use panel::{Panel, PanelGrid, PanelKind};
pub use utils::{AppSettings, MultiviewError};
