//! GUI views

pub mod downloader_view;
pub mod grid_view;

// Re-export for convenience
pub use downloader_view::downloader_view;
pub use grid_view::grid_view;
