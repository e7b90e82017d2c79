//! GUI components

pub mod panel_card;
pub mod url_input;

// Re-export for convenience
pub use panel_card::panel_card;
pub use url_input::url_input;
