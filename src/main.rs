//! Multiview - Multi-Panel YouTube Viewer
//!
//! A desktop viewer that renders multiple embedded video players side by
//! side in a responsive grid, with a stub panel for third-party video
//! downloading.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use multiview::gui;
use multiview::normalizer;

#[derive(Parser)]
struct Args {
    /// Print the embed address for a URL or ID and exit (headless mode)
    #[arg(long)]
    normalize: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    if let Some(input) = args.normalize {
        println!("{}", normalizer::embed_address(&input));
        return Ok(());
    }

    // Start the GUI application (synchronous entrypoint)
    gui::MultiviewApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(1100.0, 720.0),
            min_size: Some(iced::Size::new(800.0, 500.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..Default::default()
    })?;

    Ok(())
}
