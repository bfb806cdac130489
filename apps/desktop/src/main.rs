use article_core::fonts::{default_fonts_dir, read_font_files};
use article_core::{ArticleState, PreferencesStore};
use iced::{Application, Settings, Size};
use std::borrow::Cow;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::{AppFlags, ArticleApp};

fn main() -> iced::Result {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,article_styler=debug")),
        )
        .init();

    info!("Starting Article Styler v{}", env!("CARGO_PKG_VERSION"));

    let store = PreferencesStore::default_location();
    let initial = load_initial_state(&store).unwrap_or_else(|err| {
        warn!("{:#}", err);
        ArticleState::default()
    });

    let fonts_dir = default_fonts_dir();
    let fonts = read_font_files(&fonts_dir).unwrap_or_else(|err| {
        warn!("Failed to read fonts from {}: {}", fonts_dir.display(), err);
        Vec::new()
    });
    info!("Loaded {} font file(s) from {}", fonts.len(), fonts_dir.display());

    // Run the application
    ArticleApp::run(Settings {
        fonts: fonts.into_iter().map(Cow::Owned).collect(),
        window: iced::window::Settings {
            size: Size::new(1400.0, 900.0),
            min_size: Some(Size::new(900.0, 600.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        ..Settings::with_flags(AppFlags {
            initial,
            store: Some(store),
            open: false,
        })
    })
}

fn load_initial_state(store: &PreferencesStore) -> anyhow::Result<ArticleState> {
    use anyhow::Context;

    let state = store.load().with_context(|| {
        format!(
            "Failed to load preferences from {}",
            store.path().display()
        )
    })?;

    Ok(state.unwrap_or_default())
}
