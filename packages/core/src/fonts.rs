//! Font files bundled next to the application data
//!
//! The catalogue's font families are not guaranteed to be installed, so any
//! `.ttf`/`.otf` files found in the fonts directory are handed to the renderer
//! at startup.

use crate::ArticleResult;
use std::path::{Path, PathBuf};
use tracing::debug;

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

/// `<data dir>/fonts`, falling back to the temp dir
pub fn default_fonts_dir() -> PathBuf {
    directories::ProjectDirs::from("app", "article-styler", "ArticleStyler")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("article-styler"))
        .join("fonts")
}

/// Read every font file in `dir`, sorted by file name.
///
/// A missing directory yields no fonts.
pub fn read_font_files(dir: &Path) -> ArticleResult<Vec<Vec<u8>>> {
    if !dir.is_dir() {
        debug!("No fonts directory at {}", dir.display());
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_font = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

        if is_font && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| -> ArticleResult<Vec<u8>> {
            debug!("Loading font {}", path.display());
            Ok(std::fs::read(path)?)
        })
        .collect()
}
