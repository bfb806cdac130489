//! Persisted article preferences
//!
//! The host stores the last applied [`ArticleState`] as JSON in the user's
//! config directory. Options are stored by value and resolved against the
//! catalogue on load.
//!
//! Saves are serialized per store and tagged with the snapshot revision they
//! persist. A save older than the last written revision is dropped, and every
//! write goes to a sibling temp file that is renamed over the target.

use crate::options::OptionField;
use crate::{ArticleError, ArticleResult, ArticleState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Current preferences format version
pub const PREFERENCES_VERSION: u32 = 1;

const PREFERENCES_FILE: &str = "preferences.json";

const TEMP_SUFFIX: &str = "tmp";

/// On-disk representation of an article state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPreferences {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub font_family: String,
    pub font_size: String,
    pub font_color: String,
    pub background_color: String,
    pub content_width: String,
}

impl StoredPreferences {
    pub fn from_state(state: &ArticleState) -> Self {
        Self {
            version: PREFERENCES_VERSION,
            saved_at: Utc::now(),
            font_family: state.font_family.value.to_string(),
            font_size: state.font_size.value.to_string(),
            font_color: state.font_color.value.to_string(),
            background_color: state.background_color.value.to_string(),
            content_width: state.content_width.value.to_string(),
        }
    }

    /// Resolve stored values against the option catalogue
    pub fn to_state(&self) -> ArticleResult<ArticleState> {
        if self.version != PREFERENCES_VERSION {
            return Err(ArticleError::UnsupportedVersion(self.version));
        }

        Ok(ArticleState {
            font_family: OptionField::FontFamily.find(&self.font_family)?,
            font_size: OptionField::FontSize.find(&self.font_size)?,
            font_color: OptionField::FontColor.find(&self.font_color)?,
            background_color: OptionField::BackgroundColor.find(&self.background_color)?,
            content_width: OptionField::ContentWidth.find(&self.content_width)?,
        })
    }
}

/// Reads and writes the preferences file
///
/// Clones share the write lock, so saves issued from any clone run one at a time.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
    /// Revision of the last state written to disk
    written: Arc<Mutex<Option<u64>>>,
}

impl PreferencesStore {
    /// Store backed by an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            written: Arc::new(Mutex::new(None)),
        }
    }

    /// Store in the platform config directory
    pub fn default_location() -> Self {
        let config_dir = directories::ProjectDirs::from("app", "article-styler", "ArticleStyler")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("article-styler"));

        Self::at(config_dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored state, `Ok(None)` when nothing has been saved yet
    pub fn load(&self) -> ArticleResult<Option<ArticleState>> {
        if !self.path.exists() {
            debug!("No preferences at {}", self.path.display());
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)?;
        let stored: StoredPreferences = serde_json::from_str(&json)?;
        let state = stored.to_state()?;

        info!(
            "Loaded preferences saved at {} from {}",
            stored.saved_at,
            self.path.display()
        );
        Ok(Some(state))
    }

    /// Persist `state` published at `revision`.
    ///
    /// Returns `Ok(false)` when a newer revision has already been written.
    pub async fn save(&self, revision: u64, state: ArticleState) -> ArticleResult<bool> {
        let mut written = self.written.lock().await;
        if written.is_some_and(|last| last >= revision) {
            debug!(
                "Skipping stale preferences save for revision {} (written {:?})",
                revision, *written
            );
            return Ok(false);
        }

        let stored = StoredPreferences::from_state(&state);
        let json = serde_json::to_string_pretty(&stored)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        *written = Some(revision);

        debug!(
            "Preferences revision {} saved to {}",
            revision,
            self.path.display()
        );
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| PREFERENCES_FILE.into());
        name.push(".");
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BACKGROUND_COLORS, FONT_FAMILY_OPTIONS};

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join("missing.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join("nested").join(PREFERENCES_FILE));

        let state = ArticleState::default()
            .with_font_family(FONT_FAMILY_OPTIONS[2])
            .with_background_color(BACKGROUND_COLORS[3]);
        assert!(store.save(1, state).await.unwrap());

        assert_eq!(store.load().unwrap(), Some(state));
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_older_revision_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join(PREFERENCES_FILE));

        let newer = ArticleState::default().with_font_family(FONT_FAMILY_OPTIONS[1]);
        let older = ArticleState::default().with_font_family(FONT_FAMILY_OPTIONS[2]);

        assert!(store.save(5, newer).await.unwrap());
        assert!(!store.save(4, older).await.unwrap());
        assert_eq!(store.load().unwrap(), Some(newer));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_overlapping_saves_keep_latest_revision() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join(PREFERENCES_FILE));

        let garamond = ArticleState::default().with_font_family(FONT_FAMILY_OPTIONS[2]);
        let ubuntu = ArticleState::default().with_font_family(FONT_FAMILY_OPTIONS[1]);

        for round in 0..200u64 {
            let older = tokio::spawn({
                let store = store.clone();
                async move { store.save(round * 2 + 1, garamond).await }
            });
            let newer = tokio::spawn({
                let store = store.clone();
                async move { store.save(round * 2 + 2, ubuntu).await }
            });

            older.await.unwrap().unwrap();
            newer.await.unwrap().unwrap();

            assert_eq!(store.load().unwrap(), Some(ubuntu), "round {}", round);
        }
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let mut stored = StoredPreferences::from_state(&ArticleState::default());
        stored.font_size = "99px".to_string();

        assert!(matches!(
            stored.to_state(),
            Err(ArticleError::UnknownOption { field: "font_size", .. })
        ));
    }

    #[test]
    fn test_future_version_is_rejected() {
        let mut stored = StoredPreferences::from_state(&ArticleState::default());
        stored.version = PREFERENCES_VERSION + 1;

        assert!(matches!(
            stored.to_state(),
            Err(ArticleError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let store = PreferencesStore::at(&path);
        assert!(matches!(store.load(), Err(ArticleError::Serialization(_))));
    }
}
