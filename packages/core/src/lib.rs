pub mod error;
pub mod fonts;
pub mod options;
pub mod preferences;
pub mod state;
pub mod style;

pub use error::{ArticleError, ArticleResult};
pub use options::{ArticleOption, OptionField};
pub use preferences::{PreferencesStore, StoredPreferences};
pub use state::{ArticleSnapshot, ArticleState};
pub use style::{ArticleStyle, Rgba};
