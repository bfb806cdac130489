//! Host application owning the canonical article state and panel visibility

use crate::ui::main_view;
use article_core::{ArticleSnapshot, ArticleState, ArticleStyle, PreferencesStore};
use article_ui::{PanelEvent, SettingsMessage, SettingsPanel};
use iced::{executor, keyboard, Application, Command, Element, Subscription, Theme};
use tracing::{debug, info, warn};

/// Startup configuration handed to the application
#[derive(Debug, Clone)]
pub struct AppFlags {
    pub initial: ArticleState,
    /// `None` disables persistence
    pub store: Option<PreferencesStore>,
    pub open: bool,
}

impl Default for AppFlags {
    fn default() -> Self {
        Self {
            initial: ArticleState::default(),
            store: None,
            open: false,
        }
    }
}

pub struct ArticleApp {
    pub article: ArticleSnapshot,
    pub style: ArticleStyle,
    pub is_open: bool,
    /// `None` while in reading mode
    pub panel: Option<SettingsPanel>,
    pub store: Option<PreferencesStore>,
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Settings(SettingsMessage),
    ToggleReadingMode,
    PreferencesSaved(Result<(), String>),
}

impl Application for ArticleApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        info!("Initializing Article Styler");

        let article = ArticleSnapshot::new(flags.initial);
        let panel = SettingsPanel::new(flags.open, &article);

        (
            Self {
                style: resolve_style(article.state()),
                article,
                is_open: flags.open,
                panel: Some(panel),
                store: flags.store,
                theme: Theme::Dark,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        if self.is_open && self.panel.is_some() {
            "Article Styler - Settings".to_string()
        } else {
            "Article Styler".to_string()
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        debug!("Handling message: {:?}", message);

        match message {
            Message::Settings(message) => {
                let Some(panel) = self.panel.as_mut() else {
                    return Command::none();
                };

                match panel.update(message) {
                    Some(event) => self.handle_panel_event(event),
                    None => Command::none(),
                }
            }
            Message::ToggleReadingMode => {
                if self.panel.take().is_some() {
                    info!("Reading mode on");
                } else {
                    info!("Reading mode off");
                    self.panel = Some(SettingsPanel::new(self.is_open, &self.article));
                }
                Command::none()
            }
            Message::PreferencesSaved(Ok(())) => {
                debug!("Preferences saved");
                Command::none()
            }
            Message::PreferencesSaved(Err(err)) => {
                warn!("Failed to save preferences: {}", err);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let reading_mode = keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::F2) => Some(Message::ToggleReadingMode),
            _ => None,
        });

        // Unmounting the panel drops its pointer listener with it
        let panel = match &self.panel {
            Some(panel) => panel.subscription().map(Message::Settings),
            None => Subscription::none(),
        };

        Subscription::batch([reading_mode, panel])
    }
}

impl ArticleApp {
    fn handle_panel_event(&mut self, event: PanelEvent) -> Command<Message> {
        match event {
            PanelEvent::Apply(state) => {
                info!("Applying article settings");
                self.publish(state)
            }
            PanelEvent::Reset => {
                info!("Resetting article settings to defaults");
                self.publish(ArticleState::default())
            }
            PanelEvent::Toggle => {
                self.set_open(!self.is_open);
                Command::none()
            }
        }
    }

    fn set_open(&mut self, is_open: bool) {
        self.is_open = is_open;
        if let Some(panel) = self.panel.as_mut() {
            panel.set_open(is_open);
        }
    }

    /// Replace the canonical state and push it to the panel
    fn publish(&mut self, state: ArticleState) -> Command<Message> {
        self.article.replace(state);
        self.style = resolve_style(self.article.state());

        if let Some(panel) = self.panel.as_mut() {
            panel.sync(&self.article);
        }

        self.persist()
    }

    fn persist(&self) -> Command<Message> {
        let Some(store) = self.store.clone() else {
            return Command::none();
        };
        let revision = self.article.revision();
        let state = *self.article.state();

        Command::perform(
            async move {
                store
                    .save(revision, state)
                    .await
                    .map(|_| ())
                    .map_err(|err| err.to_string())
            },
            Message::PreferencesSaved,
        )
    }
}

fn resolve_style(state: &ArticleState) -> ArticleStyle {
    ArticleStyle::resolve(state).unwrap_or_else(|err| {
        warn!("Falling back to default article style: {}", err);
        ArticleStyle::default()
    })
}
