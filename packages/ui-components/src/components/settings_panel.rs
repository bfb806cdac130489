//! Settings sidebar for article typography
//!
//! The panel keeps a draft copy of the host's [`ArticleSnapshot`]. Field
//! changes only touch the draft; applying or resetting is reported back to the
//! host as a [`PanelEvent`]. Visibility belongs to the host: the panel only
//! asks for it to be toggled, either through the arrow button or when the
//! pointer goes down outside the panel while it is open.

use super::arrow_button::{arrow_button, ARROW_GUTTER};
use super::button::{form_button, FormRole};
use super::outside_click::{pointer_events, OutsideClick, PanelRegion, PointerEvent};
use super::radio_group::radio_group;
use super::select::labeled_select;
use article_core::{ArticleOption, ArticleSnapshot, ArticleState, OptionField};
use iced::widget::{column, container, row, scrollable, text, Space};
use iced::{Element, Length, Subscription};
use tracing::debug;

/// Width of the open sidebar, arrow excluded
pub const SIDEBAR_WIDTH: f32 = 616.0;

/// Messages from the settings panel
#[derive(Debug, Clone)]
pub enum SettingsMessage {
    FontFamilyChanged(ArticleOption),
    FontSizeChanged(ArticleOption),
    FontColorChanged(ArticleOption),
    BackgroundColorChanged(ArticleOption),
    ContentWidthChanged(ArticleOption),

    /// Commit the draft
    Submit,
    /// Discard the draft
    Reset,

    /// Arrow button pressed
    ToggleRequested,
    Pointer(PointerEvent),
}

/// Requests the panel makes of its host
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Apply(ArticleState),
    Reset,
    Toggle,
}

/// Settings panel widget
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    is_open: bool,
    draft: ArticleState,
    synced: ArticleSnapshot,
    region: PanelRegion,
    outside_click: OutsideClick,
}

impl SettingsPanel {
    /// Create a panel mirroring `current`
    pub fn new(is_open: bool, current: &ArticleSnapshot) -> Self {
        Self {
            is_open,
            draft: *current.state(),
            synced: current.clone(),
            region: PanelRegion::left_edge(SIDEBAR_WIDTH + ARROW_GUTTER),
            outside_click: OutsideClick::new(),
        }
    }

    /// Override the region treated as "inside" the panel
    pub fn with_region(mut self, region: PanelRegion) -> Self {
        self.region = region;
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Uncommitted edits
    pub fn draft(&self) -> &ArticleState {
        &self.draft
    }

    /// Whether the outside-click listener should be active
    pub fn is_listening(&self) -> bool {
        self.is_open
    }

    /// Receive the host's open flag
    pub fn set_open(&mut self, is_open: bool) {
        if self.is_open != is_open {
            debug!("Settings panel {}", if is_open { "opened" } else { "closed" });
            self.is_open = is_open;
            self.outside_click.reset();
        }
    }

    /// Receive the host's canonical state.
    ///
    /// A new revision or a different value overwrites the draft, discarding
    /// any uncommitted edits. Returns whether the draft was replaced.
    pub fn sync(&mut self, current: &ArticleSnapshot) -> bool {
        if self.synced == *current {
            return false;
        }

        if self.draft != *current.state() {
            debug!(
                "Discarding draft edits for canonical revision {}",
                current.revision()
            );
        }
        self.synced = current.clone();
        self.draft = *current.state();
        true
    }

    /// Handle a panel message, returning a request for the host if any
    pub fn update(&mut self, message: SettingsMessage) -> Option<PanelEvent> {
        match message {
            SettingsMessage::FontFamilyChanged(option) => {
                self.draft = self.draft.with_font_family(option);
                None
            }
            SettingsMessage::FontSizeChanged(option) => {
                self.draft = self.draft.with_font_size(option);
                None
            }
            SettingsMessage::FontColorChanged(option) => {
                self.draft = self.draft.with_font_color(option);
                None
            }
            SettingsMessage::BackgroundColorChanged(option) => {
                self.draft = self.draft.with_background_color(option);
                None
            }
            SettingsMessage::ContentWidthChanged(option) => {
                self.draft = self.draft.with_content_width(option);
                None
            }

            SettingsMessage::Submit => Some(PanelEvent::Apply(self.draft)),
            SettingsMessage::Reset => Some(PanelEvent::Reset),

            SettingsMessage::ToggleRequested => Some(PanelEvent::Toggle),
            SettingsMessage::Pointer(event) => {
                // Events can still arrive after the subscription was dropped
                if !self.is_open {
                    return None;
                }

                if self.outside_click.handle(event, &self.region) {
                    debug!("Pointer pressed outside settings panel");
                    Some(PanelEvent::Toggle)
                } else {
                    None
                }
            }
        }
    }

    /// Window-wide pointer listener, only while open
    pub fn subscription(&self) -> Subscription<SettingsMessage> {
        if self.is_listening() {
            pointer_events().map(SettingsMessage::Pointer)
        } else {
            Subscription::none()
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, SettingsMessage> {
        let arrow = arrow_button(self.is_open, SettingsMessage::ToggleRequested);

        if !self.is_open {
            return arrow;
        }

        row![self.sidebar(), arrow].into()
    }

    fn sidebar(&self) -> Element<'_, SettingsMessage> {
        let title = text("Article Settings")
            .size(24)
            .style(iced::theme::Text::Color(iced::Color::WHITE));

        let fields = column![
            labeled_select(
                OptionField::FontFamily.title(),
                self.draft.font_family,
                OptionField::FontFamily.options(),
                OptionField::FontFamily.placeholder(),
                SettingsMessage::FontFamilyChanged,
            ),
            radio_group(
                OptionField::FontSize.title(),
                self.draft.font_size,
                OptionField::FontSize.options(),
                SettingsMessage::FontSizeChanged,
            ),
            labeled_select(
                OptionField::FontColor.title(),
                self.draft.font_color,
                OptionField::FontColor.options(),
                OptionField::FontColor.placeholder(),
                SettingsMessage::FontColorChanged,
            ),
            labeled_select(
                OptionField::BackgroundColor.title(),
                self.draft.background_color,
                OptionField::BackgroundColor.options(),
                OptionField::BackgroundColor.placeholder(),
                SettingsMessage::BackgroundColorChanged,
            ),
            labeled_select(
                OptionField::ContentWidth.title(),
                self.draft.content_width,
                OptionField::ContentWidth.options(),
                OptionField::ContentWidth.placeholder(),
                SettingsMessage::ContentWidthChanged,
            ),
        ]
        .spacing(24);

        let actions = row![
            Space::with_width(Length::Fill),
            form_button("Reset", FormRole::Discard, SettingsMessage::Reset),
            form_button("Apply", FormRole::Commit, SettingsMessage::Submit),
        ]
        .spacing(12);

        let content = column![
            title,
            scrollable(fields).height(Length::Fill),
            actions,
        ]
        .spacing(20)
        .padding(24);

        container(content)
            .width(Length::Fixed(SIDEBAR_WIDTH))
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(SidebarStyle)))
            .into()
    }
}

struct SidebarStyle;

impl iced::widget::container::StyleSheet for SidebarStyle {
    type Style = iced::Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(iced::Color::from_rgb(0.12, 0.12, 0.14))),
            border: iced::Border {
                color: iced::Color::from_rgb(0.25, 0.25, 0.28),
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use article_core::options::{
        BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_FAMILY_OPTIONS,
        FONT_SIZE_OPTIONS,
    };
    use iced::Point;

    fn sample_state() -> ArticleState {
        ArticleState {
            font_family: ArticleOption::new("Open Sans", "Open Sans", "open-sans"),
            font_size: ArticleOption::new("18", "18", "font-size-18"),
            font_color: ArticleOption::new("black", "black", "font-black"),
            background_color: ArticleOption::new("white", "white", "bg-white"),
            content_width: ArticleOption::new("800", "800", "width-800"),
        }
    }

    fn open_panel() -> (SettingsPanel, ArticleSnapshot) {
        let snapshot = ArticleSnapshot::new(sample_state());
        (SettingsPanel::new(true, &snapshot), snapshot)
    }

    #[test]
    fn test_starts_from_current_state() {
        let (panel, snapshot) = open_panel();
        assert_eq!(panel.draft(), snapshot.state());
        assert!(panel.is_open());
    }

    #[test]
    fn test_field_updates_touch_one_field() {
        let (mut panel, _) = open_panel();

        let updates = [
            (OptionField::FontFamily, SettingsMessage::FontFamilyChanged(FONT_FAMILY_OPTIONS[1])),
            (OptionField::FontSize, SettingsMessage::FontSizeChanged(FONT_SIZE_OPTIONS[2])),
            (OptionField::FontColor, SettingsMessage::FontColorChanged(FONT_COLORS[4])),
            (
                OptionField::BackgroundColor,
                SettingsMessage::BackgroundColorChanged(BACKGROUND_COLORS[5]),
            ),
            (
                OptionField::ContentWidth,
                SettingsMessage::ContentWidthChanged(CONTENT_WIDTH_OPTIONS[1]),
            ),
        ];

        for (field, message) in updates {
            let before = *panel.draft();
            assert_eq!(panel.update(message), None);
            let after = *panel.draft();

            assert_ne!(after.field(field), before.field(field));
            for other in OptionField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(after.field(other), before.field(other));
            }
        }
    }

    #[test]
    fn test_submit_applies_full_draft() {
        let (mut panel, _) = open_panel();
        let size_24 = ArticleOption::new("24", "24", "font-size-24");

        panel.update(SettingsMessage::FontSizeChanged(size_24));
        let event = panel.update(SettingsMessage::Submit);

        let expected = ArticleState {
            font_size: size_24,
            ..sample_state()
        };
        assert_eq!(event, Some(PanelEvent::Apply(expected)));
        // Draft is kept until the host publishes
        assert_eq!(panel.draft(), &expected);
    }

    #[test]
    fn test_reset_leaves_draft_alone() {
        let (mut panel, _) = open_panel();
        panel.update(SettingsMessage::ContentWidthChanged(CONTENT_WIDTH_OPTIONS[1]));
        let edited = *panel.draft();

        assert_eq!(panel.update(SettingsMessage::Reset), Some(PanelEvent::Reset));
        assert_eq!(panel.draft(), &edited);
    }

    #[test]
    fn test_host_state_overrides_edits() {
        let (mut panel, mut snapshot) = open_panel();
        panel.update(SettingsMessage::FontColorChanged(FONT_COLORS[6]));
        assert_ne!(panel.draft(), snapshot.state());

        let published = sample_state().with_font_family(FONT_FAMILY_OPTIONS[4]);
        snapshot.replace(published);
        assert!(panel.sync(&snapshot));
        assert_eq!(panel.draft(), &published);
    }

    #[test]
    fn test_republishing_equal_value_still_discards_edits() {
        let (mut panel, mut snapshot) = open_panel();
        panel.update(SettingsMessage::FontSizeChanged(FONT_SIZE_OPTIONS[1]));

        snapshot.replace(*snapshot.state());
        assert!(panel.sync(&snapshot));
        assert_eq!(panel.draft(), &sample_state());
    }

    #[test]
    fn test_unchanged_snapshot_keeps_edits() {
        let (mut panel, snapshot) = open_panel();
        panel.update(SettingsMessage::FontSizeChanged(FONT_SIZE_OPTIONS[1]));

        assert!(!panel.sync(&snapshot));
        assert_eq!(panel.draft().font_size, FONT_SIZE_OPTIONS[1]);
    }

    #[test]
    fn test_arrow_requests_toggle() {
        let (mut panel, _) = open_panel();
        assert_eq!(
            panel.update(SettingsMessage::ToggleRequested),
            Some(PanelEvent::Toggle)
        );
        // The host owns visibility
        assert!(panel.is_open());

        panel.set_open(false);
        assert_eq!(
            panel.update(SettingsMessage::ToggleRequested),
            Some(PanelEvent::Toggle)
        );
    }

    #[test]
    fn test_outside_press_toggles_once() {
        let (mut panel, _) = open_panel();
        let outside = Point::new(SIDEBAR_WIDTH + ARROW_GUTTER + 100.0, 300.0);
        let inside = Point::new(SIDEBAR_WIDTH / 2.0, 300.0);

        panel.update(SettingsMessage::Pointer(PointerEvent::Moved(outside)));
        assert_eq!(
            panel.update(SettingsMessage::Pointer(PointerEvent::Pressed(None))),
            Some(PanelEvent::Toggle)
        );

        panel.update(SettingsMessage::Pointer(PointerEvent::Moved(inside)));
        assert_eq!(
            panel.update(SettingsMessage::Pointer(PointerEvent::Pressed(None))),
            None
        );
    }

    #[test]
    fn test_arrow_gutter_counts_as_inside() {
        let (mut panel, _) = open_panel();
        let on_arrow = Point::new(SIDEBAR_WIDTH + ARROW_GUTTER / 2.0, 30.0);

        assert_eq!(
            panel.update(SettingsMessage::Pointer(PointerEvent::Pressed(Some(on_arrow)))),
            None
        );
    }

    #[test]
    fn test_closed_panel_ignores_pointer() {
        let snapshot = ArticleSnapshot::new(sample_state());
        let mut panel = SettingsPanel::new(false, &snapshot);
        assert!(!panel.is_listening());

        let outside = Point::new(5_000.0, 10.0);
        panel.update(SettingsMessage::Pointer(PointerEvent::Moved(outside)));
        assert_eq!(
            panel.update(SettingsMessage::Pointer(PointerEvent::Pressed(Some(outside)))),
            None
        );
    }

    #[test]
    fn test_listening_follows_open_flag() {
        let (mut panel, _) = open_panel();
        assert!(panel.is_listening());

        panel.set_open(false);
        assert!(!panel.is_listening());

        panel.set_open(true);
        assert!(panel.is_listening());
    }

    #[test]
    fn test_reopen_forgets_stale_cursor() {
        let (mut panel, _) = open_panel();
        let outside = Point::new(SIDEBAR_WIDTH + ARROW_GUTTER + 50.0, 10.0);
        panel.update(SettingsMessage::Pointer(PointerEvent::Moved(outside)));

        panel.set_open(false);
        panel.set_open(true);
        assert_eq!(
            panel.update(SettingsMessage::Pointer(PointerEvent::Pressed(None))),
            None
        );
    }

    #[test]
    fn test_custom_region() {
        let snapshot = ArticleSnapshot::new(sample_state());
        let mut panel = SettingsPanel::new(true, &snapshot).with_region(PanelRegion::new(
            iced::Rectangle::new(Point::new(100.0, 0.0), iced::Size::new(200.0, 200.0)),
        ));

        assert_eq!(
            panel.update(SettingsMessage::Pointer(PointerEvent::Pressed(Some(Point::new(
                50.0, 50.0
            ))))),
            Some(PanelEvent::Toggle)
        );
        assert_eq!(
            panel.update(SettingsMessage::Pointer(PointerEvent::Pressed(Some(Point::new(
                150.0, 50.0
            ))))),
            None
        );
    }
}
