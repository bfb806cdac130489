//! Always-visible control that opens and closes the settings sidebar

use iced::widget::{button, container, text};
use iced::{Element, Length};

/// Side length of the square arrow button
pub const ARROW_SIZE: f32 = 48.0;

/// Padding around the arrow; part of the panel's owned region
pub const ARROW_PADDING: f32 = 12.0;

/// Horizontal space the arrow occupies next to the sidebar
pub const ARROW_GUTTER: f32 = ARROW_SIZE + 2.0 * ARROW_PADDING;

pub fn arrow_button<'a, Message: Clone + 'a>(
    is_open: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let glyph = if is_open { "«" } else { "»" };

    let arrow = button(
        text(glyph)
            .size(22)
            .width(Length::Fill)
            .horizontal_alignment(iced::alignment::Horizontal::Center)
            .vertical_alignment(iced::alignment::Vertical::Center),
    )
    .width(Length::Fixed(ARROW_SIZE))
    .height(Length::Fixed(ARROW_SIZE))
    .style(iced::theme::Button::Primary)
    .on_press(on_press);

    container(arrow).padding(ARROW_PADDING).into()
}
