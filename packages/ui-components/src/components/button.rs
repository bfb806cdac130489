use iced::widget::{button, text};

/// What a form action does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRole {
    /// Forward the draft to the host
    Commit,
    /// Ask the host to revert
    Discard,
}

pub fn form_button<'a, Message: Clone + 'a>(
    label: &'a str,
    role: FormRole,
    on_press: Message,
) -> button::Button<'a, Message> {
    let style = match role {
        FormRole::Commit => iced::theme::Button::Primary,
        FormRole::Discard => iced::theme::Button::Secondary,
    };

    button(
        text(label)
            .size(16)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .padding([10, 24])
    .style(style)
    .on_press(on_press)
}
