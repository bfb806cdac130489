use article_core::ArticleOption;
use iced::widget::{column, radio, row, text};
use iced::Element;

/// Titled row of mutually exclusive radio choices
pub fn radio_group<'a, Message: Clone + 'a>(
    title: &'a str,
    selected: ArticleOption,
    options: &'a [ArticleOption],
    on_change: impl Fn(ArticleOption) -> Message + 'a,
) -> Element<'a, Message> {
    let label = text(title)
        .size(14)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(0.7, 0.7, 0.7)));

    let choices = options.iter().fold(row![].spacing(16), |choices, option| {
        choices.push(
            radio(option.title, *option, Some(selected), &on_change)
                .size(16)
                .spacing(8),
        )
    });

    column![label, choices].spacing(8).into()
}
