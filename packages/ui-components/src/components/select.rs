use article_core::ArticleOption;
use iced::widget::{column, pick_list, text};
use iced::{Element, Length};

/// Titled dropdown over a fixed option list
pub fn labeled_select<'a, Message: Clone + 'a>(
    title: &'a str,
    selected: ArticleOption,
    options: &'a [ArticleOption],
    placeholder: &'a str,
    on_change: impl Fn(ArticleOption) -> Message + 'a,
) -> Element<'a, Message> {
    let label = text(title)
        .size(14)
        .style(iced::theme::Text::Color(iced::Color::from_rgb(0.7, 0.7, 0.7)));

    let chooser = pick_list(options, Some(selected), on_change)
        .placeholder(placeholder)
        .width(Length::Fill);

    column![label, chooser].spacing(8).into()
}
