//! Main view: settings panel beside the styled article preview

use crate::app::{ArticleApp, Message};
use article_core::{ArticleStyle, Rgba};
use iced::{
    widget::{column, container, row, scrollable, text, Space},
    Element, Font, Length,
};

const ARTICLE_TITLE: &str = "On the Quiet Craft of Typography";

const ARTICLE_PARAGRAPHS: &[&str] = &[
    "Good typography goes unnoticed. A reader who finishes a long article without \
     once thinking about the letters on the page has been served well by them.",
    "The width of a line matters as much as the face it is set in. Lines that run \
     too long tire the eye on its way back to the left margin, while lines that are \
     too short break the rhythm of reading into stutters.",
    "Color and contrast carry the rest. Dark text on a light ground is the default \
     for a reason, yet a well chosen tint can make a page feel calmer or warmer \
     without costing legibility.",
    "Try the settings on the left. Nothing changes until you apply them, and a \
     reset always brings the article back to its original look.",
];

pub fn main_view(app: &ArticleApp) -> Element<'_, Message> {
    let panel: Element<Message> = match &app.panel {
        Some(panel) => panel.view().map(Message::Settings),
        None => Space::with_width(Length::Shrink).into(),
    };

    row![panel, article_view(&app.style)]
        .height(Length::Fill)
        .into()
}

fn article_view<'a>(style: &ArticleStyle) -> Element<'a, Message> {
    let font = Font::with_name(style.font_family);
    let color = to_iced(style.font_color);

    let title = text(ARTICLE_TITLE)
        .size(style.font_size * 2.0)
        .font(font)
        .style(iced::theme::Text::Color(color));

    let body = ARTICLE_PARAGRAPHS
        .iter()
        .fold(column![].spacing(style.font_size), |body, paragraph| {
            body.push(
                text(*paragraph)
                    .size(style.font_size)
                    .font(font)
                    .style(iced::theme::Text::Color(color)),
            )
        });

    let article = column![title, body]
        .spacing(style.font_size * 1.5)
        .max_width(style.content_width);

    let page = container(article).width(Length::Fill).center_x().padding(40);

    container(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(ArticleBackground(
            to_iced(style.background_color),
        ))))
        .into()
}

fn to_iced(color: Rgba) -> iced::Color {
    iced::Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
}

struct ArticleBackground(iced::Color);

impl iced::widget::container::StyleSheet for ArticleBackground {
    type Style = iced::Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(iced::Background::Color(self.0)),
            ..Default::default()
        }
    }
}
