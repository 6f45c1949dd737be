use cosmic::iced::Length;
use cosmic::widget::{button, column, container, flex_row, row, scrollable, text};
use cosmic::Element;

use crate::message::{Message, Page};

const FEATURE_CARDS: &[(&str, &str)] = &[
    (
        "Admin automation",
        "Create one task and auto-assign it to your entire team.",
    ),
    (
        "User-centric",
        "A clean inbox of assignments for every user.",
    ),
    (
        "API-first",
        "Backed by a REST service ready to scale.",
    ),
];

/// Static landing page: hero copy, shortcut buttons into the two working
/// views, and the fixed feature cards. No network calls, no mutable state.
pub fn home_view() -> Element<'static, Message> {
    let mut content = column().spacing(24);

    content = content.push(text::title3("Automate task delivery"));
    content = content.push(text::body(
        "Create tasks once and automatically distribute them to your workforce. \
         Admins orchestrate, users execute, and everything stays in sync.",
    ));

    content = content.push(
        row()
            .spacing(8)
            .push(button::suggested("Go to Admin").on_press(Message::OpenPage(Page::Admin)))
            .push(button::standard("Go to My Tasks").on_press(Message::OpenPage(Page::User))),
    );

    let mut cards: Vec<Element<'static, Message>> = Vec::new();
    for (title, blurb) in FEATURE_CARDS {
        let card = container(
            column()
                .spacing(4)
                .push(text::title4(*title))
                .push(text::caption(*blurb)),
        )
        .padding(16);
        cards.push(card.into());
    }
    content = content.push(flex_row(cards).row_spacing(8).column_spacing(8));

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
