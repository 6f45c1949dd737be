use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, row, scrollable, text, text_input};
use cosmic::Element;

use crate::config::{TaskflowConfig, DEFAULT_BACKEND_URL};
use crate::message::Message;

pub fn settings_view(config: &TaskflowConfig) -> Element<'_, Message> {
    let mut content = column().spacing(12);

    // --- Backend ---
    content = content.push(text::title4("Backend"));
    content = content.push(
        text_input::text_input(DEFAULT_BACKEND_URL, config.backend_url.clone())
            .on_input(Message::SetBackendUrl)
            .width(Length::Fill),
    );
    content = content.push(text::caption(
        "Base URL of the task-assignment service. Applied immediately; \
         the TASKFLOW_BACKEND_URL environment variable overrides it at launch.",
    ));

    // --- Debug logging ---
    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::body("Debug logging").width(Length::Fill))
            .push(
                cosmic::widget::toggler(config.debug_logging)
                    .on_toggle(|_| Message::ToggleDebugLogging),
            ),
    );

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
