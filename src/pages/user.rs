use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, row, scrollable, text};
use cosmic::Element;

use crate::core::assignment::Assignment;
use crate::core::user::User;
use crate::message::Message;

pub fn user_view<'a>(
    active_users: &'a [User],
    selected_email: Option<&'a str>,
    assignments: &'a [Assignment],
    busy: bool,
    error: &'a Option<String>,
    refreshed: &'a Option<String>,
) -> Element<'a, Message> {
    let mut content = column().spacing(16);

    // Inline error banner, cleared at the start of each operation.
    if let Some(e) = error {
        content = content.push(text::body(format!("✗ {}", e)));
    }

    content = content.push(text::caption("Select User"));

    let labels: Vec<String> = active_users
        .iter()
        .map(|u| format!("{} • {}", u.name, u.email))
        .collect();
    let emails: Vec<String> = active_users.iter().map(|u| u.email.clone()).collect();
    let selected = selected_email.and_then(|email| active_users.iter().position(|u| u.email == email));

    content = content.push(
        dropdown(labels, selected, move |idx| {
            Message::SelectUser(emails.get(idx).cloned().unwrap_or_default())
        })
        .width(Length::Fill),
    );

    if let Some(email) = selected_email {
        if let Some(user) = active_users.iter().find(|u| u.email == email) {
            content = content.push(text::body(format!(
                "Viewing assignments for {}",
                user.name
            )));
        }

        content = content.push(text::title4("Assigned Tasks"));

        if assignments.is_empty() {
            content = content.push(text::caption("No assignments yet."));
        } else {
            for assignment in assignments {
                content = content.push(assignment_row(assignment, busy));
            }
        }
    }

    if let Some(time) = refreshed {
        content = content.push(text::caption(format!("Last refreshed {}", time)));
    }

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One assignment with its completion control. A completed assignment's
/// button has no press handler, so it renders disabled and completion
/// cannot be re-triggered from the UI.
fn assignment_row<'a>(assignment: &'a Assignment, busy: bool) -> Element<'a, Message> {
    let completed = assignment.status.is_completed();

    let mut info = column().spacing(2);
    info = info.push(text::body(format!("Task ID: {}", assignment.task_id)));
    info = info.push(text::caption(format!("Status: {}", assignment.status.label())));

    let mut complete = if completed {
        button::standard("Completed")
    } else {
        button::suggested("Mark complete")
    };
    if !completed && !busy {
        complete = complete.on_press(Message::MarkComplete(assignment.id.clone()));
    }

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(container(info).width(Length::Fill))
        .push(complete)
        .into()
}
