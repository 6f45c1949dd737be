use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, flex_row, row, scrollable, text, text_input};
use cosmic::Element;

use crate::application::{TaskForm, UserForm};
use crate::core::task::{Priority, Task};
use crate::core::user::{Role, User};
use crate::message::Message;

pub fn admin_view<'a>(
    users: &'a [User],
    tasks: &'a [Task],
    user_form: &'a UserForm,
    task_form: &'a TaskForm,
    assign_task_id: Option<&'a str>,
    busy: bool,
    status: &'a Option<Result<String, String>>,
    refreshed: &'a Option<String>,
) -> Element<'a, Message> {
    let mut content = column().spacing(24);

    // Outcome of the last mutating operation, success or failure alike.
    if let Some(result) = status {
        let line = match result {
            Ok(msg) => text::body(format!("✓ {}", msg)),
            Err(e) => text::body(format!("✗ {}", e)),
        };
        content = content.push(line);
    }

    content = content.push(create_user_section(users, user_form, busy));
    content = content.push(create_task_section(tasks, task_form, busy));
    content = content.push(auto_assign_section(tasks, assign_task_id, busy));

    if let Some(time) = refreshed {
        content = content.push(text::caption(format!("Last refreshed {}", time)));
    }

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn create_user_section<'a>(
    users: &'a [User],
    form: &'a UserForm,
    busy: bool,
) -> Element<'a, Message> {
    let mut section = column().spacing(8);
    section = section.push(text::title4("Create User"));

    section = section.push(
        text_input::text_input("Name", form.name.clone())
            .on_input(Message::UserFormName)
            .width(Length::Fill),
    );
    section = section.push(
        text_input::text_input("Email", form.email.clone())
            .on_input(Message::UserFormEmail)
            .width(Length::Fill),
    );

    let mut role_row = row().spacing(4);
    for role in Role::ALL {
        role_row = role_row.push(role_button(*role, form.role));
    }
    section = section.push(role_row);

    let mut submit = button::suggested(if busy { "Saving..." } else { "Add user" });
    if !busy {
        submit = submit.on_press(Message::SubmitUser);
    }
    section = section.push(submit);

    // Active users only; inactive accounts are skipped by auto-assignment
    // and by the user view's selector.
    section = section.push(text::caption("Active Users"));
    let active: Vec<&User> = users.iter().filter(|u| u.is_active).collect();
    if active.is_empty() {
        section = section.push(text::caption("No active users yet."));
    } else {
        let mut chips: Vec<Element<'a, Message>> = Vec::new();
        for user in active {
            chips.push(
                container(text::caption(user.name.clone()))
                    .padding([2, 8])
                    .into(),
            );
        }
        section = section.push(flex_row(chips).row_spacing(4).column_spacing(4));
    }

    section.into()
}

fn create_task_section<'a>(
    tasks: &'a [Task],
    form: &'a TaskForm,
    busy: bool,
) -> Element<'a, Message> {
    let mut section = column().spacing(8);
    section = section.push(text::title4("Create Task"));

    section = section.push(
        text_input::text_input("Title", form.title.clone())
            .on_input(Message::TaskFormTitle)
            .width(Length::Fill),
    );
    section = section.push(
        text_input::text_input("Description", form.description.clone())
            .on_input(Message::TaskFormDescription)
            .width(Length::Fill),
    );
    section = section.push(
        text_input::text_input("Instructions", form.instructions.clone())
            .on_input(Message::TaskFormInstructions)
            .width(Length::Fill),
    );

    let mut priority_row = row().spacing(4);
    for priority in Priority::ALL {
        priority_row = priority_row.push(priority_button(*priority, form.priority));
    }
    section = section.push(priority_row);

    let mut submit = button::suggested(if busy { "Saving..." } else { "Create task" });
    if !busy {
        submit = submit.on_press(Message::SubmitTask);
    }
    section = section.push(submit);

    section = section.push(text::caption("All Tasks"));
    if tasks.is_empty() {
        section = section.push(text::caption("No tasks yet."));
    } else {
        for task in tasks {
            let mut task_col = column().spacing(2);
            task_col = task_col.push(text::body(format!(
                "{} • {}",
                task.title,
                task.priority.as_str()
            )));
            if !task.description.is_empty() {
                task_col = task_col.push(text::caption(task.description.clone()));
            }
            section = section.push(task_col);
        }
    }

    section.into()
}

fn auto_assign_section<'a>(
    tasks: &'a [Task],
    assign_task_id: Option<&'a str>,
    busy: bool,
) -> Element<'a, Message> {
    let mut section = column().spacing(8);
    section = section.push(text::title4("Auto-assign Task to Users"));

    let labels: Vec<String> = tasks.iter().map(|t| t.title.clone()).collect();
    let ids: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
    let selected = assign_task_id.and_then(|id| tasks.iter().position(|t| t.id == id));

    let mut assign = button::suggested(if busy { "Assigning..." } else { "Assign to all active users" });
    if !busy && assign_task_id.is_some() {
        assign = assign.on_press(Message::AutoAssign);
    }

    section = section.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(
                dropdown(labels, selected, move |idx| {
                    Message::SelectAssignTask(ids.get(idx).cloned().unwrap_or_default())
                })
                .width(Length::Fill),
            )
            .push(assign),
    );

    section.into()
}

fn role_button(role: Role, current: Role) -> Element<'static, Message> {
    let btn = if role == current {
        button::suggested(role.label())
    } else {
        button::standard(role.label())
    };
    btn.on_press(Message::UserFormRole(role)).into()
}

fn priority_button(priority: Priority, current: Priority) -> Element<'static, Message> {
    let btn = if priority == current {
        button::suggested(priority.label())
    } else {
        button::standard(priority.label())
    };
    btn.on_press(Message::TaskFormPriority(priority)).into()
}
