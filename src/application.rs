use cosmic::app::{Core, Task as CosmicTask};
use cosmic::widget::{button, icon, nav_bar};
use cosmic::{executor, Application, Element};

use crate::api::ApiClient;
use crate::config::TaskflowConfig;
use crate::core::assignment::Assignment;
use crate::core::task::{NewTask, Priority, Task};
use crate::core::user::{NewUser, Role, User};
use crate::message::{Message, Page};
use crate::pages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Normal,
    Admin,
    User,
}

impl LaunchMode {
    fn initial_page(&self) -> Page {
        match self {
            Self::Normal => Page::Home,
            Self::Admin => Page::Admin,
            Self::User => Page::User,
        }
    }
}

pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::Annotator,
        }
    }
}

pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub priority: Priority,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            instructions: String::new(),
            priority: Priority::Normal,
        }
    }
}

pub struct Taskflow {
    core: Core,
    nav_model: nav_bar::Model,
    config: TaskflowConfig,
    cosmic_config: cosmic::cosmic_config::Config,
    api: ApiClient,
    active_page: Page,

    // Admin view
    users: Vec<User>,
    tasks: Vec<Task>,
    user_form: UserForm,
    task_form: TaskForm,
    assign_task_id: Option<String>,
    admin_busy: bool,
    /// Outcome of the last mutating admin operation, shown inline.
    admin_status: Option<Result<String, String>>,
    admin_refreshed: Option<String>,

    // User view
    active_users: Vec<User>,
    selected_email: Option<String>,
    assignments: Vec<Assignment>,
    user_busy: bool,
    /// Dedicated error banner for the user view, cleared at the start of
    /// each operation.
    user_error: Option<String>,
    user_refreshed: Option<String>,
}

pub struct Flags {
    pub config: TaskflowConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
    /// Resolved at startup (environment override or config); injected into
    /// the API client here and nowhere else.
    pub backend_url: String,
    pub launch_mode: LaunchMode,
}

impl Application for Taskflow {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.taskflow.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let mut nav_model = nav_bar::Model::default();
        for page in Page::ALL {
            let mut item = nav_model.insert();
            item = item
                .text(page.title())
                .icon(icon::from_name(page.icon_name()).icon())
                .data(*page);
            if Page::SECTION_STARTS.contains(page) {
                item.divider_above(true);
            }
        }

        let api = ApiClient::new(&flags.backend_url);
        log::info!("Using backend at {}", api.base_url());

        let mut app = Self {
            core,
            nav_model,
            config: flags.config,
            cosmic_config: flags.cosmic_config,
            api,
            active_page: Page::Home,
            users: Vec::new(),
            tasks: Vec::new(),
            user_form: UserForm::default(),
            task_form: TaskForm::default(),
            assign_task_id: None,
            admin_busy: false,
            admin_status: None,
            admin_refreshed: None,
            active_users: Vec::new(),
            selected_email: None,
            assignments: Vec::new(),
            user_busy: false,
            user_error: None,
            user_refreshed: None,
        };

        let initial = flags.launch_mode.initial_page();
        app.activate_nav(initial);
        let task = app.open_page(initial);

        (app, task)
    }

    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(&self.nav_model)
    }

    fn on_nav_select(&mut self, id: nav_bar::Id) -> CosmicTask<Message> {
        if let Some(page) = self.nav_model.data::<Page>(id).copied() {
            self.nav_model.activate(id);
            return self.open_page(page);
        }
        CosmicTask::none()
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        let refresh = match self.active_page {
            Page::Admin => Some(Message::RefreshAdmin),
            Page::User => Some(Message::RefreshUser),
            _ => None,
        };

        match refresh {
            Some(message) => vec![
                button::icon(icon::from_name("view-refresh-symbolic"))
                    .on_press(message)
                    .into(),
            ],
            None => Vec::new(),
        }
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::OpenPage(page) => {
                self.activate_nav(page);
                return self.open_page(page);
            }

            // --- Admin reads ---
            Message::RefreshAdmin => {
                return CosmicTask::batch(vec![self.load_users(), self.load_tasks()]);
            }

            Message::UsersLoaded(result) => match result {
                Ok(users) => {
                    self.users = users;
                    self.admin_refreshed = Some(now_stamp());
                }
                // Leave the current list in place; the user can retry.
                Err(e) => log::warn!("Failed to load users: {}", e),
            },

            Message::TasksLoaded(result) => match result {
                Ok(tasks) => {
                    self.tasks = tasks;
                    self.admin_refreshed = Some(now_stamp());
                    // Drop a selection that no longer refers to a known task.
                    if let Some(ref id) = self.assign_task_id {
                        if !self.tasks.iter().any(|t| &t.id == id) {
                            self.assign_task_id = None;
                        }
                    }
                }
                Err(e) => log::warn!("Failed to load tasks: {}", e),
            },

            // --- Admin user creation ---
            Message::UserFormName(value) => {
                self.user_form.name = value;
            }

            Message::UserFormEmail(value) => {
                self.user_form.email = value;
            }

            Message::UserFormRole(role) => {
                self.user_form.role = role;
            }

            Message::SubmitUser => {
                if self.admin_busy {
                    return CosmicTask::none();
                }
                self.admin_status = None;
                self.admin_busy = true;

                // Submitted as typed; the backend validates.
                let new_user = NewUser {
                    name: self.user_form.name.clone(),
                    email: self.user_form.email.clone(),
                    role: self.user_form.role,
                };
                let api = self.api.clone();
                return CosmicTask::perform(
                    async move { api.create_user(&new_user).await },
                    |result| cosmic::Action::App(Message::UserCreated(result)),
                );
            }

            Message::UserCreated(result) => {
                self.admin_busy = false;
                match result {
                    Ok(user) => {
                        log::info!("Created user {}", user.email);
                        self.admin_status = Some(Ok("User created".to_string()));
                        self.user_form = UserForm::default();
                        return self.load_users();
                    }
                    Err(e) => {
                        self.admin_status = Some(Err(e.to_string()));
                    }
                }
            }

            // --- Admin task creation ---
            Message::TaskFormTitle(value) => {
                self.task_form.title = value;
            }

            Message::TaskFormDescription(value) => {
                self.task_form.description = value;
            }

            Message::TaskFormInstructions(value) => {
                self.task_form.instructions = value;
            }

            Message::TaskFormPriority(priority) => {
                self.task_form.priority = priority;
            }

            Message::SubmitTask => {
                if self.admin_busy {
                    return CosmicTask::none();
                }
                self.admin_status = None;
                self.admin_busy = true;

                let new_task = NewTask {
                    title: self.task_form.title.clone(),
                    description: self.task_form.description.clone(),
                    instructions: self.task_form.instructions.clone(),
                    priority: self.task_form.priority,
                };
                let api = self.api.clone();
                return CosmicTask::perform(
                    async move { api.create_task(&new_task).await },
                    |result| cosmic::Action::App(Message::TaskCreated(result)),
                );
            }

            Message::TaskCreated(result) => {
                self.admin_busy = false;
                match result {
                    Ok(task) => {
                        log::info!("Created task {}", task.title);
                        self.admin_status = Some(Ok("Task created".to_string()));
                        self.task_form = TaskForm::default();
                        return self.load_tasks();
                    }
                    Err(e) => {
                        self.admin_status = Some(Err(e.to_string()));
                    }
                }
            }

            // --- Admin bulk assignment ---
            Message::SelectAssignTask(task_id) => {
                if !task_id.is_empty() {
                    self.assign_task_id = Some(task_id);
                }
            }

            Message::AutoAssign => {
                if self.admin_busy {
                    return CosmicTask::none();
                }
                self.admin_status = None;

                // Precondition: a task must be selected before any request
                // goes out.
                let Some(task_id) = self.assign_task_id.clone() else {
                    self.admin_status = Some(Err("Select a task to assign".to_string()));
                    return CosmicTask::none();
                };

                self.admin_busy = true;
                let api = self.api.clone();
                return CosmicTask::perform(
                    async move { api.auto_assign(&task_id).await },
                    |result| cosmic::Action::App(Message::AutoAssigned(result)),
                );
            }

            Message::AutoAssigned(result) => {
                self.admin_busy = false;
                match result {
                    Ok(assigned) => {
                        log::info!("Auto-assigned to {} users", assigned);
                        self.admin_status =
                            Some(Ok(format!("Assigned to {} user(s)", assigned)));
                    }
                    Err(e) => {
                        self.admin_status = Some(Err(e.to_string()));
                    }
                }
            }

            // --- User view ---
            Message::RefreshUser => {
                self.user_error = None;
                let mut batch = vec![self.load_active_users()];
                if let Some(email) = self.selected_email.clone() {
                    batch.push(self.load_assignments(email));
                }
                return CosmicTask::batch(batch);
            }

            Message::ActiveUsersLoaded(result) => match result {
                Ok(users) => {
                    self.active_users = users;
                    self.user_refreshed = Some(now_stamp());
                }
                Err(e) => {
                    log::warn!("Failed to load active users: {}", e);
                    self.user_error = Some(e.to_string());
                }
            },

            Message::SelectUser(email) => {
                if email.is_empty() {
                    return CosmicTask::none();
                }
                self.user_error = None;
                self.selected_email = Some(email.clone());
                return self.load_assignments(email);
            }

            Message::AssignmentsLoaded(email, result) => {
                // A slow response for a previously selected user must not
                // overwrite the current selection's list.
                if self.selected_email.as_deref() != Some(email.as_str()) {
                    log::debug!("Discarding stale assignment list for {}", email);
                    return CosmicTask::none();
                }
                self.user_busy = false;
                match result {
                    Ok(assignments) => {
                        self.assignments = assignments;
                        self.user_refreshed = Some(now_stamp());
                    }
                    Err(e) => {
                        self.user_error = Some(e.to_string());
                    }
                }
            }

            Message::MarkComplete(assignment_id) => {
                if self.user_busy {
                    return CosmicTask::none();
                }
                // Completion is one-way; an already completed row is a no-op.
                let already_completed = self
                    .assignments
                    .iter()
                    .any(|a| a.id == assignment_id && a.status.is_completed());
                if already_completed {
                    return CosmicTask::none();
                }

                self.user_error = None;
                self.user_busy = true;
                let api = self.api.clone();
                return CosmicTask::perform(
                    async move { api.complete_assignment(&assignment_id).await },
                    |result| cosmic::Action::App(Message::AssignmentCompleted(result)),
                );
            }

            Message::AssignmentCompleted(result) => match result {
                Ok(assignment) => {
                    log::info!("Completed assignment {}", assignment.id);
                    // No optimistic mutation: refetch the list and let the
                    // busy flag clear when it lands.
                    if let Some(email) = self.selected_email.clone() {
                        return self.load_assignments(email);
                    }
                    self.user_busy = false;
                }
                Err(e) => {
                    self.user_busy = false;
                    self.user_error = Some(e.to_string());
                }
            },

            // --- Settings ---
            Message::SetBackendUrl(url) => {
                self.config.backend_url = url;
                self.save_config();
                self.api = ApiClient::new(&self.config.backend_url);
            }

            Message::ToggleDebugLogging => {
                self.config.debug_logging = !self.config.debug_logging;
                taskflow::set_debug_logging(self.config.debug_logging);
                self.save_config();
            }
        }

        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match self.active_page {
            Page::Home => pages::home::home_view(),
            Page::Admin => pages::admin::admin_view(
                &self.users,
                &self.tasks,
                &self.user_form,
                &self.task_form,
                self.assign_task_id.as_deref(),
                self.admin_busy,
                &self.admin_status,
                &self.admin_refreshed,
            ),
            Page::User => pages::user::user_view(
                &self.active_users,
                self.selected_email.as_deref(),
                &self.assignments,
                self.user_busy,
                &self.user_error,
                &self.user_refreshed,
            ),
            Page::Settings => pages::settings::settings_view(&self.config),
        }
    }
}

impl Taskflow {
    /// Switch the rendered page and kick off its initial fetches. Each view
    /// starts from a clean slate; nothing is cached across navigation.
    fn open_page(&mut self, page: Page) -> CosmicTask<Message> {
        if self.active_page == page {
            return CosmicTask::none();
        }
        self.active_page = page;
        match page {
            Page::Admin => {
                self.reset_admin();
                CosmicTask::batch(vec![self.load_users(), self.load_tasks()])
            }
            Page::User => {
                self.reset_user();
                self.load_active_users()
            }
            Page::Home | Page::Settings => CosmicTask::none(),
        }
    }

    fn reset_admin(&mut self) {
        self.users.clear();
        self.tasks.clear();
        self.user_form = UserForm::default();
        self.task_form = TaskForm::default();
        self.assign_task_id = None;
        self.admin_busy = false;
        self.admin_status = None;
        self.admin_refreshed = None;
    }

    fn reset_user(&mut self) {
        self.active_users.clear();
        self.selected_email = None;
        self.assignments.clear();
        self.user_busy = false;
        self.user_error = None;
        self.user_refreshed = None;
    }

    fn activate_nav(&mut self, page: Page) {
        let target = self
            .nav_model
            .iter()
            .find(|&id| self.nav_model.data::<Page>(id) == Some(&page));
        if let Some(id) = target {
            self.nav_model.activate(id);
        }
    }

    fn load_users(&self) -> CosmicTask<Message> {
        let api = self.api.clone();
        CosmicTask::perform(
            async move { api.list_users(false).await },
            |result| cosmic::Action::App(Message::UsersLoaded(result)),
        )
    }

    fn load_tasks(&self) -> CosmicTask<Message> {
        let api = self.api.clone();
        CosmicTask::perform(
            async move { api.list_tasks().await },
            |result| cosmic::Action::App(Message::TasksLoaded(result)),
        )
    }

    fn load_active_users(&self) -> CosmicTask<Message> {
        let api = self.api.clone();
        CosmicTask::perform(
            async move { api.list_users(true).await },
            |result| cosmic::Action::App(Message::ActiveUsersLoaded(result)),
        )
    }

    fn load_assignments(&self, email: String) -> CosmicTask<Message> {
        let api = self.api.clone();
        CosmicTask::perform(
            async move {
                let result = api.list_assignments(&email).await;
                (email, result)
            },
            |(email, result)| cosmic::Action::App(Message::AssignmentsLoaded(email, result)),
        )
    }

    fn save_config(&self) {
        use cosmic::cosmic_config::CosmicConfigEntry;
        if let Err(e) = self.config.write_entry(&self.cosmic_config) {
            log::error!("Failed to save config: {:?}", e);
        }
    }
}

fn now_stamp() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
