use crate::api::ApiError;
use crate::core::assignment::Assignment;
use crate::core::task::{Priority, Task};
use crate::core::user::{Role, User};

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    OpenPage(Page),

    // Admin — reads
    RefreshAdmin,
    UsersLoaded(Result<Vec<User>, ApiError>),
    TasksLoaded(Result<Vec<Task>, ApiError>),

    // Admin — user creation form
    UserFormName(String),
    UserFormEmail(String),
    UserFormRole(Role),
    SubmitUser,
    UserCreated(Result<User, ApiError>),

    // Admin — task creation form
    TaskFormTitle(String),
    TaskFormDescription(String),
    TaskFormInstructions(String),
    TaskFormPriority(Priority),
    SubmitTask,
    TaskCreated(Result<Task, ApiError>),

    // Admin — bulk assignment
    SelectAssignTask(String),
    AutoAssign,
    AutoAssigned(Result<u64, ApiError>),

    // User view
    RefreshUser,
    ActiveUsersLoaded(Result<Vec<User>, ApiError>),
    SelectUser(String),
    /// Carries the email that triggered the fetch so a slow response for a
    /// previously selected user can be discarded.
    AssignmentsLoaded(String, Result<Vec<Assignment>, ApiError>),
    MarkComplete(String),
    AssignmentCompleted(Result<Assignment, ApiError>),

    // Settings
    SetBackendUrl(String),
    ToggleDebugLogging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Admin,
    User,
    Settings,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Admin => "Admin",
            Self::User => "My Tasks",
            Self::Settings => "Settings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Home => "go-home-symbolic",
            Self::Admin => "system-users-symbolic",
            Self::User => "mail-folder-inbox-symbolic",
            Self::Settings => "emblem-system-symbolic",
        }
    }

    pub const ALL: &'static [Page] = &[Page::Home, Page::Admin, Page::User, Page::Settings];

    /// Pages that start a new sidebar section (divider drawn above them).
    pub const SECTION_STARTS: &'static [Page] = &[Page::Settings];
}
