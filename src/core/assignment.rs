use serde::{Deserialize, Serialize};

/// Completion state of an assignment. The backend may grow new states, so
/// anything unrecognized deserializes to `Other` and is treated as not
/// completed rather than failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Completed,
    #[serde(other)]
    Other,
}

impl AssignmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Other => "other",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// A link between one task and one user, created server-side by the
/// auto-assign operation. Only `status` ever changes, and only
/// pending → completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: String,
    pub task_id: String,
    pub user_email: String,
    pub status: AssignmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_states() {
        let a: Assignment = serde_json::from_str(
            r#"{"_id": "a1", "task_id": "t1", "user_email": "ada@x.com", "status": "pending"}"#,
        )
        .unwrap();
        assert_eq!(a.status, AssignmentStatus::Pending);
        assert!(!a.status.is_completed());

        let b: Assignment = serde_json::from_str(
            r#"{"_id": "a2", "task_id": "t1", "user_email": "ada@x.com", "status": "completed"}"#,
        )
        .unwrap();
        assert!(b.status.is_completed());
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let a: Assignment = serde_json::from_str(
            r#"{"_id": "a1", "task_id": "t1", "user_email": "ada@x.com", "status": "archived"}"#,
        )
        .unwrap();
        assert_eq!(a.status, AssignmentStatus::Other);
        assert!(!a.status.is_completed());
    }
}
