use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "normal" => Some(Self::Normal),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub const ALL: &'static [Priority] = &[Priority::Low, Priority::Normal, Priority::High];
}

impl Default for Priority {
    fn default() -> Self {
        Self::Normal
    }
}

/// A unit of work as returned by the backend. Description and instructions
/// are free text and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_keyword_roundtrip() {
        for p in Priority::ALL {
            assert_eq!(Priority::from_str(p.as_str()), Some(*p));
        }
        assert_eq!(Priority::from_str("urgent"), None);
    }

    #[test]
    fn task_parses_with_missing_optional_fields() {
        let json = r#"{"_id": "t1", "title": "Label images"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.title, "Label images");
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Normal);
    }

    #[test]
    fn new_task_serializes_priority_lowercase() {
        let body = NewTask {
            title: "Label images".to_string(),
            description: String::new(),
            instructions: String::new(),
            priority: Priority::High,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["priority"], "high");
    }
}
