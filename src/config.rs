use cosmic::cosmic_config::{CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct TaskflowConfig {
    /// Base URL of the task-assignment backend. Trailing slashes are
    /// tolerated; the API client normalizes them away.
    pub backend_url: String,
    pub debug_logging: bool,
}

impl Default for TaskflowConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            debug_logging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = TaskflowConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert!(!config.debug_logging);
    }
}
