use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::assignment::Assignment;
use crate::core::task::{NewTask, Task};
use crate::core::user::{NewUser, User};

/// Unified failure type for every backend call. Reads and writes share it;
/// each view decides presentation.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport failure or an unreadable/undecodable response body.
    #[error("request failed: {0}")]
    Network(String),
    /// Non-success HTTP status, carrying the backend's `detail` text when
    /// the body provides one.
    #[error("{detail}")]
    Status { status: u16, detail: String },
}

#[derive(Debug, Deserialize)]
struct AssignedCount {
    assigned: u64,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Build a client for the given backend base URL. The URL is injected
    /// here once at construction; nothing else reads it from the ambient
    /// environment.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_users(&self, active_only: bool) -> Result<Vec<User>, ApiError> {
        let mut req = self.http.get(self.url("/users"));
        if active_only {
            req = req.query(&[("active", "true")]);
        }
        self.fetch_list(req, "users").await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.fetch_list(self.http.get(self.url("/tasks")), "tasks").await
    }

    pub async fn list_assignments(&self, user_email: &str) -> Result<Vec<Assignment>, ApiError> {
        let req = self
            .http
            .get(self.url("/assignments"))
            .query(&[("user_email", user_email)]);
        self.fetch_list(req, "assignments").await
    }

    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, ApiError> {
        self.post_json(&self.url("/users"), new_user).await
    }

    pub async fn create_task(&self, new_task: &NewTask) -> Result<Task, ApiError> {
        self.post_json(&self.url("/admin/tasks"), new_task).await
    }

    /// Ask the backend to create an assignment of one task for every active
    /// user. Returns the number of users assigned; all scheduling happens
    /// server-side.
    pub async fn auto_assign(&self, task_id: &str) -> Result<u64, ApiError> {
        let body = serde_json::json!({ "task_id": task_id });
        let count: AssignedCount = self
            .post_json(&self.url("/admin/assignments/auto"), &body)
            .await?;
        Ok(count.assigned)
    }

    pub async fn complete_assignment(&self, assignment_id: &str) -> Result<Assignment, ApiError> {
        let url = self.url(&format!("/assignments/{}/complete", assignment_id));
        let text = self.send(self.http.post(url)).await?;
        decode(&text)
    }

    // --- Private helpers ---

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, mapping transport failures and non-success statuses
    /// into `ApiError`. Returns the raw body text on success.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: error_detail(status, &text),
            });
        }

        Ok(text)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self.send(self.http.post(url).json(body)).await?;
        decode(&text)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<Vec<T>, ApiError> {
        let text = self.send(req).await?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::Network(format!("invalid JSON in {} response: {}", what, e)))?;
        Ok(parse_list(value, what))
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text)
        .map_err(|e| ApiError::Network(format!("unexpected response body: {}", e)))
}

/// A list endpoint is expected to return a JSON array. A syntactically valid
/// body of any other shape is logged and treated as an empty collection so a
/// malformed payload cannot take down the view.
fn parse_list<T: DeserializeOwned>(value: serde_json::Value, what: &str) -> Vec<T> {
    match serde_json::from_value(value) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Unexpected {} payload, treating as empty: {}", what, e);
            Vec::new()
        }
    }
}

/// Pull the `detail` string out of an error body, falling back to the raw
/// body text or a generic status message.
fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("detail") {
            Some(serde_json::Value::String(s)) => return s.clone(),
            Some(other) if !other.is_null() => return other.to_string(),
            _ => {}
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {}", status)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::user::User;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/users"), "http://localhost:8000/users");
    }

    #[test]
    fn parse_list_accepts_an_array() {
        let value: serde_json::Value = serde_json::from_str(
            r#"[{"_id": "u1", "name": "Ada", "email": "ada@x.com", "role": "annotator", "is_active": true}]"#,
        )
        .unwrap();
        let users: Vec<User> = parse_list(value, "users");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ada");
    }

    #[test]
    fn parse_list_falls_back_to_empty_on_non_array() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"detail": "internal error"}"#).unwrap();
        let users: Vec<User> = parse_list(value, "users");
        assert!(users.is_empty());
    }

    #[test]
    fn error_detail_prefers_backend_detail() {
        let detail = error_detail(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "email already registered"}"#,
        );
        assert_eq!(detail, "email already registered");
    }

    #[test]
    fn error_detail_falls_back_to_body_then_status() {
        assert_eq!(
            error_detail(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            "boom"
        );
        assert_eq!(
            error_detail(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "request failed with status 500 Internal Server Error"
        );
    }

    #[test]
    fn assigned_count_decodes() {
        let count: AssignedCount = decode(r#"{"assigned": 7}"#).unwrap();
        assert_eq!(count.assigned, 7);
    }

    #[test]
    fn decode_failure_is_a_network_error() {
        let result: Result<AssignedCount, ApiError> = decode("not json");
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
