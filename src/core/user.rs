use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Annotator,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annotator => "annotator",
            Self::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Annotator => "Annotator",
            Self::Admin => "Admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "annotator" => Some(Self::Annotator),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub const ALL: &'static [Role] = &[Role::Annotator, Role::Admin];
}

/// A workforce member as returned by the backend. The backend owns identity
/// and the `is_active` flag; the client never mutates either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

/// Request body for creating a user. Submitted as typed by the admin;
/// validation happens server-side.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_keyword_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_str(role.as_str()), Some(*role));
        }
        assert_eq!(Role::from_str("reviewer"), None);
    }

    #[test]
    fn user_parses_backend_shape() {
        let json = r#"{
            "_id": "665f1c2ab8",
            "name": "Ada",
            "email": "ada@x.com",
            "role": "annotator",
            "is_active": true
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "665f1c2ab8");
        assert_eq!(user.role, Role::Annotator);
        assert!(user.is_active);
    }

    #[test]
    fn new_user_serializes_role_lowercase() {
        let body = NewUser {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            role: Role::Admin,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["email"], "ada@x.com");
    }
}
