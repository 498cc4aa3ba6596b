//! API request and response types
//!
//! Request bodies use `Option` for required fields on purpose: absence must
//! surface as a 400 with a validation message, not as a deserialization
//! rejection.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// User as returned by the API (password hash never leaves the server)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub role: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Student creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub ra: Option<String>,
    pub cpf: Option<String>,
}

/// Student update request (all fields optional, only present ones change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub ra: Option<String>,
    pub cpf: Option<String>,
}

/// Student as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub ra: String,
    pub cpf: String,
}

/// Fake-data seeding request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulateRequest {
    pub count: Option<u32>,
}

/// Flat error/status body: `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"email": "a@b.co"}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("a@b.co"));
        assert!(req.password.is_none());
    }

    #[test]
    fn user_response_has_no_password_field() {
        let user = UserResponse {
            id: 1,
            email: "a@b.co".to_string(),
            role: "admin".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
    }

    #[test]
    fn update_request_defaults_to_all_none() {
        let req = UpdateStudentRequest::default();
        assert!(req.name.is_none() && req.email.is_none() && req.ra.is_none() && req.cpf.is_none());
    }
}
