use serde::{Deserialize, Serialize};

use crate::contract::model::{NewUser, User, UserPatch};
use crate::domain::error::DomainError;

/// REST DTO for user representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Creation timestamp rendered as an RFC 3339 string.
    pub created_at: String,
}

/// REST DTO for creating a new user. Both fields are required; they
/// are optional here so that absence maps to a structured validation
/// error instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CreateUserReq {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// REST DTO for updating a user (partial).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateUserReq {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Static body for the health and database-status endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct StatusDto {
    pub status: &'static str,
    pub message: &'static str,
}

// Conversions between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

impl TryFrom<CreateUserReq> for NewUser {
    type Error = DomainError;

    fn try_from(req: CreateUserReq) -> Result<Self, DomainError> {
        match (req.username, req.email) {
            (Some(username), Some(email)) => Ok(NewUser { username, email }),
            (None, Some(_)) => Err(DomainError::missing_fields(&["username"])),
            (Some(_), None) => Err(DomainError::missing_fields(&["email"])),
            (None, None) => Err(DomainError::missing_fields(&["username", "email"])),
        }
    }
}

impl From<UpdateUserReq> for UserPatch {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            username: req.username,
            email: req.email,
        }
    }
}
