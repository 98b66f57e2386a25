use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Stored row of the `users` table. `password` holds the bcrypt hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate user record as submitted on sign-up.
///
/// Fields are optional so that a missing field is reported by validation
/// rather than rejected by the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserDraft {
    #[validate(
        required(message = "User Name is required"),
        length(
            min = 2,
            max = 50,
            message = "User Name must be between 2 and 50 characters"
        )
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "User Email is required"),
        regex(path = *EMAIL_PATTERN, message = "Please fill a valid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "User Password is required"),
        length(
            min = 6,
            message = "User Password must be at least 6 characters"
        )
    )]
    pub password: Option<String>,
}

/// A draft that passed validation. The password is still plain text here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserDraft {
    /// Trims `name` and `email`, lowercases `email`; empty strings become missing.
    pub fn normalized(self) -> Self {
        Self {
            name: non_empty(self.name.map(|n| n.trim().to_string())),
            email: non_empty(self.email.as_deref().map(normalize_email)),
            password: non_empty(self.password),
        }
    }

    pub fn into_new_user(self) -> Result<NewUser, ValidationErrors> {
        let draft = self.normalized();
        draft.validate()?;

        match (draft.name, draft.email, draft.password) {
            (Some(name), Some(email), Some(password)) => Ok(NewUser {
                name,
                email,
                password,
            }),
            // `required` has already rejected any missing field.
            _ => Err(ValidationErrors::new()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(required(message = "User Email is required"))]
    pub email: Option<String>,

    #[validate(required(message = "User Password is required"))]
    pub password: Option<String>,
}

/// Email and plain-text password of a sign-in attempt that has both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn into_credentials(self) -> Result<Credentials, ValidationErrors> {
        let request = Self {
            email: non_empty(self.email.as_deref().map(normalize_email)),
            password: non_empty(self.password),
        };
        request.validate()?;

        match (request.email, request.password) {
            (Some(email), Some(password)) => Ok(Credentials { email, password }),
            _ => Err(ValidationErrors::new()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
