//! User domain models and registration parameters.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::{
    model::user::{RegisterDto, UserDto},
    server::{error::AppError, model::required},
};

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid e-mail regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parses a stored or submitted role name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Registered user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError)` - The stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or_else(|| {
            AppError::InternalError(format!(
                "User {} has unknown role '{}'",
                entity.id, entity.role
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Normalises an e-mail address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validated registration input. The password is still plaintext here.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterUserParams {
    /// Validates the registration payload.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Valid name, e-mail, password and role
    /// - `Err(AppError::BadRequest)` - Blank name, malformed e-mail, short password
    ///   or unknown role
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let name = required("name", dto.name)?;

        let email = normalize_email(&dto.email);
        if !EMAIL_RE.is_match(&email) {
            return Err(AppError::BadRequest("Please add a valid email".to_string()));
        }

        if dto.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        // The requested role is trusted as-is; there is no admin approval step.
        let role = match dto.role.as_deref() {
            None => Role::User,
            Some(role) => Role::parse(role)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown role '{}'", role)))?,
        };

        Ok(Self {
            name,
            email,
            password: dto.password,
            role,
        })
    }
}

/// Row data for inserting a user once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}
