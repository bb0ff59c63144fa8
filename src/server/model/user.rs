//! User domain models and parameters.
//!
//! Provides the domain model for dashboard accounts along with the parameter types
//! used by registration and login, and the field-keyed error collection produced
//! when those forms fail validation.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::model::{
    api::FormErrorDto,
    user::{LoginDto, RegisterDto, UserDto},
};

/// Key under which errors not tied to a single field are reported.
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Dashboard account.
///
/// The password hash never leaves the data layer; see [`UserCredentials`].
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database ID of the user.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            created_at: entity.created_at,
        }
    }
}

/// Stored user together with the password hash, used only to verify a login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub password_hash: String,
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub username: String,
    pub password1: String,
    pub password2: String,
}

impl RegisterUserParam {
    /// Converts the registration form DTO into service parameters.
    ///
    /// # Arguments
    /// - `dto` - Submitted registration form
    ///
    /// # Returns
    /// - `RegisterUserParam` - Parameters with the username trimmed
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            password1: dto.password1,
            password2: dto.password2,
        }
    }
}

/// Parameters for logging in with a username and password.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub username: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            password: dto.password,
        }
    }
}

/// Validation errors for a submitted form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    /// Records an error message against a form field.
    ///
    /// # Arguments
    /// - `field` - Name of the offending form field
    /// - `message` - Human readable message shown next to the field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Records an error that applies to the form as a whole.
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD_ERRORS, message);
    }

    /// Whether the given field already has at least one error.
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for a field, empty if none.
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Converts the errors into the response body of a rejected form.
    ///
    /// # Arguments
    /// - `error` - Summary message placed in the `error` key
    ///
    /// # Returns
    /// - `FormErrorDto` - Summary plus per-field messages
    pub fn into_dto(self, error: &str) -> FormErrorDto {
        FormErrorDto {
            error: error.to_string(),
            fields: self.fields,
        }
    }
}
