//! Username/password authentication.
//!
//! Validates registration and login forms the way a standard user-creation form does,
//! hashes passwords with argon2, and verifies login attempts against stored hashes.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParam, FormErrors, LoginParam, RegisterUserParam, User},
};

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const PASSWORD_MIN_LENGTH: usize = 8;

const REQUIRED: &str = "This field is required.";
const INVALID_USERNAME: &str =
    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
const DUPLICATE_USERNAME: &str = "A user with that username already exists.";
const PASSWORD_MISMATCH: &str = "The two password fields didn't match.";
const PASSWORD_NUMERIC: &str = "This password is entirely numeric.";
const PASSWORD_SIMILAR: &str = "The password is too similar to the username.";

/// Service providing registration and login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Every field is validated and all problems are reported together. The username is
    /// checked for uniqueness only once it is otherwise valid; a concurrent registration
    /// that takes the name between the check and the insert is reported the same way.
    ///
    /// # Arguments
    /// - `param` - Submitted username and both password fields
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::AuthErr(InvalidForm))` - One or more fields failed validation
    /// - `Err(AppError::Internal(PasswordHash))` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let mut errors = validate_registration(&param);

        if !errors.has("username") && user_repo.username_exists(&param.username).await? {
            errors.add("username", DUPLICATE_USERNAME);
        }

        if !errors.is_empty() {
            return Err(AuthError::InvalidForm(errors).into());
        }

        let password_hash = hash_password(&param.password1)?;

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                password_hash,
            })
            .await
            .map_err(registration_conflict)?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Verifies a username/password pair.
    ///
    /// # Arguments
    /// - `param` - Submitted username and password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidForm))` - A field was left blank
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let mut errors = FormErrors::default();
        if param.username.is_empty() {
            errors.add("username", REQUIRED);
        }
        if param.password.is_empty() {
            errors.add("password", REQUIRED);
        }
        if !errors.is_empty() {
            return Err(AuthError::InvalidForm(errors).into());
        }

        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials(&param.username).await? else {
            tracing::debug!("Login attempt for unknown user {}", param.username);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &credentials.password_hash) {
            tracing::debug!("Wrong password for user {}", credentials.user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }
}

/// Checks a registration form without touching the database.
pub fn validate_registration(param: &RegisterUserParam) -> FormErrors {
    let mut errors = FormErrors::default();

    let username_length = param.username.chars().count();
    if param.username.is_empty() {
        errors.add("username", REQUIRED);
    } else if username_length > USERNAME_MAX_LENGTH {
        errors.add(
            "username",
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                USERNAME_MAX_LENGTH, username_length
            ),
        );
    } else if !param.username.chars().all(is_username_char) {
        errors.add("username", INVALID_USERNAME);
    }

    if param.password1.is_empty() {
        errors.add("password1", REQUIRED);
    }

    if param.password2.is_empty() {
        errors.add("password2", REQUIRED);
    } else if !param.password1.is_empty() && param.password1 != param.password2 {
        errors.add("password2", PASSWORD_MISMATCH);
    } else if !param.password1.is_empty() {
        for message in password_problems(&param.password2, &param.username) {
            errors.add("password2", message);
        }
    }

    errors
}

/// Maps a failed user insert to an application error.
///
/// # Returns
/// - `AppError::AuthErr(InvalidForm)` - The unique username index rejected the row
/// - `AppError::DbErr` - Any other database failure
pub fn registration_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            let mut errors = FormErrors::default();
            errors.add("username", DUPLICATE_USERNAME);
            AuthError::InvalidForm(errors).into()
        }
        _ => err.into(),
    }
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')
}

fn password_problems(password: &str, username: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if !username.is_empty() && password.to_lowercase() == username.to_lowercase() {
        problems.push(PASSWORD_SIMILAR.to_string());
    }
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        problems.push(format!(
            "This password is too short. It must contain at least {} characters.",
            PASSWORD_MIN_LENGTH
        ));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        problems.push(PASSWORD_NUMERIC.to_string());
    }

    problems
}

/// Hashes a password into an argon2 PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored PHC string.
///
/// Unparseable hashes, such as the unusable `"!"` marker, never verify.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
