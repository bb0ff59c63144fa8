use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::user::FormErrors};

const NOT_AUTHENTICATED: &str = "Authentication credentials were not provided.";
const INVALID_FORM: &str = "Please correct the errors below.";

/// Message shown when a username/password pair does not match an account.
pub const INVALID_LOGIN: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request did not come from a logged in browser session. Results in a
    /// 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response, the same as an anonymous request.
    #[error("User {0} from session was not found in database")]
    UserNotInDatabase(i32),

    /// Username/password pair did not match any account.
    ///
    /// Results in a 400 Bad Request with the error listed under `__all__`.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Submitted login or registration form failed validation.
    ///
    /// Results in a 400 Bad Request listing every field error.
    #[error("Form validation failed: {0:?}")]
    InvalidForm(FormErrors),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with a generic message
/// - `InvalidCredentials` / `InvalidForm` → 400 Bad Request with per-field errors
///
/// Session lookups that fail are logged at debug level; the client never learns
/// whether an account exists.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: NOT_AUTHENTICATED.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                let mut errors = FormErrors::default();
                errors.add_non_field(INVALID_LOGIN);
                (StatusCode::BAD_REQUEST, Json(errors.into_dto(INVALID_LOGIN))).into_response()
            }
            Self::InvalidForm(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors.into_dto(INVALID_FORM))).into_response()
            }
        }
    }
}
