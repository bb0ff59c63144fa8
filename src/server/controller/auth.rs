use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Extension, Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::user::{LoginParam, RegisterUserParam, User},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Creates an account from the registration form and logs it in.
///
/// # Returns
/// - `201 Created` - `UserDto` of the new account, session cookie set
/// - `400 Bad Request` - `FormErrorDto` listing field errors
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service
        .register(RegisterUserParam::from_dto(form))
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Logs in with a username and password.
///
/// # Returns
/// - `200 OK` - `UserDto` of the account, session cookie set
/// - `400 Bad Request` - `FormErrorDto` for blank fields or wrong credentials
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.login(LoginParam::from_dto(form)).await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Ends the session. Succeeds whether or not anyone was logged in.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).logout().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the logged-in user resolved by the auth middleware.
pub async fn get_user(Extension(user): Extension<User>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(user.into_dto())))
}
