use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    state::AppState,
};

/// Resolves the user behind a session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user that still exists.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Session holds no user
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Session user was deleted
    /// - `Err(AppError::DbErr | SessionErr)` - Store failure
    pub async fn require(&self) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}

/// Rejects requests without a logged-in user before they reach the handler.
///
/// On success the [`User`] is inserted into the request extensions for handlers to
/// extract with `Extension<User>`.
pub async fn require_login(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
