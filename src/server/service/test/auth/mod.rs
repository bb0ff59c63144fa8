use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{LoginParam, RegisterUserParam},
    service::auth::{registration_conflict, AuthService},
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;

fn registration(username: &str, password: &str) -> RegisterUserParam {
    RegisterUserParam {
        username: username.to_string(),
        password1: password.to_string(),
        password2: password.to_string(),
    }
}

fn credentials(username: &str, password: &str) -> LoginParam {
    LoginParam {
        username: username.to_string(),
        password: password.to_string(),
    }
}
