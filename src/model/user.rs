use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
}

/// Login form. Missing fields deserialize as empty and fail validation.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct LoginDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Registration form mirroring a standard user-creation form.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RegisterDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}
