use crate::{
    api::{ApiError, RegisterRequest},
    components::forms::SelectOption,
    state::role::Role,
};
use leptos::*;

pub const REGISTER_SUCCESS_MESSAGE: &str = "🎉 Registration successful!";
pub const REGISTER_FAILURE_FALLBACK: &str = "Something went wrong!";

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl RegisterFormState {
    pub fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal(Role::Employee),
        }
    }

    pub fn to_request(&self) -> Result<RegisterRequest, ApiError> {
        let name = self.name.get_untracked();
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_registration(&name, &email, &password)?;
        Ok(RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password,
            role: self.role.get_untracked(),
        })
    }
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation("Please enter your name."));
    }
    if email.trim().is_empty() {
        return Err(ApiError::validation("Please enter your email."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter a password."));
    }
    Ok(())
}

pub fn role_options() -> Vec<SelectOption> {
    Role::ALL
        .iter()
        .map(|role| SelectOption::new(role.as_str(), role.label()))
        .collect()
}
