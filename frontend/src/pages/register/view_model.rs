use super::{
    repository::RegisterRepository,
    utils::{RegisterFormState, REGISTER_FAILURE_FALLBACK, REGISTER_SUCCESS_MESSAGE},
};
use crate::{
    api::{ApiError, RegisterRequest},
    state::{
        notifications::{use_toasts, ToastQueue},
        profile::use_api_client,
    },
    utils::{lifetime::Lifetime, navigation},
};
use leptos::*;
use std::rc::Rc;

pub async fn register_request(
    repo: &RegisterRepository,
    request: RegisterRequest,
) -> Result<(), ApiError> {
    repo.register(&request).await?;
    log::debug!("Registered {} as {}", request.email, request.role.as_str());
    Ok(())
}

pub fn report_register_result(toasts: &ToastQueue, result: &Result<(), ApiError>) {
    match result {
        Ok(()) => {
            toasts.success(REGISTER_SUCCESS_MESSAGE);
            navigation::navigate_after("/login", navigation::REDIRECT_DELAY_MS);
        }
        Err(err) => {
            log::warn!("Registration failed: {}", err);
            toasts.error(err.toast_message(REGISTER_FAILURE_FALLBACK));
        }
    }
}

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub register_action: Action<RegisterRequest, Option<Result<(), ApiError>>>,
    toasts: ToastQueue,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => self.register_action.dispatch(request),
            Err(err) => {
                self.toasts.error(format!("❌ {}", err.error));
            }
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let repo = RegisterRepository::new_with_client(Rc::new(use_api_client()));
    let lifetime = Lifetime::bound_to_owner();
    let toasts = use_toasts();
    let form = RegisterFormState::new();

    let register_action = create_action(move |request: &RegisterRequest| {
        let request = request.clone();
        let repo = repo.clone();
        let lifetime = lifetime.clone();
        async move {
            lifetime
                .run(async move { register_request(&repo, request).await })
                .await
        }
    });

    create_effect(move |_| {
        if let Some(Some(result)) = register_action.value().get() {
            report_register_result(&toasts, &result);
        }
    });

    RegisterViewModel {
        form,
        register_action,
        toasts,
    }
}
