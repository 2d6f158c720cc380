use super::{
    repository::LoginRepository,
    utils::{LoginFormState, LOGIN_FAILURE_FALLBACK, LOGIN_SUCCESS_MESSAGE},
};
use crate::{
    api::{ApiError, LoginRequest},
    state::{
        notifications::{use_toasts, ToastQueue},
        profile::use_api_client,
        session::Session,
    },
    utils::{lifetime::Lifetime, navigation},
};
use leptos::*;
use std::rc::Rc;

/// Exchanges credentials for a token and stores it in the session.
pub async fn login_request(
    repo: &LoginRepository,
    session: &Session,
    request: LoginRequest,
) -> Result<(), ApiError> {
    let response = repo.login(&request).await?;
    session.store_token(&response.token);
    log::debug!("Login succeeded for {}", request.email);
    Ok(())
}

pub fn report_login_result(toasts: &ToastQueue, result: &Result<(), ApiError>) {
    match result {
        Ok(()) => {
            toasts.success(LOGIN_SUCCESS_MESSAGE);
            navigation::navigate_after("/main", navigation::REDIRECT_DELAY_MS);
        }
        Err(err) => {
            log::warn!("Login failed: {}", err);
            toasts.error(err.toast_message(LOGIN_FAILURE_FALLBACK));
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub login_action: Action<LoginRequest, Option<Result<(), ApiError>>>,
    toasts: ToastQueue,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => self.login_action.dispatch(request),
            Err(err) => {
                self.toasts.error(format!("❌ {}", err.error));
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_api_client();
    let session = api.session().clone();
    let repo = LoginRepository::new_with_client(Rc::new(api));
    let lifetime = Lifetime::bound_to_owner();
    let toasts = use_toasts();
    let form = LoginFormState::new();

    let login_action = create_action(move |request: &LoginRequest| {
        let request = request.clone();
        let repo = repo.clone();
        let session = session.clone();
        let lifetime = lifetime.clone();
        async move {
            lifetime
                .run(async move { login_request(&repo, &session, request).await })
                .await
        }
    });

    create_effect(move |_| {
        if let Some(Some(result)) = login_action.value().get() {
            report_login_result(&toasts, &result);
        }
    });

    LoginViewModel {
        form,
        login_action,
        toasts,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{api_client_for, provide_offline_session},
        ssr::with_runtime,
    };
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            provide_offline_session(None);
            let vm = use_login_view_model();
            assert!(vm.form.email.get().is_empty());
            assert!(vm.login_action.value().get().is_none());
        });
    }

    #[test]
    fn submit_with_empty_form_only_toasts() {
        with_runtime(|| {
            provide_offline_session(None);
            let vm = use_login_view_model();
            vm.submit();
            let toasts = use_toasts().snapshot();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].message, "❌ Please enter your email.");
            assert_eq!(vm.login_action.version().get_untracked(), 0);
        });
    }

    #[tokio::test]
    async fn login_request_stores_token() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({"token": "jwt-123"}));
        });
        let session = Session::in_memory(None);
        let repo = LoginRepository::new_with_client(Rc::new(api_client_for(
            &server,
            session.clone(),
        )));

        login_request(
            &repo,
            &session,
            LoginRequest {
                email: "ana@example.com".into(),
                password: "pw".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(session.token().as_deref(), Some("jwt-123"));
    }

    #[tokio::test]
    async fn failed_login_reports_server_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(400).json_body(json!({"error": "User not found"}));
        });
        let session = Session::in_memory(None);
        let repo = LoginRepository::new_with_client(Rc::new(api_client_for(
            &server,
            session.clone(),
        )));

        let result = login_request(
            &repo,
            &session,
            LoginRequest {
                email: "nobody@example.com".into(),
                password: "pw".into(),
            },
        )
        .await;
        assert!(session.token().is_none());

        let runtime = create_runtime();
        let toasts = ToastQueue::new();
        report_login_result(&toasts, &result);
        assert_eq!(toasts.snapshot()[0].message, "❌ User not found");
        runtime.dispose();
    }
}
