use leptos::*;

use crate::{
    api::{ApiClient, ApiError, UserProfile},
    state::{role::Role, session::Session},
    utils::lifetime::Lifetime,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

type ProfileLoad = Option<Result<UserProfile, ApiError>>;

impl ProfileState {
    /// `None` while the fetch is pending; `Some(None)` when it was cancelled.
    pub fn from_load(load: Option<ProfileLoad>) -> Self {
        match load {
            None => Self {
                loading: true,
                ..Self::default()
            },
            Some(None) => Self::default(),
            Some(Some(Ok(profile))) => Self {
                profile: Some(profile),
                ..Self::default()
            },
            Some(Some(Err(err))) => Self {
                error: Some(err),
                ..Self::default()
            },
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|p| p.role)
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::browser)
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}

/// Profile for the mounting component, fetched once per mount and never cached.
/// `on_error` runs when the fetch fails.
pub fn use_profile(
    lifetime: &Lifetime,
    on_error: impl Fn(&ApiError) + 'static,
) -> Signal<ProfileState> {
    let api = use_api_client();
    let scope = lifetime.clone();
    let resource = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            let scope = scope.clone();
            async move { scope.run(async move { api.get_profile().await }).await }
        },
    );
    create_effect(move |_| {
        if let Some(Some(Err(err))) = resource.get() {
            log::error!("Error fetching user data: {}", err);
            on_error(&err);
        }
    });
    Signal::derive(move || ProfileState::from_load(resource.get()))
}
