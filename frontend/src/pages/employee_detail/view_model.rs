use super::{
    repository::EmployeeDetailRepository,
    utils::{DetailState, EmployeeField, MISSING_ID, SAVE_FAILED, SAVE_SUCCESS},
};
use crate::{
    api::ApiError,
    state::{
        notifications::{use_toasts, ToastQueue},
        profile::use_api_client,
    },
    utils::lifetime::Lifetime,
};
use leptos::*;
use std::rc::Rc;

/// Fetches the record and seeds both copies; a missing id fails without a request.
pub async fn load_employee(
    repo: &EmployeeDetailRepository,
    id: Option<String>,
    state: RwSignal<DetailState>,
) -> Result<(), ApiError> {
    let Some(id) = id else {
        return Err(ApiError::validation(MISSING_ID));
    };
    let employee = repo.fetch(&id).await.map_err(|err| {
        log::error!("Failed to fetch employee {}: {}", id, err);
        err
    })?;
    state.update(|s| s.load(employee));
    Ok(())
}

/// Sends the full editable field set. The form keeps its edits on failure.
pub async fn save_employee(
    repo: &EmployeeDetailRepository,
    state: RwSignal<DetailState>,
    toasts: ToastQueue,
) -> Result<(), ApiError> {
    let Some((id, request)) = state.with_untracked(DetailState::save_request) else {
        return Ok(());
    };
    let sent = state.with_untracked(|s| s.edited.clone());
    match repo.update(&id, &request).await {
        Ok(()) => {
            if let Some(sent) = sent {
                state.update(|s| s.mark_saved(sent));
            }
            toasts.success(SAVE_SUCCESS);
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to update employee {}: {}", id, err);
            toasts.error(SAVE_FAILED);
            Err(err)
        }
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeDetailViewModel {
    pub id: StoredValue<Option<String>>,
    pub state: RwSignal<DetailState>,
    pub load_resource: Resource<(), Option<Result<(), ApiError>>>,
    pub save_action: Action<(), Option<Result<(), ApiError>>>,
}

impl EmployeeDetailViewModel {
    pub fn edit(&self, field: EmployeeField, value: String) {
        self.state.update(|s| s.edit(field, value));
    }

    pub fn save(&self) {
        if !self.save_action.pending().get_untracked() {
            self.save_action.dispatch(());
        }
    }
}

pub fn use_employee_detail_view_model(id: Option<String>) -> EmployeeDetailViewModel {
    let repo = EmployeeDetailRepository::new_with_client(Rc::new(use_api_client()));
    let lifetime = Lifetime::bound_to_owner();
    let toasts = use_toasts();
    let state = create_rw_signal(DetailState::default());

    let load_resource = {
        let repo = repo.clone();
        let lifetime = lifetime.clone();
        let id = id.clone();
        create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                let lifetime = lifetime.clone();
                let id = id.clone();
                async move {
                    lifetime
                        .run(async move { load_employee(&repo, id, state).await })
                        .await
                }
            },
        )
    };

    let save_action = create_action(move |_: &()| {
        let repo = repo.clone();
        let lifetime = lifetime.clone();
        async move {
            lifetime
                .run(async move { save_employee(&repo, state, toasts).await })
                .await
        }
    });

    EmployeeDetailViewModel {
        id: store_value(id),
        state,
        load_resource,
        save_action,
    }
}
