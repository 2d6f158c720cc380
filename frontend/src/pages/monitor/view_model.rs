use super::{repository::MonitorRepository, utils::filter_employees};
use crate::{
    api::{ApiError, EmployeeSummary},
    state::profile::use_api_client,
    utils::lifetime::Lifetime,
};
use leptos::*;
use std::rc::Rc;

type EmployeesLoad = Option<Result<Vec<EmployeeSummary>, ApiError>>;

#[derive(Clone, Copy)]
pub struct MonitorViewModel {
    pub employees_resource: Resource<(), EmployeesLoad>,
    pub query: RwSignal<String>,
}

impl MonitorViewModel {
    pub fn loading(&self) -> Signal<bool> {
        let resource = self.employees_resource;
        Signal::derive(move || resource.get().is_none())
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let resource = self.employees_resource;
        Signal::derive(move || resource.get().flatten().and_then(Result::err))
    }

    /// Fetched list narrowed by the current search query.
    pub fn visible(&self) -> Signal<Vec<EmployeeSummary>> {
        let resource = self.employees_resource;
        let query = self.query;
        Signal::derive(move || {
            resource.with(|load| match load {
                Some(Some(Ok(employees))) => query.with(|q| filter_employees(employees, q)),
                _ => Vec::new(),
            })
        })
    }
}

pub async fn load_employees(repo: &MonitorRepository) -> Result<Vec<EmployeeSummary>, ApiError> {
    repo.fetch_employees().await.map_err(|err| {
        log::error!("Failed to fetch employees: {}", err);
        err
    })
}

pub fn use_monitor_view_model() -> MonitorViewModel {
    let repo = MonitorRepository::new_with_client(Rc::new(use_api_client()));
    let lifetime = Lifetime::bound_to_owner();
    let employees_resource = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            let lifetime = lifetime.clone();
            async move { lifetime.run(async move { load_employees(&repo).await }).await }
        },
    );

    MonitorViewModel {
        employees_resource,
        query: create_rw_signal(String::new()),
    }
}
