use super::{
    repository::EmployeeAttendanceRepository,
    utils::{
        filter_records, AttendanceFilter, HISTORY_FETCH_FALLBACK, MISSING_ID,
        NO_RECORDS_FOR_EMPLOYEE,
    },
};
use crate::{
    api::{ApiError, AttendanceRecord},
    state::profile::use_api_client,
    utils::lifetime::Lifetime,
};
use leptos::*;
use std::rc::Rc;

type HistoryLoad = Option<Result<Vec<AttendanceRecord>, ApiError>>;

pub async fn load_history(
    repo: &EmployeeAttendanceRepository,
    id: Option<String>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let Some(id) = id else {
        return Err(ApiError::validation(MISSING_ID));
    };
    repo.fetch(&id).await.map_err(|err| {
        log::error!("Failed to fetch attendance for {}: {}", id, err);
        err
    })
}

/// Text shown in place of the table when the fetch fails.
pub fn history_error_message(err: &ApiError) -> String {
    if err.is_not_found() {
        NO_RECORDS_FOR_EMPLOYEE.to_string()
    } else if err.error.trim().is_empty() {
        HISTORY_FETCH_FALLBACK.to_string()
    } else {
        err.error.clone()
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeAttendanceViewModel {
    pub history_resource: Resource<(), HistoryLoad>,
    pub start: RwSignal<String>,
    pub end: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl EmployeeAttendanceViewModel {
    pub fn loading(&self) -> Signal<bool> {
        let resource = self.history_resource;
        Signal::derive(move || resource.get().is_none())
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let resource = self.history_resource;
        Signal::derive(move || {
            resource.with(|load| match load {
                Some(Some(Err(err))) => Some(history_error_message(err)),
                _ => None,
            })
        })
    }

    pub fn records(&self) -> Signal<Vec<AttendanceRecord>> {
        let resource = self.history_resource;
        Signal::derive(move || {
            resource.with(|load| match load {
                Some(Some(Ok(records))) => records.clone(),
                _ => Vec::new(),
            })
        })
    }

    pub fn filter(&self) -> Signal<AttendanceFilter> {
        let (start, end, status) = (self.start, self.end, self.status);
        Signal::derive(move || {
            AttendanceFilter::from_inputs(&start.get(), &end.get(), &status.get())
        })
    }

    /// Recomputed whenever the source list or any filter input changes.
    pub fn visible(&self) -> Signal<Vec<AttendanceRecord>> {
        let records = self.records();
        let filter = self.filter();
        Signal::derive(move || records.with(|list| filter.with(|f| filter_records(list, f))))
    }
}

pub fn use_employee_attendance_view_model(id: Option<String>) -> EmployeeAttendanceViewModel {
    let repo = EmployeeAttendanceRepository::new_with_client(Rc::new(use_api_client()));
    let lifetime = Lifetime::bound_to_owner();
    let history_resource = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            let lifetime = lifetime.clone();
            let id = id.clone();
            async move { lifetime.run(async move { load_history(&repo, id).await }).await }
        },
    );

    EmployeeAttendanceViewModel {
        history_resource,
        start: create_rw_signal(String::new()),
        end: create_rw_signal(String::new()),
        status: create_rw_signal(String::new()),
    }
}
