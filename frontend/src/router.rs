use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::RequireSession,
    config::provide_display_zone,
    pages::{
        attendance::AttendancePage, dashboard::DashboardPage,
        employee_attendance::EmployeeAttendancePage, employee_detail::EmployeeDetailPage,
        landing::LandingPage, login::LoginPage, monitor::MonitorPage, register::RegisterPage,
    },
    state::{notifications::provide_toasts, session::Session},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/main",
    "/main/attendance",
    "/main/monitor",
    "/main/monitor/details",
    "/main/monitor/details/attendance",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/main",
    "/main/attendance",
    "/main/monitor",
    "/main/monitor/details",
    "/main/monitor/details/attendance",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Root view with the session, API client and toast queue in context.
pub fn app_root() -> impl IntoView {
    let session = Session::browser();
    provide_context(session.clone());
    provide_context(ApiClient::new(session));
    provide_toasts();
    provide_display_zone();
    provide_meta_context();

    view! {
        <Title text="WFH Attendance"/>
        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
                <Route path="/login" view=LoginPage/>
                <Route path="/register" view=RegisterPage/>
                <Route path="/main" view=ProtectedDashboard/>
                <Route path="/main/attendance" view=ProtectedAttendance/>
                <Route path="/main/monitor" view=ProtectedMonitor/>
                <Route path="/main/monitor/details" view=ProtectedEmployeeDetail/>
                <Route path="/main/monitor/details/attendance" view=ProtectedEmployeeAttendance/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireSession><DashboardPage/></RequireSession> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireSession><AttendancePage/></RequireSession> }
}

#[component]
fn ProtectedMonitor() -> impl IntoView {
    view! { <RequireSession><MonitorPage/></RequireSession> }
}

#[component]
fn ProtectedEmployeeDetail() -> impl IntoView {
    view! { <RequireSession><EmployeeDetailPage/></RequireSession> }
}

#[component]
fn ProtectedEmployeeAttendance() -> impl IntoView {
    view! { <RequireSession><EmployeeAttendancePage/></RequireSession> }
}
