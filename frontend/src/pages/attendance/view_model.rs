use super::{
    repository::AttendanceRepository,
    utils::{
        TrackerState, CLOCK_IN_DONE, CLOCK_IN_FAILED, CLOCK_OUT_DONE, CLOCK_OUT_FAILED,
        MISSING_TOKEN, PHOTO_REQUIRED, STATUS_FETCH_FAILED,
    },
};
use crate::{
    api::ApiError,
    state::{
        notifications::{use_toasts, ToastQueue},
        profile::use_api_client,
    },
    utils::{
        camera::{self, CameraState, CapturedPhoto},
        lifetime::Lifetime,
        navigation,
    },
};
use leptos::{html::Video, *};
use std::rc::Rc;
use web_sys::MediaStream;

/// Fetches today's status; without a session it redirects to login and sends nothing.
pub async fn load_status(
    repo: &AttendanceRepository,
    state: RwSignal<TrackerState>,
    toasts: ToastQueue,
) -> Result<(), ApiError> {
    if repo.session().token().is_none() {
        navigation::navigate("/login");
        return Err(ApiError::missing_token());
    }
    state.update(|s| s.loading = true);
    let result = repo.fetch_status().await;
    state.update(|s| {
        s.loading = false;
        if let Ok(response) = &result {
            s.apply_status(response.clone());
        }
    });
    if let Err(err) = &result {
        log::error!("Failed to fetch attendance status: {}", err);
        toasts.error(STATUS_FETCH_FAILED);
    }
    result.map(|_| ())
}

/// Clock-in with the captured photo, then reconcile with the server.
///
/// The completion toast is shown whether or not the request succeeded; a failure
/// is reported by an error toast first.
pub async fn submit_clock_in(
    repo: &AttendanceRepository,
    photo: Option<CapturedPhoto>,
    state: RwSignal<TrackerState>,
    toasts: ToastQueue,
) -> Result<(), ApiError> {
    if repo.session().token().is_none() {
        toasts.error(MISSING_TOKEN);
        return Err(ApiError::missing_token());
    }
    let Some(photo) = photo else {
        toasts.error(PHOTO_REQUIRED);
        return Err(ApiError::validation(PHOTO_REQUIRED));
    };

    state.update(|s| s.loading = true);
    let result = repo.clock_in(photo.upload()).await;
    match &result {
        Ok(response) => {
            state.update(|s| s.apply_clock_in(response.attendance.clock_in));
            let _ = load_status(repo, state, toasts).await;
        }
        Err(err) => {
            log::error!("Clock-in failed: {}", err);
            toasts.error(CLOCK_IN_FAILED);
        }
    }
    toasts.success(CLOCK_IN_DONE);
    state.update(|s| s.loading = false);
    result.map(|_| ())
}

/// Same completion-toast behaviour as [`submit_clock_in`].
pub async fn submit_clock_out(
    repo: &AttendanceRepository,
    state: RwSignal<TrackerState>,
    toasts: ToastQueue,
) -> Result<(), ApiError> {
    if repo.session().token().is_none() {
        toasts.error(MISSING_TOKEN);
        return Err(ApiError::missing_token());
    }

    state.update(|s| s.loading = true);
    let result = repo.clock_out().await;
    match &result {
        Ok(response) => {
            state.update(|s| s.apply_clock_out(response.attendance.clock_out));
            let _ = load_status(repo, state, toasts).await;
        }
        Err(err) => {
            log::error!("Clock-out failed: {}", err);
            toasts.error(CLOCK_OUT_FAILED);
        }
    }
    toasts.success(CLOCK_OUT_DONE);
    state.update(|s| s.loading = false);
    result.map(|_| ())
}

#[derive(Clone, Copy)]
pub struct TrackerViewModel {
    pub state: RwSignal<TrackerState>,
    pub camera: RwSignal<CameraState>,
    pub photo: RwSignal<Option<CapturedPhoto>>,
    pub video_ref: NodeRef<Video>,
    pub status_resource: Resource<(), Option<Result<(), ApiError>>>,
    pub clock_in_action: Action<(), Option<Result<(), ApiError>>>,
    pub clock_out_action: Action<(), Option<Result<(), ApiError>>>,
    stream: StoredValue<Option<MediaStream>>,
    lifetime: StoredValue<Lifetime>,
    toasts: ToastQueue,
}

impl TrackerViewModel {
    fn stop_stream(&self) {
        if let Some(stream) = self.stream.get_value() {
            camera::stop_stream(&stream);
        }
        self.stream.set_value(None);
    }

    fn replace_photo(&self, next: Option<CapturedPhoto>) {
        if let Some(previous) = self.photo.get_untracked() {
            camera::revoke_preview(&previous);
        }
        self.photo.set(next);
    }

    fn camera_failed(&self, err: camera::CameraError) {
        log::error!("Camera error: {}", err);
        self.toasts.error(format!("❌ {}", err));
        self.stop_stream();
        self.camera.set(CameraState::Idle);
    }

    pub fn open_camera(&self) {
        self.camera.set(CameraState::Streaming);
        let Some(video) = self.video_ref.get_untracked() else {
            self.camera_failed(camera::CameraError::Unavailable);
            return;
        };
        let vm = *self;
        self.lifetime.get_value().spawn(async move {
            match camera::start_stream(&video).await {
                Ok(stream) => vm.stream.set_value(Some(stream)),
                Err(err) => vm.camera_failed(err),
            }
        });
    }

    pub fn capture(&self) {
        let Some(video) = self.video_ref.get_untracked() else {
            self.camera_failed(camera::CameraError::Unavailable);
            return;
        };
        let vm = *self;
        self.lifetime.get_value().spawn(async move {
            let result = camera::capture_frame(&video).await;
            vm.stop_stream();
            match result {
                Ok(photo) => {
                    vm.replace_photo(Some(photo));
                    vm.camera.set(CameraState::Captured);
                }
                Err(err) => vm.camera_failed(err),
            }
        });
    }

    pub fn clock_in(&self) {
        if !self.clock_in_action.pending().get_untracked() {
            self.clock_in_action.dispatch(());
        }
    }

    pub fn clock_out(&self) {
        if !self.clock_out_action.pending().get_untracked() {
            self.clock_out_action.dispatch(());
        }
    }

    fn release(&self) {
        self.stop_stream();
        if let Some(photo) = self.photo.get_untracked() {
            camera::revoke_preview(&photo);
        }
    }
}

pub fn use_tracker_view_model() -> TrackerViewModel {
    let repo = AttendanceRepository::new_with_client(Rc::new(use_api_client()));
    let lifetime = Lifetime::bound_to_owner();
    let toasts = use_toasts();
    let state = create_rw_signal(TrackerState::default());
    let camera = create_rw_signal(CameraState::Idle);
    let photo = create_rw_signal(None::<CapturedPhoto>);

    let status_resource = {
        let repo = repo.clone();
        let lifetime = lifetime.clone();
        create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                let lifetime = lifetime.clone();
                async move {
                    lifetime
                        .run(async move { load_status(&repo, state, toasts).await })
                        .await
                }
            },
        )
    };

    let clock_in_action = {
        let repo = repo.clone();
        let lifetime = lifetime.clone();
        create_action(move |_: &()| {
            let repo = repo.clone();
            let lifetime = lifetime.clone();
            let captured = photo.get_untracked();
            async move {
                let result = lifetime
                    .run(async move { submit_clock_in(&repo, captured, state, toasts).await })
                    .await;
                if matches!(result, Some(Ok(()))) {
                    if let Some(used) = photo.get_untracked() {
                        camera::revoke_preview(&used);
                    }
                    photo.set(None);
                    camera.set(CameraState::Idle);
                }
                result
            }
        })
    };

    let clock_out_action = {
        let lifetime = lifetime.clone();
        create_action(move |_: &()| {
            let repo = repo.clone();
            let lifetime = lifetime.clone();
            async move {
                lifetime
                    .run(async move { submit_clock_out(&repo, state, toasts).await })
                    .await
            }
        })
    };

    let vm = TrackerViewModel {
        state,
        camera,
        photo,
        video_ref: create_node_ref::<Video>(),
        status_resource,
        clock_in_action,
        clock_out_action,
        stream: store_value(None),
        lifetime: store_value(lifetime),
        toasts,
    };
    on_cleanup(move || vm.release());
    vm
}
