use leptos::{html::Video, *};

use crate::{
    components::common::{Button, ButtonVariant},
    utils::camera::{CameraState, CapturedPhoto, FRAME_HEIGHT, FRAME_WIDTH},
};

/// Live preview, capture and photo review for clock-in.
#[component]
pub fn CameraPanel(
    #[prop(into)] camera: Signal<CameraState>,
    #[prop(into)] photo: Signal<Option<CapturedPhoto>>,
    video_ref: NodeRef<Video>,
    on_open: Callback<()>,
    on_capture: Callback<()>,
) -> impl IntoView {
    let streaming = move || camera.get() == CameraState::Streaming;
    let preview = move || photo.with(|p| p.as_ref().and_then(|p| p.preview_url.clone()));

    view! {
        <div class="flex flex-col items-center gap-4">
            <video
                node_ref=video_ref
                autoplay=true
                playsinline=true
                muted=true
                width=FRAME_WIDTH
                height=FRAME_HEIGHT
                class="rounded-lg shadow-md bg-black"
                class:hidden=move || !streaming()
            ></video>
            {move || {
                preview()
                    .filter(|_| !streaming())
                    .map(|src| {
                        view! {
                            <img src=src alt="Captured" class="rounded-lg shadow-md w-80"/>
                        }
                    })
            }}
            <Show
                when=streaming
                fallback=move || {
                    view! {
                        <Button variant=ButtonVariant::Outline on:click=move |_| on_open.call(())>
                            {move || {
                                if photo.with(Option::is_some) { "Retake Photo" } else { "Open Camera" }
                            }}
                        </Button>
                    }
                }
            >
                <Button variant=ButtonVariant::Primary on:click=move |_| on_capture.call(())>
                    "Take Photo"
                </Button>
            </Show>
        </div>
    }
}
