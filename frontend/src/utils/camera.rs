use futures::channel::oneshot;
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, Url,
};

use crate::api::PhotoUpload;

pub const FRAME_WIDTH: u32 = 640;
pub const FRAME_HEIGHT: u32 = 480;
pub const PHOTO_FILE_NAME: &str = "attendance_photo.jpg";
pub const PHOTO_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Idle,
    Streaming,
    Captured,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Camera is not available in this browser")]
    Unavailable,
    #[error("Camera permission was denied")]
    PermissionDenied,
    #[error("Could not capture a frame: {0}")]
    Capture(String),
    #[error("Could not encode the photo: {0}")]
    Encode(String),
}

impl CameraError {
    fn from_media_error(err: JsValue) -> Self {
        let name = js_sys::Reflect::get(&err, &"name".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        match name.as_str() {
            "NotAllowedError" | "SecurityError" => CameraError::PermissionDenied,
            "NotFoundError" | "NotReadableError" | "OverconstrainedError" => {
                CameraError::Unavailable
            }
            _ => CameraError::Capture(js_message(&err)),
        }
    }
}

fn js_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// A captured JPEG, consumed once by clock-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPhoto {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
    pub preview_url: Option<String>,
}

impl CapturedPhoto {
    pub fn jpeg(bytes: Vec<u8>, preview_url: Option<String>) -> Self {
        Self {
            bytes,
            file_name: PHOTO_FILE_NAME.to_string(),
            mime_type: PHOTO_MIME_TYPE.to_string(),
            preview_url,
        }
    }

    pub fn upload(&self) -> PhotoUpload {
        PhotoUpload {
            bytes: self.bytes.clone(),
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
        }
    }
}

/// Requests the camera and attaches the stream to `video`.
pub async fn start_stream(video: &HtmlVideoElement) -> Result<MediaStream, CameraError> {
    let window = web_sys::window().ok_or(CameraError::Unavailable)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| CameraError::Unavailable)?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(CameraError::from_media_error)?;
    let stream: MediaStream = JsFuture::from(promise)
        .await
        .map_err(CameraError::from_media_error)?
        .dyn_into()
        .map_err(|_| CameraError::Unavailable)?;
    video.set_src_object(Some(&stream));
    if let Ok(play) = video.play() {
        let _ = JsFuture::from(play).await;
    }
    log::debug!("Camera stream started");
    Ok(stream)
}

pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
    log::debug!("Camera stream stopped");
}

fn frame_canvas() -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), CameraError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(CameraError::Unavailable)?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| CameraError::Capture(js_message(&e)))?
        .dyn_into()
        .map_err(|_| CameraError::Capture("canvas element unavailable".into()))?;
    canvas.set_width(FRAME_WIDTH);
    canvas.set_height(FRAME_HEIGHT);
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| CameraError::Capture(js_message(&e)))?
        .ok_or_else(|| CameraError::Capture("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|_| CameraError::Capture("2d context unavailable".into()))?;
    Ok((canvas, context))
}

async fn encode_jpeg(canvas: &HtmlCanvasElement) -> Result<Blob, CameraError> {
    let (tx, rx) = oneshot::channel::<JsValue>();
    let callback = Closure::once_into_js(move |blob: JsValue| {
        let _ = tx.send(blob);
    });
    canvas
        .to_blob_with_type(callback.unchecked_ref(), PHOTO_MIME_TYPE)
        .map_err(|e| CameraError::Encode(js_message(&e)))?;
    let blob = rx
        .await
        .map_err(|_| CameraError::Encode("encoder dropped".into()))?;
    blob.dyn_into::<Blob>()
        .map_err(|_| CameraError::Encode("browser returned no image".into()))
}

/// Draws the current video frame onto a 640x480 surface and encodes it as JPEG.
pub async fn capture_frame(video: &HtmlVideoElement) -> Result<CapturedPhoto, CameraError> {
    let (canvas, context) = frame_canvas()?;
    context
        .draw_image_with_html_video_element_and_dw_and_dh(
            video,
            0.0,
            0.0,
            f64::from(FRAME_WIDTH),
            f64::from(FRAME_HEIGHT),
        )
        .map_err(|e| CameraError::Capture(js_message(&e)))?;
    let blob = encode_jpeg(&canvas).await?;
    let buffer = JsFuture::from(blob.array_buffer())
        .await
        .map_err(|e| CameraError::Encode(js_message(&e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview_url = Url::create_object_url_with_blob(&blob).ok();
    log::debug!("Captured {} byte photo", bytes.len());
    Ok(CapturedPhoto::jpeg(bytes, preview_url))
}

pub fn revoke_preview(photo: &CapturedPhoto) {
    if let Some(url) = &photo.preview_url {
        let _ = Url::revoke_object_url(url);
    }
}
