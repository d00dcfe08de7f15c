use js_sys::{Object, Reflect};
use shared::capture::{CapturedImage, Modality};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

/// A live, environment-facing camera stream. Dropping it stops every track
/// and detaches the preview element, whichever way the screen is left.
pub struct CameraStream {
    stream: MediaStream,
    video: Option<HtmlVideoElement>,
}

impl CameraStream {
    pub async fn open() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
        let devices = window.navigator().media_devices()?;

        let video = Object::new();
        Reflect::set(&video, &"facingMode".into(), &"environment".into())?;
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video);

        let promise = devices.get_user_media_with_constraints(&constraints)?;
        let stream = JsFuture::from(promise).await?.dyn_into::<MediaStream>()?;
        Ok(Self {
            stream,
            video: None,
        })
    }

    pub fn attach(&mut self, video: HtmlVideoElement) {
        video.set_src_object(Some(&self.stream));
        self.video = Some(video);
    }
}

impl Drop for CameraStream {
    fn drop(&mut self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        if let Some(video) = self.video.take() {
            video.set_src_object(None);
        }
        log::debug!("Camera released");
    }
}

/// Grabs the current preview frame as a PNG data URL. The thermal modality
/// gets a red wash over the frame.
pub fn capture_still(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
    modality: Modality,
) -> Result<CapturedImage, JsValue> {
    let width = video.video_width();
    let height = video.video_height();
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    ctx.draw_image_with_html_video_element_and_dw_and_dh(
        video,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )?;

    if let Some(tint) = modality.capture_tint() {
        ctx.set_fill_style_str(tint);
        ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    Ok(CapturedImage::new(canvas.to_data_url_with_type("image/png")?))
}
