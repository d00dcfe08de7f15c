//! Two-modality capture: one RGB still and one pseudo-thermal still.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use strum_macros::{AsRefStr, EnumIter};

use crate::routes::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, AsRefStr)]
pub enum Modality {
    #[default]
    #[strum(to_string = "rgb")]
    Rgb,
    #[strum(to_string = "thermal")]
    Thermal,
}

impl Modality {
    pub fn label(&self) -> &'static str {
        match self {
            Modality::Rgb => "RGB Image",
            Modality::Thermal => "Thermal Image",
        }
    }

    /// Multipart field name expected by `/api/analyze`.
    pub fn form_field(&self) -> &'static str {
        match self {
            Modality::Rgb => "rgbImage",
            Modality::Thermal => "thermalImage",
        }
    }

    /// CSS filter applied to the live preview. The thermal feed is the same
    /// camera, recoloured.
    pub fn preview_filter(&self) -> Option<&'static str> {
        match self {
            Modality::Rgb => None,
            Modality::Thermal => Some("hue-rotate(180deg) saturate(200%)"),
        }
    }

    /// Fill painted over the still frame before encoding it.
    pub fn capture_tint(&self) -> Option<&'static str> {
        match self {
            Modality::Rgb => None,
            Modality::Thermal => Some("rgba(255, 0, 0, 0.3)"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("not a data URL")]
    NotDataUrl,
    #[error("data URL is not base64 encoded")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Decode(String),
}

/// A captured still, held as the `data:` URL produced by the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    data_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl CapturedImage {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn decode(&self) -> Result<DecodedImage, CaptureError> {
        let rest = self
            .data_url
            .strip_prefix("data:")
            .ok_or(CaptureError::NotDataUrl)?;
        let (meta, payload) = rest.split_once(',').ok_or(CaptureError::NotDataUrl)?;
        let mime_type = meta
            .strip_suffix(";base64")
            .ok_or(CaptureError::NotBase64)?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| CaptureError::Decode(e.to_string()))?;

        Ok(DecodedImage {
            mime_type: if mime_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                mime_type.to_string()
            },
            bytes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    SelectTab(Modality),
    StartCamera,
    Captured(CapturedImage),
    Retake,
    CameraFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptureState {
    pub active: Modality,
    pub rgb: Option<CapturedImage>,
    pub thermal: Option<CapturedImage>,
    pub camera_active: bool,
}

impl CaptureState {
    pub fn image(&self, modality: Modality) -> Option<&CapturedImage> {
        match modality {
            Modality::Rgb => self.rgb.as_ref(),
            Modality::Thermal => self.thermal.as_ref(),
        }
    }

    fn slot_mut(&mut self, modality: Modality) -> &mut Option<CapturedImage> {
        match modality {
            Modality::Rgb => &mut self.rgb,
            Modality::Thermal => &mut self.thermal,
        }
    }

    pub fn both_ready(&self) -> bool {
        self.rgb.is_some() && self.thermal.is_some()
    }

    pub fn continue_target(&self) -> Option<Screen> {
        self.both_ready().then_some(Screen::Analyzing)
    }

    /// True exactly while the camera must be held open.
    pub fn wants_camera(&self) -> bool {
        self.camera_active && self.image(self.active).is_none()
    }

    pub fn apply(&self, event: CaptureEvent) -> Self {
        let mut next = self.clone();
        match event {
            CaptureEvent::SelectTab(modality) => {
                next.active = modality;
                next.camera_active = true;
            }
            CaptureEvent::StartCamera => next.camera_active = true,
            CaptureEvent::Captured(image) => {
                if self.wants_camera() {
                    *next.slot_mut(self.active) = Some(image);
                    next.camera_active = false;
                }
            }
            CaptureEvent::Retake => {
                *next.slot_mut(self.active) = None;
                next.camera_active = true;
            }
            // Logged by the caller; the screen stays in its pre-capture state.
            CaptureEvent::CameraFailed => {}
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn captured(state: &CaptureState, modality: Modality) -> CaptureState {
        state
            .apply(CaptureEvent::SelectTab(modality))
            .apply(CaptureEvent::Captured(CapturedImage::new(PNG_URL)))
    }

    #[test]
    fn test_continue_requires_both_images() {
        let state = CaptureState::default();
        assert!(!state.both_ready());
        assert_eq!(state.continue_target(), None);

        let state = captured(&state, Modality::Rgb);
        assert!(state.rgb.is_some());
        assert_eq!(state.continue_target(), None);

        let state = captured(&state, Modality::Thermal);
        assert!(state.both_ready());
        assert_eq!(state.continue_target(), Some(Screen::Analyzing));
    }

    #[test]
    fn test_retake_clears_only_active_modality() {
        let state = captured(&captured(&CaptureState::default(), Modality::Rgb), Modality::Thermal);
        let state = state.apply(CaptureEvent::Retake);
        assert_eq!(state.active, Modality::Thermal);
        assert!(state.thermal.is_none());
        assert!(state.rgb.is_some());
        assert!(state.wants_camera());
        assert!(!state.both_ready());
    }

    #[test]
    fn test_capture_releases_camera() {
        let state = CaptureState::default().apply(CaptureEvent::StartCamera);
        assert!(state.wants_camera());
        let state = state.apply(CaptureEvent::Captured(CapturedImage::new(PNG_URL)));
        assert!(!state.camera_active);
        assert!(!state.wants_camera());
    }

    #[test]
    fn test_capture_without_live_camera_is_ignored() {
        let state = CaptureState::default();
        let next = state.apply(CaptureEvent::Captured(CapturedImage::new(PNG_URL)));
        assert_eq!(next, state);
    }

    #[test]
    fn test_camera_failure_leaves_state_unchanged() {
        let state = CaptureState::default().apply(CaptureEvent::StartCamera);
        assert_eq!(state.apply(CaptureEvent::CameraFailed), state);
    }

    #[test]
    fn test_switching_to_captured_tab_does_not_reopen_camera() {
        let state = captured(&CaptureState::default(), Modality::Rgb)
            .apply(CaptureEvent::SelectTab(Modality::Thermal))
            .apply(CaptureEvent::SelectTab(Modality::Rgb));
        assert!(state.camera_active);
        assert!(!state.wants_camera());
    }

    #[test]
    fn test_decode_data_url() {
        let decoded = CapturedImage::new(PNG_URL).decode().unwrap();
        assert_eq!(decoded.mime_type, "image/png");
        assert_eq!(&decoded.bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_decode_rejects_malformed_urls() {
        assert_eq!(CapturedImage::new("image.png").decode(), Err(CaptureError::NotDataUrl));
        assert_eq!(
            CapturedImage::new("data:text/plain,hello").decode(),
            Err(CaptureError::NotBase64)
        );
        assert!(matches!(
            CapturedImage::new("data:image/png;base64,!!!").decode(),
            Err(CaptureError::Decode(_))
        ));
    }
}
