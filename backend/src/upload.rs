use actix_multipart::Multipart;
use futures::TryStreamExt;
use sha2::{Digest, Sha256};
use shared::capture::Modality;

use crate::error::AnalyzeError;

/// One file part of an analyze request, read fully into memory.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub modality: Modality,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedImage {
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.data);
        hex::encode(hasher.finalize())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

#[derive(Debug, Default)]
pub struct AnalyzeUpload {
    pub rgb: Option<UploadedImage>,
    pub thermal: Option<UploadedImage>,
}

fn modality_for(field_name: &str) -> Option<Modality> {
    [Modality::Rgb, Modality::Thermal]
        .into_iter()
        .find(|m| m.form_field() == field_name)
}

impl AnalyzeUpload {
    /// Drains the multipart body. Unrecognised fields are skipped; for a
    /// repeated field the first part wins. A part counts as present even when
    /// it is empty.
    pub async fn read(mut payload: Multipart) -> Result<Self, AnalyzeError> {
        let mut upload = AnalyzeUpload::default();

        while let Some(mut field) = payload.try_next().await? {
            let field_name = field.name().map(str::to_owned);
            let content_type = field.content_type().map(|mime| mime.to_string());
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_owned);

            let mut data = Vec::new();
            while let Some(chunk) = field.try_next().await? {
                data.extend_from_slice(&chunk);
            }

            let Some(modality) = field_name.as_deref().and_then(modality_for) else {
                log::debug!("Skipping unexpected multipart field {:?}", field_name);
                continue;
            };

            let slot = match modality {
                Modality::Rgb => &mut upload.rgb,
                Modality::Thermal => &mut upload.thermal,
            };
            if slot.is_none() {
                *slot = Some(UploadedImage {
                    modality,
                    file_name,
                    content_type,
                    data,
                });
            }
        }

        Ok(upload)
    }

    pub fn into_pair(self) -> Result<(UploadedImage, UploadedImage), AnalyzeError> {
        match (self.rgb, self.thermal) {
            (Some(rgb), Some(thermal)) => Ok((rgb, thermal)),
            _ => Err(AnalyzeError::MissingImages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(modality: Modality, data: &[u8]) -> UploadedImage {
        UploadedImage {
            modality,
            file_name: None,
            content_type: None,
            data: data.to_vec(),
        }
    }

    #[test]
    fn test_field_names() {
        assert_eq!(modality_for("rgbImage"), Some(Modality::Rgb));
        assert_eq!(modality_for("thermalImage"), Some(Modality::Thermal));
        assert_eq!(modality_for("image"), None);
    }

    #[test]
    fn test_into_pair_requires_both() {
        let upload = AnalyzeUpload {
            rgb: Some(image(Modality::Rgb, b"rgb")),
            thermal: None,
        };
        assert!(matches!(upload.into_pair(), Err(AnalyzeError::MissingImages)));

        let upload = AnalyzeUpload {
            rgb: Some(image(Modality::Rgb, b"rgb")),
            thermal: Some(image(Modality::Thermal, b"")),
        };
        let (rgb, thermal) = upload.into_pair().unwrap();
        assert_eq!(rgb.len(), 3);
        assert_eq!(thermal.len(), 0);
    }

    #[test]
    fn test_digest() {
        assert_eq!(
            image(Modality::Rgb, b"").digest(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
