//! Per-modality preprocessing ahead of inference.
//!
//! Both steps currently pass the bytes through untouched; the real pipeline
//! (normalisation, segmentation, thermal calibration) is not part of this
//! repository.

use shared::capture::Modality;

use crate::error::AnalyzeError;
use crate::upload::UploadedImage;

#[derive(Debug, Clone)]
pub struct PreprocessedImage {
    pub modality: Modality,
    pub data: Vec<u8>,
}

fn expect_modality(image: &UploadedImage, modality: Modality) -> Result<(), AnalyzeError> {
    if image.modality == modality {
        Ok(())
    } else {
        Err(AnalyzeError::Preprocessing(format!(
            "expected {} image, got {}",
            modality.as_ref(),
            image.modality.as_ref()
        )))
    }
}

pub fn preprocess_rgb(image: &UploadedImage) -> Result<PreprocessedImage, AnalyzeError> {
    expect_modality(image, Modality::Rgb)?;
    Ok(PreprocessedImage {
        modality: Modality::Rgb,
        data: image.data.clone(),
    })
}

pub fn preprocess_thermal(image: &UploadedImage) -> Result<PreprocessedImage, AnalyzeError> {
    expect_modality(image, Modality::Thermal)?;
    Ok(PreprocessedImage {
        modality: Modality::Thermal,
        data: image.data.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(modality: Modality) -> UploadedImage {
        UploadedImage {
            modality,
            file_name: Some("foot.png".into()),
            content_type: Some("image/png".into()),
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_passes_bytes_through() {
        let out = preprocess_thermal(&upload(Modality::Thermal)).unwrap();
        assert_eq!(out.modality, Modality::Thermal);
        assert_eq!(out.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_wrong_modality() {
        assert!(matches!(
            preprocess_rgb(&upload(Modality::Thermal)),
            Err(AnalyzeError::Preprocessing(_))
        ));
    }
}
