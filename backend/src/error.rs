use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::ErrorResponse;

pub const MISSING_IMAGES: &str = "Both RGB and thermal images are required";
const ANALYZE_FAILED: &str = "Failed to analyze images";

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Both RGB and thermal images are required")]
    MissingImages,
    #[error("Failed to read upload: {0}")]
    Upload(#[from] MultipartError),
    #[error("Preprocessing error: {0}")]
    Preprocessing(String),
    #[error("Model error: {0}")]
    Model(String),
}

impl ResponseError for AnalyzeError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::MissingImages => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AnalyzeError::MissingImages => {
                log::warn!("Rejected analyze request: {}", self);
                MISSING_IMAGES.to_string()
            }
            _ => {
                log::error!("Error analyzing images: {}", self);
                ANALYZE_FAILED.to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { error })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Shoe not found: {0}")]
    NotFound(String),
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AnalyzeError::MissingImages.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AnalyzeError::Model("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            CatalogError::NotFound("9".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_missing_images_message() {
        assert_eq!(AnalyzeError::MissingImages.to_string(), MISSING_IMAGES);
    }
}
