use std::sync::Arc;

use shared::analysis::{sample_conditions, sample_recommendations};
use shared::capture::Modality;
use shared::{AnalysisReport, Condition, RiskTier, ScanId};

use crate::clock::Clock;
use crate::error::AnalyzeError;
use crate::inference::config::AnalyzerConfig;
use crate::inference::preprocess::{PreprocessedImage, preprocess_rgb, preprocess_thermal};
use crate::upload::UploadedImage;

/// Turns an RGB/thermal image pair into a risk report.
pub trait ImageAnalyzer: Send + Sync {
    fn analyze(
        &self,
        rgb: &UploadedImage,
        thermal: &UploadedImage,
    ) -> Result<AnalysisReport, AnalyzeError>;
}

/// Returns the fixed sample report for any input.
#[derive(Clone)]
pub struct MockAnalyzer {
    config: AnalyzerConfig,
    clock: Arc<dyn Clock>,
}

impl MockAnalyzer {
    pub fn new(config: AnalyzerConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    fn run_inference(
        &self,
        rgb: &PreprocessedImage,
        thermal: &PreprocessedImage,
    ) -> Result<(RiskTier, Vec<Condition>), AnalyzeError> {
        if (rgb.modality, thermal.modality) != (Modality::Rgb, Modality::Thermal) {
            return Err(AnalyzeError::Model(format!(
                "inputs must be rgb then thermal, got {} and {}",
                rgb.modality.as_ref(),
                thermal.modality.as_ref()
            )));
        }
        log::debug!(
            "Running mock inference on {} {} bytes and {} {} bytes",
            rgb.data.len(),
            rgb.modality.as_ref(),
            thermal.data.len(),
            thermal.modality.as_ref()
        );
        Ok((RiskTier::Moderate, sample_conditions()))
    }
}

impl ImageAnalyzer for MockAnalyzer {
    fn analyze(
        &self,
        rgb: &UploadedImage,
        thermal: &UploadedImage,
    ) -> Result<AnalysisReport, AnalyzeError> {
        if self.config.log_digests {
            for image in [rgb, thermal] {
                log::info!(
                    "Received {} image {:?} ({} bytes, {}, sha256 {})",
                    image.modality.as_ref(),
                    image.file_name.as_deref().unwrap_or("<unnamed>"),
                    image.len(),
                    image.content_type.as_deref().unwrap_or("unknown type"),
                    image.digest()
                );
            }
        }

        let rgb = preprocess_rgb(rgb)?;
        let thermal = preprocess_thermal(thermal)?;
        let (overall_risk, conditions) = self.run_inference(&rgb, &thermal)?;

        let now = self.clock.now();
        let report = AnalysisReport {
            scan_id: ScanId::from_timestamp(&self.config.scan_id_prefix, now),
            timestamp: now,
            overall_risk,
            conditions,
            recommendations: sample_recommendations(),
        };
        log::info!(
            "Scan {} analyzed: overall risk {}",
            report.scan_id,
            report.overall_risk
        );
        Ok(report)
    }
}
