pub mod analysis;
pub mod analyzing;
pub mod capture;
pub mod catalog;
pub mod consent;
pub mod followup;
pub mod routes;
pub mod scan;
pub mod submission;
pub mod timer;

pub use analysis::{AnalysisReport, Condition, RiskTier, ScanId};
pub use catalog::{CatalogItem, Category, CategoryFilter, ShoeDetail};
pub use routes::Screen;
pub use submission::ReportSlot;
pub use timer::{Timed, Timer, VirtualClock};

/// Body of every non-2xx JSON response from the backend.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
