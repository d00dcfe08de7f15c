use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::timer::{Timed, Timer};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    strum_macros::Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// "Moderate Risk" style heading used on every results screen.
    pub fn headline(&self) -> String {
        let name = self.as_ref();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} Risk", first.to_ascii_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskTier::Low => "risk-low",
            RiskTier::Moderate => "risk-moderate",
            RiskTier::High => "risk-high",
        }
    }
}

pub const SCAN_ID_PREFIX: &str = "SCAN-";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[serde(transparent)]
pub struct ScanId(String);

impl ScanId {
    pub fn from_timestamp(prefix: &str, at: DateTime<Utc>) -> Self {
        ScanId(format!("{}{}", prefix, at.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub risk: RiskTier,
    pub score: u8,
    pub details: String,
}

impl Condition {
    fn new(name: &str, risk: RiskTier, score: u8, details: &str) -> Self {
        Self {
            name: name.to_string(),
            risk,
            score: score.min(100),
            details: details.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub scan_id: ScanId,
    pub timestamp: DateTime<Utc>,
    pub overall_risk: RiskTier,
    pub conditions: Vec<Condition>,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// The fixed sample report, stamped with the given id and time.
    pub fn sample(scan_id: ScanId, timestamp: DateTime<Utc>) -> Self {
        Self {
            scan_id,
            timestamp,
            overall_risk: RiskTier::Moderate,
            conditions: sample_conditions(),
            recommendations: sample_recommendations(),
        }
    }

    /// The sample report stamped with the current time and the default prefix.
    pub fn sample_now() -> Self {
        let now = Utc::now();
        Self::sample(ScanId::from_timestamp(SCAN_ID_PREFIX, now), now)
    }

    pub fn highest_condition_risk(&self) -> Option<RiskTier> {
        self.conditions.iter().map(|c| c.risk).max()
    }
}

pub fn sample_conditions() -> Vec<Condition> {
    vec![
        Condition::new(
            "Loss of Protective Sensation (LOPS)",
            RiskTier::Moderate,
            65,
            "Moderate risk detected based on thermal patterns.",
        ),
        Condition::new(
            "Peripheral Artery Disease (PAD)",
            RiskTier::Low,
            25,
            "Low risk detected. Blood flow appears adequate.",
        ),
        Condition::new(
            "Foot Deformities",
            RiskTier::High,
            85,
            "High risk detected. Possible early signs of deformity.",
        ),
        Condition::new(
            "Pre-ulcerative Lesions",
            RiskTier::Low,
            15,
            "No significant pre-ulcerative lesions detected.",
        ),
    ]
}

pub fn sample_recommendations() -> Vec<String> {
    [
        "Schedule an appointment with a podiatrist within the next 2 weeks",
        "Continue daily foot inspections using a mirror",
        "Ensure proper footwear with adequate support",
        "Monitor for any changes in foot temperature or appearance",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Fixed structural measurements shown on the 3D model tab.
pub const SCAN_MEASUREMENTS: [(&str, &str); 4] = [
    ("Arch Type", "High Arch"),
    ("Pronation", "Moderate"),
    ("Foot Width", "Wide"),
    ("Pressure Points", "Forefoot"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr)]
pub enum ResultsTab {
    #[default]
    #[strum(to_string = "Overview")]
    Overview,
    #[strum(to_string = "Detailed Results")]
    Details,
    #[strum(to_string = "Images")]
    Images,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr)]
pub enum AnalysisTab {
    #[default]
    #[strum(to_string = "Overview")]
    Overview,
    #[strum(to_string = "3D Model")]
    Model,
    #[strum(to_string = "Details")]
    Details,
}

pub const ANALYSIS_LOADING_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisViewEvent {
    Loaded,
    SelectTab(AnalysisTab),
}

/// State of the scan-flow analysis screen: a short loading delay, then tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisView {
    pub loading: bool,
    pub tab: AnalysisTab,
}

impl Default for AnalysisView {
    fn default() -> Self {
        Self {
            loading: true,
            tab: AnalysisTab::Overview,
        }
    }
}

impl Timed for AnalysisView {
    type Event = AnalysisViewEvent;

    fn pending_timer(&self) -> Option<Timer<AnalysisViewEvent>> {
        self.loading
            .then(|| Timer::new(ANALYSIS_LOADING_MS, AnalysisViewEvent::Loaded))
    }

    fn apply(&self, event: AnalysisViewEvent) -> Self {
        match event {
            AnalysisViewEvent::Loaded => Self {
                loading: false,
                ..*self
            },
            AnalysisViewEvent::SelectTab(tab) if !self.loading => Self { tab, ..*self },
            AnalysisViewEvent::SelectTab(_) => *self,
        }
    }
}
