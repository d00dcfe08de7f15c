//! Follow-up plan derived from a report's risk tiers.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisReport, RiskTier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpAction {
    pub title: String,
    pub description: String,
    pub urgency: RiskTier,
    pub timeframe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpPlan {
    pub urgency: RiskTier,
    pub follow_up: String,
    pub actions: Vec<FollowUpAction>,
}

pub fn follow_up_window(overall: RiskTier) -> &'static str {
    match overall {
        RiskTier::High => "1 week",
        RiskTier::Moderate => "2 weeks",
        RiskTier::Low => "1 month",
    }
}

pub fn follow_up_plan(report: &AnalysisReport) -> FollowUpPlan {
    let any_high = report.conditions.iter().any(|c| c.risk == RiskTier::High);
    let timeframe = if report.overall_risk == RiskTier::High {
        "Within 1 week"
    } else {
        "Within 2 weeks"
    };

    FollowUpPlan {
        urgency: report.overall_risk,
        follow_up: follow_up_window(report.overall_risk).to_string(),
        actions: vec![FollowUpAction {
            title: "Schedule podiatrist appointment".to_string(),
            description: "Book an appointment with a foot specialist to evaluate the detected issues"
                .to_string(),
            urgency: if any_high {
                RiskTier::High
            } else {
                RiskTier::Moderate
            },
            timeframe: timeframe.to_string(),
        }],
    }
}
