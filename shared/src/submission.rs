//! Latest-wins bookkeeping for `/api/analyze` requests.

use crate::analysis::AnalysisReport;

/// Holds the report for the most recent submission. Each new submission
/// gets a fresh generation; replies carrying an older one are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSlot {
    generation: u64,
    report: Option<AnalysisReport>,
}

impl ReportSlot {
    /// Starts a new submission and clears any report from an earlier one.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.report = None;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Stores `report` if it answers the latest submission.
    pub fn accept(&mut self, generation: u64, report: AnalysisReport) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.report = Some(report);
        true
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ScanId;
    use chrono::Utc;

    fn report(id: &str) -> AnalysisReport {
        AnalysisReport::sample(ScanId::from(id.to_string()), Utc::now())
    }

    #[test]
    fn test_accepts_reply_to_latest_submission() {
        let mut slot = ReportSlot::default();
        let generation = slot.begin();
        assert!(slot.report().is_none());
        assert!(slot.accept(generation, report("SCAN-1")));
        assert_eq!(slot.report().map(|r| r.scan_id.as_str()), Some("SCAN-1"));
    }

    #[test]
    fn test_stale_reply_does_not_overwrite_newer_report() {
        let mut slot = ReportSlot::default();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.accept(second, report("SCAN-2")));
        assert!(!slot.accept(first, report("SCAN-1")));
        assert_eq!(slot.report().map(|r| r.scan_id.as_str()), Some("SCAN-2"));
    }

    #[test]
    fn test_stale_reply_before_current_one_is_dropped() {
        let mut slot = ReportSlot::default();
        let first = slot.begin();
        let _second = slot.begin();

        assert!(!slot.accept(first, report("SCAN-1")));
        assert!(slot.report().is_none());
    }

    #[test]
    fn test_begin_clears_previous_report() {
        let mut slot = ReportSlot::default();
        let first = slot.begin();
        slot.accept(first, report("SCAN-1"));
        slot.begin();
        assert!(slot.report().is_none());
        assert!(!slot.is_current(first));
    }
}
