//! Scan flow: `prepare -> scanning -> processing -> complete`, with `rescan`
//! returning to `prepare`.
//!
//! Progress is simulated. While scanning, a tick every [`TICK_MS`] adds
//! [`PROGRESS_STEP`]; each multiple of 20 counts as one capture. At 100 the
//! machine waits [`SETTLE_MS`], moves to processing, then waits
//! [`PROCESSING_MS`] before completing. There is no error stage: camera
//! failures are reported by the caller and leave the machine untouched.

use strum_macros::{AsRefStr, EnumIter};

use crate::timer::{Timed, Timer};

pub const TICK_MS: u64 = 200;
pub const PROGRESS_STEP: u8 = 2;
pub const SETTLE_MS: u64 = 500;
pub const PROCESSING_MS: u64 = 2000;
pub const CAPTURE_TARGET: u8 = 5;
const CAPTURE_EVERY: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ScanStage {
    #[default]
    Prepare,
    Scanning,
    Processing,
    Complete,
}

impl ScanStage {
    pub fn title(&self) -> &'static str {
        match self {
            ScanStage::Prepare => "Ready to Scan",
            ScanStage::Scanning => "Scanning in Progress",
            ScanStage::Processing => "Processing Scan",
            ScanStage::Complete => "Scan Complete",
        }
    }

    /// The camera preview is only live while scanning.
    pub fn wants_camera(&self) -> bool {
        matches!(self, ScanStage::Scanning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    Start,
    Tick,
    Settled,
    Processed,
    Rescan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSession {
    pub stage: ScanStage,
    pub progress: u8,
    pub capture_count: u8,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_label(&self) -> &'static str {
        match self.progress {
            0..=29 => "Capturing front view...",
            30..=59 => "Capturing side views...",
            60..=89 => "Capturing thermal data...",
            _ => "Finalizing scan...",
        }
    }

    pub fn captures_label(&self) -> String {
        format!("Captures: {}/{}", self.capture_count, CAPTURE_TARGET)
    }

    fn tick(&self) -> Self {
        let progress = self.progress.saturating_add(PROGRESS_STEP).min(100);
        // The tick that completes the scan takes no capture.
        let capture_count = if progress < 100 && progress % CAPTURE_EVERY == 0 {
            (self.capture_count + 1).min(CAPTURE_TARGET)
        } else {
            self.capture_count
        };
        Self {
            progress,
            capture_count,
            ..*self
        }
    }
}

impl Timed for ScanSession {
    type Event = ScanEvent;

    fn pending_timer(&self) -> Option<Timer<ScanEvent>> {
        match self.stage {
            ScanStage::Scanning if self.progress < 100 => Some(Timer::new(TICK_MS, ScanEvent::Tick)),
            ScanStage::Scanning => Some(Timer::new(SETTLE_MS, ScanEvent::Settled)),
            ScanStage::Processing => Some(Timer::new(PROCESSING_MS, ScanEvent::Processed)),
            ScanStage::Prepare | ScanStage::Complete => None,
        }
    }

    fn apply(&self, event: ScanEvent) -> Self {
        match (self.stage, event) {
            (ScanStage::Prepare, ScanEvent::Start) => Self {
                stage: ScanStage::Scanning,
                progress: 0,
                capture_count: 0,
            },
            (ScanStage::Scanning, ScanEvent::Tick) if self.progress < 100 => self.tick(),
            (ScanStage::Scanning, ScanEvent::Settled) if self.progress >= 100 => Self {
                stage: ScanStage::Processing,
                ..*self
            },
            (ScanStage::Processing, ScanEvent::Processed) => Self {
                stage: ScanStage::Complete,
                ..*self
            },
            (ScanStage::Complete, ScanEvent::Rescan) => Self::default(),
            _ => *self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualClock;
    use std::time::Duration;

    #[test]
    fn test_start_enters_scanning() {
        let session = ScanSession::new().apply(ScanEvent::Start);
        assert_eq!(session.stage, ScanStage::Scanning);
        assert_eq!(session.progress, 0);
        assert_eq!(session.capture_count, 0);
        assert!(session.stage.wants_camera());
    }

    #[test]
    fn test_prepare_waits_for_user() {
        let mut clock = VirtualClock::new(ScanSession::new());
        clock.advance(Duration::from_secs(60));
        assert_eq!(clock.state().stage, ScanStage::Prepare);
        assert_eq!(clock.fired(), 0);
    }

    #[test]
    fn test_full_scan_reaches_complete_via_processing() {
        let mut clock = VirtualClock::new(ScanSession::new());
        clock.send(ScanEvent::Start);

        let mut last = 0;
        let mut saw_processing = false;
        for _ in 0..100 {
            clock.advance(Duration::from_millis(TICK_MS));
            let state = clock.state();
            assert!(state.progress >= last, "progress went backwards");
            assert!(state.progress <= 100);
            last = state.progress;
            saw_processing |= state.stage == ScanStage::Processing;
        }
        assert_eq!(clock.state().progress, 100);
        assert_eq!(clock.state().capture_count, 4);
        assert_eq!(clock.state().captures_label(), "Captures: 4/5");

        assert!(saw_processing);
        assert_eq!(clock.state().stage, ScanStage::Complete);
    }

    #[test]
    fn test_stage_timing() {
        let mut clock = VirtualClock::new(ScanSession::new());
        clock.send(ScanEvent::Start);

        // 50 ticks of 200ms reach 100%.
        clock.advance(Duration::from_millis(50 * TICK_MS));
        assert_eq!(clock.state().progress, 100);
        assert_eq!(clock.state().stage, ScanStage::Scanning);

        clock.advance(Duration::from_millis(SETTLE_MS - 1));
        assert_eq!(clock.state().stage, ScanStage::Scanning);
        clock.advance(Duration::from_millis(1));
        assert_eq!(clock.state().stage, ScanStage::Processing);

        clock.advance(Duration::from_millis(PROCESSING_MS));
        assert_eq!(clock.state().stage, ScanStage::Complete);
    }

    #[test]
    fn test_capture_count_steps_every_twenty_percent() {
        let mut session = ScanSession::new().apply(ScanEvent::Start);
        for _ in 0..9 {
            session = session.apply(ScanEvent::Tick);
        }
        assert_eq!(session.progress, 18);
        assert_eq!(session.capture_count, 0);
        session = session.apply(ScanEvent::Tick);
        assert_eq!(session.capture_count, 1);
        assert_eq!(session.captures_label(), "Captures: 1/5");
    }

    #[test]
    fn test_final_tick_takes_no_capture() {
        let mut session = ScanSession::new().apply(ScanEvent::Start);
        for _ in 0..49 {
            session = session.apply(ScanEvent::Tick);
        }
        assert_eq!(session.progress, 98);
        assert_eq!(session.capture_count, 4);
        session = session.apply(ScanEvent::Tick);
        assert_eq!(session.progress, 100);
        assert_eq!(session.capture_count, 4);
    }

    #[test]
    fn test_rescan_resets_everything() {
        let mut clock = VirtualClock::new(ScanSession::new());
        clock.send(ScanEvent::Start);
        clock.run_until_idle(Duration::from_secs(30));
        assert_eq!(clock.state().stage, ScanStage::Complete);

        clock.send(ScanEvent::Rescan);
        assert_eq!(clock.state(), &ScanSession::default());
        assert_eq!(clock.state().stage, ScanStage::Prepare);
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        let session = ScanSession::new();
        assert_eq!(session.apply(ScanEvent::Rescan), session);
        assert_eq!(session.apply(ScanEvent::Tick), session);

        let scanning = session.apply(ScanEvent::Start).apply(ScanEvent::Tick);
        assert_eq!(scanning.apply(ScanEvent::Start), scanning);
        assert_eq!(scanning.apply(ScanEvent::Settled), scanning);
        assert_eq!(scanning.apply(ScanEvent::Processed), scanning);
    }

    #[test]
    fn test_progress_labels() {
        let at = |progress| ScanSession {
            stage: ScanStage::Scanning,
            progress,
            capture_count: 0,
        };
        assert_eq!(at(0).progress_label(), "Capturing front view...");
        assert_eq!(at(30).progress_label(), "Capturing side views...");
        assert_eq!(at(60).progress_label(), "Capturing thermal data...");
        assert_eq!(at(90).progress_label(), "Finalizing scan...");
    }
}
