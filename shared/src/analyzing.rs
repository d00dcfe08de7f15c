//! Cosmetic progress shown while images are "analyzed".
//!
//! Always finishes: [`FINISH_DELAY_MS`] after reaching 100 the machine is
//! `finished` and the screen moves on to the results.

use crate::timer::{Timed, Timer};

pub const TICK_MS: u64 = 300;
pub const PROGRESS_STEP: u8 = 5;
pub const FINISH_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzingEvent {
    Tick,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzingProgress {
    pub progress: u8,
    pub ticks: u32,
    pub finished: bool,
}

impl AnalyzingProgress {
    /// Label for the current tick, chosen from the progress value the tick
    /// started from.
    pub fn status_text(&self) -> &'static str {
        if self.ticks == 0 {
            return "Initializing analysis...";
        }
        match self.progress.saturating_sub(PROGRESS_STEP) {
            0..=19 => "Preprocessing images...",
            20..=39 => "Detecting foot boundaries...",
            40..=59 => "Analyzing temperature patterns...",
            60..=79 => "Identifying risk factors...",
            _ => "Generating report...",
        }
    }
}

impl Timed for AnalyzingProgress {
    type Event = AnalyzingEvent;

    fn pending_timer(&self) -> Option<Timer<AnalyzingEvent>> {
        if self.finished {
            None
        } else if self.progress < 100 {
            Some(Timer::new(TICK_MS, AnalyzingEvent::Tick))
        } else {
            Some(Timer::new(FINISH_DELAY_MS, AnalyzingEvent::Finish))
        }
    }

    fn apply(&self, event: AnalyzingEvent) -> Self {
        match event {
            AnalyzingEvent::Tick if self.progress < 100 => Self {
                progress: self.progress.saturating_add(PROGRESS_STEP).min(100),
                ticks: self.ticks + 1,
                ..*self
            },
            AnalyzingEvent::Finish if self.progress >= 100 => Self {
                finished: true,
                ..*self
            },
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
    fn test_runs_to_completion() {
        let mut clock = VirtualClock::new(AnalyzingProgress::default());
        assert_eq!(clock.state().status_text(), "Initializing analysis...");

        clock.advance(Duration::from_millis(20 * TICK_MS));
        assert_eq!(clock.state().progress, 100);
        assert!(!clock.state().finished);
        assert_eq!(clock.state().status_text(), "Generating report...");

        clock.advance(Duration::from_millis(FINISH_DELAY_MS));
        assert!(clock.state().finished);
        assert_eq!(clock.state().pending_timer(), None);
    }

    #[test]
    fn test_status_thresholds() {
        let mut clock = VirtualClock::new(AnalyzingProgress::default());
        let mut seen = Vec::new();
        while !clock.state().finished {
            clock.advance(Duration::from_millis(TICK_MS));
            let text = clock.state().status_text();
            if seen.last() != Some(&text) {
                seen.push(text);
            }
        }
        assert_eq!(
            seen,
            vec![
                "Preprocessing images...",
                "Detecting foot boundaries...",
                "Analyzing temperature patterns...",
                "Identifying risk factors...",
                "Generating report...",
            ]
        );
    }

    #[test]
    fn test_status_lags_one_tick_behind_progress() {
        let at = |ticks: u32| {
            (0..ticks).fold(AnalyzingProgress::default(), |state, _| {
                state.apply(AnalyzingEvent::Tick)
            })
        };
        assert_eq!(at(4).progress, 20);
        assert_eq!(at(4).status_text(), "Preprocessing images...");
        assert_eq!(at(5).progress, 25);
        assert_eq!(at(5).status_text(), "Detecting foot boundaries...");
        assert_eq!(at(16).progress, 80);
        assert_eq!(at(16).status_text(), "Identifying risk factors...");
        assert_eq!(at(17).status_text(), "Generating report...");
    }

    #[test]
    fn test_finish_before_full_progress_is_ignored() {
        let state = AnalyzingProgress::default().apply(AnalyzingEvent::Finish);
        assert!(!state.finished);
    }
}
