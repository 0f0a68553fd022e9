//! Boot screen sequence shown before the IDE.

use std::time::{Duration, Instant};

use bitworks_config::constants::{BOOT_HOLD_MS, BOOT_LINES};

/// Reveals the boot lines one at a time, then holds briefly.
#[derive(Debug, Clone)]
pub struct BootScreen {
    lines: &'static [&'static str],
    interval: Duration,
    hold: Duration,
    started: Instant,
    revealed: usize,
    /// When the last line appeared
    completed_at: Option<Instant>,
    done: bool,
}

impl BootScreen {
    /// Standard BIOS lines revealed every `interval`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self::with_lines(BOOT_LINES, interval, Duration::from_millis(BOOT_HOLD_MS), now)
    }

    pub fn with_lines(
        lines: &'static [&'static str],
        interval: Duration,
        hold: Duration,
        now: Instant,
    ) -> Self {
        Self {
            lines,
            interval,
            hold,
            started: now,
            revealed: 0,
            completed_at: None,
            done: false,
        }
    }

    /// Lines revealed so far
    pub fn visible_lines(&self) -> &[&'static str] {
        &self.lines[..self.revealed]
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Jump straight to the IDE.
    pub fn skip(&mut self) {
        self.revealed = self.lines.len();
        self.done = true;
    }

    /// Advance to `now`: reveal due lines, finish after the hold.
    pub fn tick(&mut self, now: Instant) {
        if self.done {
            return;
        }

        let elapsed = now.saturating_duration_since(self.started);
        let due = if self.interval.is_zero() {
            self.lines.len()
        } else {
            (elapsed.as_millis() / self.interval.as_millis()) as usize
        };
        let revealed = due.min(self.lines.len());
        if revealed > self.revealed {
            self.revealed = revealed;
        }

        if self.revealed == self.lines.len() {
            let completed_at = *self.completed_at.get_or_insert(now);
            if now.saturating_duration_since(completed_at) >= self.hold {
                self.done = true;
            }
        }
    }
}
