//! Held-key tracking and synthetic repeat events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use crate::same_key;

/// A repeat synthesized for a held key.
///
/// Carries the original press unchanged, so handlers treat it exactly
/// like that press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatEvent {
    /// Key being held
    pub source_key: KeyCode,
    /// Press that started the hold
    pub payload: KeyEvent,
}

/// Whether holding this key should auto-repeat.
///
/// Navigation and deletion keys repeat, as do printable characters typed
/// without Ctrl or Alt.
pub fn is_repeatable(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Backspace
        | KeyCode::Delete => true,
        KeyCode::Char(c) => {
            !c.is_control()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        }
        _ => false,
    }
}

#[derive(Debug, Clone)]
struct HeldKey {
    payload: KeyEvent,
    start_time: Instant,
    is_repeating: bool,
    last_repeat_time: Instant,
}

/// Auto-repeat state machine.
///
/// Must be advanced once per frame with [`KeyRepeater::tick`], after that
/// frame's real input has been handled. At most one repeat is produced per
/// tick: held keys are scanned in press order and the first eligible one
/// fires.
#[derive(Debug, Clone)]
pub struct KeyRepeater {
    initial_delay: Duration,
    repeat_interval: Duration,
    /// False when the terminal cannot report key releases
    enabled: bool,
    /// True while an overlay such as a menu is open
    suspended: bool,
    /// Held keys in press order
    held: Vec<HeldKey>,
}

impl KeyRepeater {
    pub fn new(initial_delay: Duration, repeat_interval: Duration) -> Self {
        Self {
            initial_delay,
            repeat_interval,
            enabled: true,
            suspended: false,
            held: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable synthetic repeats; disabling forgets held keys.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.held.clear();
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Stop repeating until [`resume`](Self::resume); held keys are forgotten.
    pub fn suspend(&mut self) {
        self.suspended = true;
        self.held.clear();
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Number of keys currently tracked as held
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Record a real key press.
    ///
    /// Only a repeatable key that is not already held starts a new hold.
    pub fn press(&mut self, key: KeyEvent, now: Instant) {
        if !self.enabled || self.suspended || !is_repeatable(&key) {
            return;
        }
        if self.held.iter().any(|h| same_key(h.payload.code, key.code)) {
            return;
        }
        self.held.push(HeldKey {
            payload: key,
            start_time: now,
            is_repeating: false,
            last_repeat_time: now,
        });
    }

    /// Record a key release, ending its hold.
    pub fn release(&mut self, code: KeyCode) {
        self.held.retain(|h| !same_key(h.payload.code, code));
    }

    /// Forget all held keys (e.g. when focus leaves the editor).
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Advance the timer to `now`, returning the repeat due this tick.
    pub fn tick(&mut self, now: Instant) -> Option<RepeatEvent> {
        if !self.enabled || self.suspended {
            return None;
        }

        for held in self.held.iter_mut() {
            let due = if held.is_repeating {
                now.saturating_duration_since(held.last_repeat_time) >= self.repeat_interval
            } else {
                now.saturating_duration_since(held.start_time) >= self.initial_delay
            };

            if due {
                held.is_repeating = true;
                held.last_repeat_time = now;
                return Some(RepeatEvent {
                    source_key: held.payload.code,
                    payload: held.payload,
                });
            }
        }
        None
    }
}
