//! Message box lifecycle
//!
//! Timers are plain deadlines. Nothing here reads the clock: every entry
//! point takes `now`, and `tick` fires due timers at their own deadline so
//! the outcome does not depend on how often the caller ticks.

use std::time::{Duration, Instant};

use super::notification_view::Affordance;

/// Length of the slide-in after the box becomes active
pub const ENTER_TRANSITION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, possibly mounted, not yet visible
    Created,
    Active,
    Exiting,
    /// Terminal. The box is detached and never drawn again.
    Removed,
}

/// Lifecycle delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// From mount until the box becomes active
    pub entrance: Duration,
    /// From mount until the auto-dismiss fires
    pub display: Duration,
    /// From dismissal until removal
    pub exit: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            entrance: Duration::from_millis(10),
            display: Duration::from_millis(5000),
            exit: Duration::from_millis(500),
        }
    }
}

/// Anything that asks the box to close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    AffordanceClick(Affordance),
    /// Enter pressed while a dismiss dot has focus
    AffordanceKey(Affordance),
    ActionButton,
    Timeout,
}

/// Declaration order breaks ties between timers due at the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TimerKind {
    Entrance,
    AutoDismiss,
    Removal,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    kind: TimerKind,
    due: Instant,
}

/// What the renderer should draw at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualState {
    /// Pre-transition style: present but not drawn
    Hidden,
    /// Sliding in, eased progress in `0.0..=1.0`
    Entering(f32),
    Shown,
    /// Sliding out, eased progress in `0.0..=1.0`
    Exiting(f32),
    Removed,
}

#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    timings: Timings,
    pending: Vec<Timer>,
    mounted_at: Option<Instant>,
    activated_at: Option<Instant>,
    exit_started_at: Option<Instant>,
}

impl Lifecycle {
    pub fn new(timings: Timings) -> Self {
        Self {
            phase: Phase::Created,
            timings,
            pending: Vec::new(),
            mounted_at: None,
            activated_at: None,
            exit_started_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted_at.is_some()
    }

    /// Schedule the entrance and auto-dismiss timers.
    ///
    /// Returns false if already mounted.
    pub fn mount(&mut self, now: Instant) -> bool {
        if self.mounted_at.is_some() || self.phase != Phase::Created {
            return false;
        }
        self.mounted_at = Some(now);
        self.schedule(TimerKind::Entrance, now + self.timings.entrance);
        self.schedule(TimerKind::AutoDismiss, now + self.timings.display);
        true
    }

    /// Start the exit. Only the first trigger after mount has any effect.
    ///
    /// A box dismissed before its entrance timer fired goes straight to
    /// `Exiting`; the entrance timer then fires as a no-op.
    pub fn dismiss(&mut self, trigger: DismissTrigger, now: Instant) -> bool {
        let accepts = match self.phase {
            Phase::Active => true,
            Phase::Created => self.is_mounted() && trigger != DismissTrigger::Timeout,
            Phase::Exiting | Phase::Removed => false,
        };
        if !accepts {
            return false;
        }

        log::debug!("message box dismissed by {:?}", trigger);
        self.phase = Phase::Exiting;
        self.exit_started_at = Some(now);
        self.schedule(TimerKind::Removal, now + self.timings.exit);
        true
    }

    /// Fire every timer due at or before `now`, earliest first.
    ///
    /// Returns true if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(index) = self.next_due(now) {
            let timer = self.pending.swap_remove(index);
            changed |= self.fire(timer);
        }
        changed
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.due).min()
    }

    pub fn visual_state(&self, now: Instant) -> VisualState {
        match self.phase {
            Phase::Created => VisualState::Hidden,
            Phase::Active => {
                let Some(activated_at) = self.activated_at else {
                    return VisualState::Shown;
                };
                let elapsed = now.saturating_duration_since(activated_at);
                if elapsed >= ENTER_TRANSITION {
                    VisualState::Shown
                } else {
                    VisualState::Entering(ease_out(fraction(elapsed, ENTER_TRANSITION)))
                }
            }
            Phase::Exiting => {
                // Never became visible, nothing to slide out
                let (Some(_), Some(started)) = (self.activated_at, self.exit_started_at) else {
                    return VisualState::Hidden;
                };
                let elapsed = now.saturating_duration_since(started);
                VisualState::Exiting(ease_out(fraction(elapsed, self.timings.exit)))
            }
            Phase::Removed => VisualState::Removed,
        }
    }

    /// Instant the box became active, used to phase its animations
    pub fn activated_at(&self) -> Option<Instant> {
        self.activated_at
    }

    fn schedule(&mut self, kind: TimerKind, due: Instant) {
        self.pending.push(Timer { kind, due });
    }

    fn next_due(&self, now: Instant) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.kind))
            .map(|(i, _)| i)
    }

    fn fire(&mut self, timer: Timer) -> bool {
        match timer.kind {
            TimerKind::Entrance => {
                if self.phase != Phase::Created {
                    return false;
                }
                log::debug!("message box active");
                self.phase = Phase::Active;
                self.activated_at = Some(timer.due);
                true
            }
            TimerKind::AutoDismiss => match (self.phase, self.mounted_at) {
                // Display shorter than the entrance delay: retry once the box is active
                (Phase::Created, Some(mounted_at)) => {
                    let entered = mounted_at + self.timings.entrance;
                    self.schedule(TimerKind::AutoDismiss, entered.max(timer.due));
                    false
                }
                (Phase::Active, _) => self.dismiss(DismissTrigger::Timeout, timer.due),
                // Fires harmlessly if the box was already dismissed
                _ => false,
            },
            TimerKind::Removal => {
                if self.phase != Phase::Exiting {
                    return false;
                }
                log::debug!("message box removed");
                self.phase = Phase::Removed;
                self.pending.clear();
                true
            }
        }
    }
}

fn fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
#[path = "notification_lifecycle_tests.rs"]
mod notification_lifecycle_tests;
