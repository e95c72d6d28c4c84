//! Locomotion domain: countdown timers gating state transitions.

/// A countdown that clamps at zero and reports its expiry exactly once.
///
/// Arming with a zero duration is allowed: the next [`Countdown::tick`] fires.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Countdown {
    remaining: f32,
    armed: bool,
}

impl Countdown {
    pub fn arm(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
        self.armed = true;
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.remaining = 0.0;
        self.armed = false;
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Armed with time left on the clock.
    pub fn is_running(&self) -> bool {
        self.armed && self.remaining > 0.0
    }

    /// Advance by `dt` seconds. Returns `true` on the tick the countdown
    /// reaches zero, and never again until re-armed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }

        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        if self.remaining <= 0.0 {
            self.armed = false;
            return true;
        }
        false
    }
}

/// The three explicit locomotion timers. The ledge-climb lock lives in the
/// ledge sub-state instead of a clock.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimerBank {
    pub jump_buffer: Countdown,
    pub turn_lock: Countdown,
    pub wall_jump_lockout: Countdown,
}
