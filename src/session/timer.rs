//! Session countdown timer
//!
//! Pure countdown state driven by an external one-second tick. Ticks only
//! decrement the remaining-time counter; they never touch the progress
//! model.

/// Countdown over the focus session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimer {
    seconds_remaining: u32,
    running: bool,
}

impl SessionTimer {
    pub fn new(session_minutes: u32) -> Self {
        Self {
            seconds_remaining: session_minutes.saturating_mul(60),
            running: false,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start counting down. Starting an expired timer does nothing.
    pub fn start(&mut self) {
        if self.seconds_remaining > 0 {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and restore the full session length
    pub fn reset(&mut self, session_minutes: u32) {
        self.seconds_remaining = session_minutes.saturating_mul(60);
        self.running = false;
    }

    /// One-second tick. Saturates at zero and stops the countdown there.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.running = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_paused_with_full_time() {
        let timer = SessionTimer::new(25);
        assert_eq!(timer.seconds_remaining(), 1500);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_only_counts_while_running() {
        let mut timer = SessionTimer::new(5);
        timer.tick();
        assert_eq!(timer.seconds_remaining(), 300);

        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.seconds_remaining(), 298);

        timer.pause();
        timer.tick();
        assert_eq!(timer.seconds_remaining(), 298);
    }

    #[test]
    fn test_oversized_minutes_saturate() {
        let timer = SessionTimer::new(u32::MAX);
        assert_eq!(timer.seconds_remaining(), u32::MAX);

        let mut timer = SessionTimer::new(5);
        timer.reset(u32::MAX);
        assert_eq!(timer.seconds_remaining(), u32::MAX);
    }

    #[test]
    fn test_expiry_stops_countdown() {
        let mut timer = SessionTimer::new(5);
        timer.reset(5);
        timer.start();
        for _ in 0..400 {
            timer.tick();
        }
        assert_eq!(timer.seconds_remaining(), 0);
        assert!(!timer.is_running());

        // Restarting an expired timer is a no-op until reset
        timer.start();
        assert!(!timer.is_running());
        timer.reset(5);
        timer.start();
        assert!(timer.is_running());
    }
}
