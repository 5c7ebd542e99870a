use std::time::Duration;

/// Real time between two decrements of the delay and sound timers (60 Hz).
pub const TIMER_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Delay and sound countdown timers.
///
/// Time advances via [`Timers::advance`] with the wall-clock time that passed
/// since the previous call, so the 60 Hz rate holds whatever the instruction
/// rate is. Once the accumulator reaches one period both timers tick once and
/// the accumulator starts again from zero; any overshoot is discarded.
#[derive(Clone, Debug, Default)]
pub struct Timers {
    pub(crate) delay: u8,
    pub(crate) sound: u8,
    elapsed: Duration,
}

impl Timers {
    pub fn advance(&mut self, elapsed: Duration) {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        if self.elapsed >= TIMER_PERIOD {
            self.tick();
            self.elapsed = Duration::ZERO;
        }
    }

    /// One 60 Hz decrement of both timers, saturating at zero.
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    #[inline]
    pub fn delay(&self) -> u8 {
        self.delay
    }

    #[inline]
    pub fn sound(&self) -> u8 {
        self.sound
    }

    /// The buzzer sounds for as long as the sound timer is non-zero.
    #[inline]
    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timers(delay: u8, sound: u8) -> Timers {
        Timers {
            delay,
            sound,
            ..Timers::default()
        }
    }

    #[test]
    fn tick_decrements_and_stops_at_zero() {
        let mut t = timers(10, 1);
        t.tick();
        assert_eq!((t.delay(), t.sound()), (9, 0));
        t.tick();
        assert_eq!((t.delay(), t.sound()), (8, 0));
    }

    #[test]
    fn small_steps_accumulate_to_one_tick() {
        let mut t = timers(5, 5);
        let step = Duration::from_millis(4);
        for _ in 0..4 {
            t.advance(step);
        }
        assert_eq!(t.delay(), 5);
        t.advance(step);
        assert_eq!(t.delay(), 4);
        assert_eq!(t.sound(), 4);
    }

    #[test]
    fn exact_period_ticks_once() {
        let mut t = timers(3, 0);
        t.advance(Duration::from_secs(1) / 60);
        assert_eq!(t.delay(), 2);
    }

    #[test]
    fn overshoot_is_discarded() {
        let mut t = timers(10, 10);
        t.advance(Duration::from_secs(1));
        assert_eq!(t.delay(), 9);
        // Accumulator restarted from zero, not from the 59 periods left over.
        t.advance(Duration::from_millis(10));
        assert_eq!(t.delay(), 9);
        t.advance(Duration::from_millis(7));
        assert_eq!(t.delay(), 8);
    }

    #[test]
    fn sound_active_follows_sound_timer() {
        let mut t = timers(0, 1);
        assert!(t.sound_active());
        t.tick();
        assert!(!t.sound_active());
    }
}
