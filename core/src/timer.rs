use std::time::Duration;

/// # Timers
/// The delay and sound timers.
///
/// Both count down towards zero once per tick and then stay there until an instruction
/// loads them again. The sound timer is considered audible while it is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timers {
    delay: u8,
    sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers { delay: 0, sound: 0 }
    }

    /// Decrements both timers, flooring at zero
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay = value;
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound = value;
    }

    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn sound(&self) -> u8 {
        self.sound
    }

    /// Returns the current (delay, sound) values
    pub fn current(&self) -> (u8, u8) {
        (self.delay, self.sound)
    }
}

/// # Clock
/// Turns elapsed wall-clock time into a whole number of ticks at a fixed rate.
///
/// Time that doesn't add up to a full tick is carried over to the next call,
/// so a clock fed many short frames ticks as often as one fed a single long one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    period: Duration,
    pending: Duration,
}

impl Clock {
    /// # Arguments
    /// * `hz` ticks per second; a rate of zero is treated as one.
    ///   The period never drops below a nanosecond, so rates above 1GHz run at 1GHz.
    pub fn new(hz: u32) -> Self {
        Clock {
            period: (Duration::from_secs(1) / hz.max(1)).max(Duration::from_nanos(1)),
            pending: Duration::from_secs(0),
        }
    }

    /// Accrues `elapsed` and returns how many ticks are now due, saturating at `u32::MAX`
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.pending += elapsed;
        let due = self.pending.as_nanos() / self.period.as_nanos();
        let ticks = due.min(u128::from(u32::MAX)) as u32;
        self.pending -= self.period * ticks;
        ticks
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Drops any partially accrued tick
    pub fn reset(&mut self) {
        self.pending = Duration::from_secs(0);
    }
}

#[cfg(test)]
mod test_timer {
    use super::*;

    #[test]
    fn test_tick_decrements_both() {
        let mut timers = Timers::new();
        timers.set_delay(0x3);
        timers.set_sound(0x1);
        timers.tick();
        assert_eq!(timers.current(), (0x2, 0x0));
    }

    #[test]
    fn test_tick_floors_at_zero() {
        let mut timers = Timers::new();
        for _ in 0..1000 {
            timers.tick();
            assert_eq!(timers.delay(), 0x0);
            assert_eq!(timers.sound(), 0x0);
        }
    }

    #[test]
    fn test_timers_are_independent() {
        let mut timers = Timers::new();
        timers.set_delay(0x2);
        timers.tick();
        timers.tick();
        timers.tick();
        timers.set_sound(0x5);
        assert_eq!(timers.current(), (0x0, 0x5));
    }

    #[test]
    fn test_clock_counts_whole_ticks() {
        let mut clock = Clock::new(60);
        assert_eq!(clock.advance(Duration::from_secs(1)), 60);
    }

    #[test]
    fn test_clock_carries_remainder() {
        let mut clock = Clock::new(100);
        assert_eq!(clock.advance(Duration::from_millis(15)), 1);
        assert_eq!(clock.advance(Duration::from_millis(5)), 1);
        assert_eq!(clock.advance(Duration::from_millis(9)), 0);
    }

    #[test]
    fn test_clock_reset_drops_partial_tick() {
        let mut clock = Clock::new(100);
        clock.advance(Duration::from_millis(9));
        clock.reset();
        assert_eq!(clock.advance(Duration::from_millis(9)), 0);
    }

    #[test]
    fn test_clock_above_one_ghz() {
        let mut clock = Clock::new(u32::MAX);
        assert_eq!(clock.period(), Duration::from_nanos(1));
        assert_eq!(clock.advance(Duration::from_millis(16)), 16_000_000);
        assert_eq!(clock.advance(Duration::from_millis(0)), 0);
    }

    #[test]
    fn test_clock_saturates_ticks() {
        let mut clock = Clock::new(1_000_000_000);
        assert_eq!(clock.advance(Duration::from_secs(10)), u32::MAX);
    }

    #[test]
    fn test_zero_rate_clock() {
        let clock = Clock::new(0);
        assert_eq!(clock.period(), Duration::from_secs(1));
    }
}
