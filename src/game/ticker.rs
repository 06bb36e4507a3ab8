/// Ticks owed after one long frame are capped at this many.
pub const MAX_CATCH_UP: u32 = 5;

/// Fixed-interval tick source fed with frame deltas.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f32,
    elapsed: f32,
}

impl Ticker {
    /// `interval` is in seconds.
    pub fn new(interval: f32) -> Self {
        Self { interval: interval.max(f32::EPSILON), elapsed: 0.0 }
    }

    /// Add `dt` seconds and return how many whole ticks are due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.elapsed += dt.max(0.0);
        let due = (self.elapsed / self.interval).floor() as u32;
        self.elapsed -= due as f32 * self.interval;
        if due > MAX_CATCH_UP {
            self.elapsed = 0.0;
            return MAX_CATCH_UP;
        }
        due
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }
}
