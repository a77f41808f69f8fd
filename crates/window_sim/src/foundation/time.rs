//! Time management utilities

/// Fixed-rate tick gate driven by host frame times
///
/// Windows that configure a tick rate only run their content hook when
/// enough host time has accumulated, independently of the host frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickThrottle {
    threshold: f32,
    accumulated: f32,
}

impl TickThrottle {
    /// Create a throttle ticking at `rate` ticks per second
    ///
    /// Returns `None` for non-positive or non-finite rates. The accumulator
    /// starts full so the first call to [`TickThrottle::advance`] fires.
    pub fn new(rate: f32) -> Option<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return None;
        }
        let threshold = 1.0 / rate;
        Some(Self {
            threshold,
            accumulated: threshold,
        })
    }

    /// Seconds between ticks
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Ticks per second
    pub fn rate(&self) -> f32 {
        1.0 / self.threshold
    }

    /// Time accumulated since the last tick
    pub const fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Accumulate `elapsed` seconds
    ///
    /// Returns the accumulated time when a tick fires (and resets the
    /// accumulator), `None` otherwise.
    pub fn advance(&mut self, elapsed: f32) -> Option<f32> {
        self.accumulated += elapsed.max(0.0);
        if self.accumulated >= self.threshold {
            let tick = self.accumulated;
            self.accumulated = 0.0;
            Some(tick)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_invalid_rates() {
        assert!(TickThrottle::new(0.0).is_none());
        assert!(TickThrottle::new(-5.0).is_none());
        assert!(TickThrottle::new(f32::NAN).is_none());
    }

    #[test]
    fn test_first_advance_fires() {
        let mut throttle = TickThrottle::new(10.0).unwrap();
        assert_relative_eq!(throttle.threshold(), 0.1);
        assert!(throttle.advance(0.016).is_some());
        assert_relative_eq!(throttle.accumulated(), 0.0);
    }

    #[test]
    fn test_accumulates_until_threshold() {
        let mut throttle = TickThrottle::new(10.0).unwrap();
        throttle.advance(0.0);

        assert!(throttle.advance(0.04).is_none());
        assert!(throttle.advance(0.04).is_none());
        let tick = throttle.advance(0.04).expect("third frame crosses 0.1s");
        assert_relative_eq!(tick, 0.12, epsilon = 1e-6);
        assert_relative_eq!(throttle.accumulated(), 0.0);
    }

    #[test]
    fn test_rate_round_trip() {
        let throttle = TickThrottle::new(50.0).unwrap();
        assert_relative_eq!(throttle.rate(), 50.0, epsilon = 1e-3);
    }
}
