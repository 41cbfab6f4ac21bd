//! Frame timing

/// Converts absolute frame timestamps (milliseconds) into elapsed seconds.
///
/// The first timestamp only establishes the origin and yields zero.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Seconds since the previous frame. Timestamps going backwards yield zero.
    pub fn elapsed(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.elapsed(12_345.0), 0.0);
        assert!((timer.elapsed(12_345.0 + 250.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut timer = FrameTimer::new();
        timer.elapsed(1000.0);
        assert_eq!(timer.elapsed(900.0), 0.0);
        assert!((timer.elapsed(1000.0) - 0.1).abs() < 1e-6);
    }
}
