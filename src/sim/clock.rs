//! Fixed timestep accumulator
//!
//! Decouples the physics rate from however often the host calls in.

use crate::settings::ConfigError;

/// Accumulates elapsed time and hands it out in whole fixed steps
#[derive(Debug, Clone, PartialEq)]
pub struct SimClock {
    step: f32,
    accumulator: f32,
    /// Maximum steps per call (None drains the accumulator fully)
    max_substeps: Option<u32>,
}

impl SimClock {
    /// Fails unless `step` is finite and positive; `advance` would never
    /// drain the accumulator otherwise.
    pub fn new(step: f32) -> Result<Self, ConfigError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "clock step must be positive, got {step}"
            )));
        }
        Ok(Self {
            step,
            accumulator: 0.0,
            max_substeps: None,
        })
    }

    /// Cap the number of steps run per call. Whole steps beyond the cap are dropped.
    pub fn with_max_substeps(mut self, max_substeps: Option<u32>) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Unconsumed time (always less than one step after `advance`)
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Add `elapsed` seconds and call `on_step` once per whole step available.
    ///
    /// Negative or non-finite input counts as zero. Returns the number of steps run.
    pub fn advance(&mut self, elapsed: f32, mut on_step: impl FnMut()) -> u32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        } else if !elapsed.is_finite() {
            log::warn!("Ignoring non-finite elapsed time: {}", elapsed);
        }

        let mut substeps = 0;
        while self.accumulator >= self.step {
            if self.max_substeps.is_some_and(|max| substeps >= max) {
                let dropped = (self.accumulator / self.step).floor();
                log::warn!("Step cap reached, dropping {} pending steps", dropped);
                self.accumulator -= dropped * self.step;
                break;
            }
            on_step();
            self.accumulator -= self.step;
            substeps += 1;
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_exact_step_runs_once() {
        let mut clock = SimClock::new(DT).unwrap();
        let mut count = 0;
        assert_eq!(clock.advance(DT, || count += 1), 1);
        assert_eq!(count, 1);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_partial_steps_accumulate() {
        let mut clock = SimClock::new(DT).unwrap();
        assert_eq!(clock.advance(DT * 0.5, || {}), 0);
        assert_eq!(clock.advance(DT * 0.5, || {}), 1);
        assert_eq!(clock.advance(0.0, || {}), 0);
    }

    #[test]
    fn test_long_frame_drains_fully() {
        let mut clock = SimClock::new(DT).unwrap();
        let steps = clock.advance(DT * 10.5, || {});
        assert_eq!(steps, 10);
        assert!(clock.accumulator() < DT);
        assert!((clock.accumulator() - DT * 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_bad_input_ignored() {
        let mut clock = SimClock::new(DT).unwrap();
        assert_eq!(clock.advance(-1.0, || {}), 0);
        assert_eq!(clock.advance(f32::NAN, || {}), 0);
        assert_eq!(clock.advance(f32::INFINITY, || {}), 0);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_step_cap_drops_whole_steps() {
        let mut clock = SimClock::new(DT).unwrap().with_max_substeps(Some(4));
        let steps = clock.advance(DT * 10.5, || {});
        assert_eq!(steps, 4);
        // Fractional remainder kept, whole steps dropped
        assert!(clock.accumulator() < DT);
    }

    #[test]
    fn test_non_positive_step_rejected() {
        for step in [0.0, -DT, f32::NAN, f32::INFINITY] {
            assert!(matches!(SimClock::new(step), Err(ConfigError::Invalid(_))));
        }
    }
}
