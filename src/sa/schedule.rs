//! Temperature schedules.

/// Maps an engine step to a temperature.
///
/// Implemented for every `Fn(usize) -> f64`, so a plain closure works:
///
/// ```
/// use u_anneal::sa::Schedule;
///
/// let halving = |step: usize| 1.0 / 2f64.powi(step as i32);
/// assert_eq!(halving.temperature(3), 0.125);
/// ```
///
/// # Caller contract
///
/// The schedule must eventually return a value at or below the engine's
/// temperature floor. Nothing checks this; a schedule that never decays
/// keeps the engine running unless a step cap is configured.
pub trait Schedule {
    /// Temperature at `step`.
    fn temperature(&self, step: usize) -> f64;

    /// Checks the schedule's parameters. The runner calls this before the
    /// first step; closures have nothing to check.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl<F> Schedule for F
where
    F: Fn(usize) -> f64,
{
    fn temperature(&self, step: usize) -> f64 {
        self(step)
    }
}

/// Exponential decay: `T(t) = initial_temperature * decay^t`.
///
/// The default (`1e4`, `0.95`) is the reference policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSchedule {
    /// Temperature at step 0.
    pub initial_temperature: f64,

    /// Per-step decay factor in (0, 1).
    pub decay: f64,
}

impl Default for ExponentialSchedule {
    fn default() -> Self {
        Self {
            initial_temperature: 1e4,
            decay: 0.95,
        }
    }
}

impl ExponentialSchedule {
    pub fn new(initial_temperature: f64, decay: f64) -> Self {
        Self {
            initial_temperature,
            decay,
        }
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    fn check(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            ));
        }
        if self.decay <= 0.0 || self.decay >= 1.0 {
            return Err(format!("decay must be in (0, 1), got {}", self.decay));
        }
        Ok(())
    }

    /// First step whose temperature is at or below `floor`.
    ///
    /// Closed form `ceil(ln(floor / T0) / ln(decay))`, or 0 when the
    /// schedule already starts at or below the floor. `None` when the
    /// schedule never gets there (`decay` outside (0, 1)).
    pub fn floor_crossing_step(&self, floor: f64) -> Option<usize> {
        if self.initial_temperature <= floor {
            return Some(0);
        }
        if self.decay.is_nan() || self.decay <= 0.0 || self.decay >= 1.0 {
            return None;
        }
        let steps = ((floor / self.initial_temperature).ln() / self.decay.ln()).ceil();
        steps.is_finite().then(|| steps.max(0.0) as usize)
    }
}

impl Schedule for ExponentialSchedule {
    fn temperature(&self, step: usize) -> f64 {
        self.initial_temperature * self.decay.powf(step as f64)
    }

    fn validate(&self) -> Result<(), String> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let s = ExponentialSchedule::default();
        assert!((s.temperature(0) - 1e4).abs() < 1e-9);
        assert!((s.temperature(1) - 9500.0).abs() < 1e-9);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_schedule_is_non_increasing() {
        let s = ExponentialSchedule::default();
        for t in 0..700 {
            assert!(s.temperature(t + 1) <= s.temperature(t));
        }
    }

    #[test]
    fn test_floor_crossing_step_reference() {
        let s = ExponentialSchedule::default();
        let floor = 1e-10;
        let expected = ((floor / 1e4f64).ln() / 0.95f64.ln()).ceil() as usize;
        let step = s.floor_crossing_step(floor).unwrap();

        assert_eq!(step, expected);
        assert_eq!(step, 629);
        assert!(s.temperature(step) <= floor);
        assert!(s.temperature(step - 1) > floor);
    }

    #[test]
    fn test_floor_crossing_step_already_cold() {
        let s = ExponentialSchedule::new(1e-12, 0.5);
        assert_eq!(s.floor_crossing_step(1e-10), Some(0));
    }

    #[test]
    fn test_floor_crossing_step_never_cools() {
        assert_eq!(ExponentialSchedule::new(1e4, 1.0).floor_crossing_step(1e-10), None);
        assert_eq!(ExponentialSchedule::new(1e4, 1.5).floor_crossing_step(1e-10), None);
        assert_eq!(ExponentialSchedule::new(1e4, 0.0).floor_crossing_step(1e-10), None);
    }

    #[test]
    fn test_validate_bad_decay() {
        assert!(ExponentialSchedule::default().with_decay(1.0).validate().is_err());
        assert!(ExponentialSchedule::default().with_decay(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let s = ExponentialSchedule::default().with_initial_temperature(-5.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_closure_schedule() {
        let constant = |_: usize| 2.5_f64;
        assert_eq!(constant.temperature(0), 2.5);
        assert_eq!(constant.temperature(1000), 2.5);
    }
}
