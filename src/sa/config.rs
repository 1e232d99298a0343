//! Engine configuration.

/// Temperature at or below which the engine stops.
pub const DEFAULT_TEMPERATURE_FLOOR: f64 = 1e-10;

/// Configuration for the annealing engine.
///
/// The schedule itself is passed to the runner separately; this only holds
/// the stopping rules and the seed.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_temperature_floor(1e-8)
///     .with_max_steps(10_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// The loop ends once `schedule(t) <= temperature_floor`.
    pub temperature_floor: f64,

    /// Hard cap on engine steps. 0 = no limit.
    pub max_steps: usize,

    /// Random seed for reproducibility. Only read by [`AnnealRunner::run`];
    /// the other entry points take the random source directly.
    ///
    /// [`AnnealRunner::run`]: super::AnnealRunner::run
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            temperature_floor: DEFAULT_TEMPERATURE_FLOOR,
            max_steps: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_temperature_floor(mut self, floor: f64) -> Self {
        self.temperature_floor = floor;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.temperature_floor.is_finite() || self.temperature_floor <= 0.0 {
            return Err(format!(
                "temperature_floor must be positive and finite, got {}",
                self.temperature_floor
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.temperature_floor - 1e-10).abs() < 1e-20);
        assert_eq!(config.max_steps, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_floor() {
        assert!(AnnealConfig::default().with_temperature_floor(0.0).validate().is_err());
        assert!(AnnealConfig::default()
            .with_temperature_floor(f64::NAN)
            .validate()
            .is_err());
    }
}
