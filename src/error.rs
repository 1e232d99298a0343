//! Error type shared by the annealing engine and the problem variants.

use std::fmt;

/// Errors raised while constructing a problem or running the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A tour needs at least two cities to form a closed loop.
    InvalidInput {
        /// Number of cities that were supplied.
        cities: usize,
    },

    /// `successors()` returned no candidates, so there is nothing to sample.
    DegenerateNeighborhood {
        /// Engine step at which the empty neighborhood was produced.
        step: usize,
    },

    /// The schedule produced a temperature that cannot be compared
    /// against the floor (NaN).
    InvalidTemperature {
        /// Engine step the schedule was asked about.
        step: usize,
        /// The value it returned.
        temperature: f64,
    },

    /// Rejected configuration.
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput { cities } => {
                write!(f, "a closed tour needs at least 2 cities, got {cities}")
            }
            Error::DegenerateNeighborhood { step } => {
                write!(f, "problem produced no successors at step {step}")
            }
            Error::InvalidTemperature { step, temperature } => {
                write!(f, "schedule returned temperature {temperature} at step {step}")
            }
            Error::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = Error::InvalidInput { cities: 1 };
        assert_eq!(err.to_string(), "a closed tour needs at least 2 cities, got 1");
    }

    #[test]
    fn test_display_degenerate_neighborhood() {
        let err = Error::DegenerateNeighborhood { step: 7 };
        assert!(err.to_string().contains("step 7"));
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::InvalidConfig("floor".into()));
    }
}
