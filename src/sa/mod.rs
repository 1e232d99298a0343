//! Simulated Annealing (SA).
//!
//! A single-solution trajectory search. At each step a neighbor of the
//! current state is drawn uniformly at random; improvements are always
//! taken, and worsening moves are taken with probability
//! `exp(delta / T)` where `T` comes from a [`Schedule`]. The run ends once
//! the temperature falls to the configured floor.
//!
//! The engine is generic over [`AnnealProblem`] and never looks inside the
//! state it anneals.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 4

mod config;
mod runner;
mod schedule;
mod types;

pub use config::{AnnealConfig, DEFAULT_TEMPERATURE_FLOOR};
pub use runner::{acceptance_probability, simulated_annealing, AnnealResult, AnnealRunner, Termination};
pub use schedule::{ExponentialSchedule, Schedule};
pub use types::AnnealProblem;
