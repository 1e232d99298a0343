//! SA execution loop.

use super::config::AnnealConfig;
use super::schedule::Schedule;
use super::types::AnnealProblem;
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why the engine stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The schedule reached the temperature floor.
    Cooled,
    /// `max_steps` was reached first.
    StepLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<P> {
    /// The state the trajectory ended on.
    pub state: P,

    /// Value of `state`.
    pub value: f64,

    /// Number of completed steps (successor samples).
    pub steps: usize,

    /// Temperature observed at the step that ended the run.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    pub termination: Termination,
}

/// Metropolis acceptance probability for a move with value change `delta`.
///
/// Improvements (`delta > 0`) are always taken. Otherwise the probability is
/// `exp(delta / temperature)`, which is exactly 1 for a lateral move.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta > 0.0 {
        1.0
    } else {
        (delta / temperature).exp()
    }
}

/// Runs simulated annealing with the default configuration and returns the
/// terminal state.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_anneal::sa::{simulated_annealing, ExponentialSchedule};
/// use u_anneal::tsp::TravelingSalesmanProblem;
///
/// let tsp = TravelingSalesmanProblem::from_pairs([
///     ("A", (0.0, 0.0)),
///     ("C", (1.0, 1.0)),
///     ("B", (0.0, 1.0)),
///     ("D", (1.0, 0.0)),
/// ])?;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let best = simulated_annealing(tsp, &ExponentialSchedule::default(), &mut rng)?;
/// assert!((best.tour_length() - 4.0).abs() < 1e-9);
/// # Ok::<(), u_anneal::Error>(())
/// ```
pub fn simulated_annealing<P, S, R>(problem: P, schedule: &S, rng: &mut R) -> Result<P>
where
    P: AnnealProblem,
    S: Schedule,
    R: Rng,
{
    AnnealRunner::run_with_rng(problem, schedule, &AnnealConfig::default(), rng)
        .map(|result| result.state)
}

/// Executes the annealing loop.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs with a `StdRng` seeded from `config.seed`.
    pub fn run<P, S>(problem: P, schedule: &S, config: &AnnealConfig) -> Result<AnnealResult<P>>
    where
        P: AnnealProblem,
        S: Schedule,
    {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_cancel(problem, schedule, config, &mut rng, None)
    }

    /// Runs with a caller-supplied random source.
    pub fn run_with_rng<P, S, R>(
        problem: P,
        schedule: &S,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<P>>
    where
        P: AnnealProblem,
        S: Schedule,
        R: Rng,
    {
        Self::run_with_cancel(problem, schedule, config, rng, None)
    }

    /// Runs with an optional cancellation token, checked once per step.
    #[tracing::instrument(level = "debug", name = "anneal", skip_all)]
    pub fn run_with_cancel<P, S, R>(
        problem: P,
        schedule: &S,
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult<P>>
    where
        P: AnnealProblem,
        S: Schedule,
        R: Rng,
    {
        config.validate().map_err(Error::InvalidConfig)?;
        schedule.validate().map_err(Error::InvalidConfig)?;

        let mut current = problem;
        let mut current_value = current.value();
        let mut step = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        tracing::debug!(
            initial_value = current_value,
            floor = config.temperature_floor,
            "starting anneal"
        );

        let (termination, final_temperature) = loop {
            let temperature = schedule.temperature(step);
            if temperature.is_nan() {
                return Err(Error::InvalidTemperature { step, temperature });
            }
            if temperature <= config.temperature_floor {
                break (Termination::Cooled, temperature);
            }
            if config.max_steps > 0 && step >= config.max_steps {
                break (Termination::StepLimit, temperature);
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    tracing::warn!(step, "anneal cancelled");
                    break (Termination::Cancelled, temperature);
                }
            }

            let mut successors = current.successors();
            if successors.is_empty() {
                tracing::warn!(step, "problem produced an empty neighborhood");
                return Err(Error::DegenerateNeighborhood { step });
            }
            let pick = rng.random_range(0..successors.len());
            let next = successors.swap_remove(pick);
            let next_value = next.value();
            let delta = next_value - current_value;

            // Metropolis acceptance criterion
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < acceptance_probability(delta, temperature)
            };

            if accept {
                current = next;
                current_value = next_value;
                accepted_moves += 1;
                tracing::trace!(step, value = current_value, temperature, "accepted move");
            }

            step += 1;
        };

        tracing::debug!(
            steps = step,
            value = current_value,
            accepted_moves,
            ?termination,
            "anneal finished"
        );

        Ok(AnnealResult {
            state: current,
            value: current_value,
            steps: step,
            final_temperature,
            accepted_moves,
            improving_moves,
            termination,
        })
    }
}
