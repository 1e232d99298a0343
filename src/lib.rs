//! Simulated annealing with a closed-loop traveling salesman problem.
//!
//! - **Simulated Annealing (SA)**: a domain-agnostic engine that walks any
//!   state implementing [`sa::AnnealProblem`], driven by a pluggable
//!   temperature [`sa::Schedule`] and an injected random source.
//! - **TSP**: [`tsp::TravelingSalesmanProblem`], a tour over named points
//!   whose neighbors are adjacent-pair swaps and whose fitness is the
//!   negated closed-loop length.
//!
//! Loading city data and rendering tours are left to the caller: build a
//! problem from `(name, (x, y))` pairs, anneal it, and read the path back.
//!
//! ```
//! use u_anneal::sa::{AnnealConfig, AnnealRunner, ExponentialSchedule};
//! use u_anneal::tsp::TravelingSalesmanProblem;
//!
//! let tsp = TravelingSalesmanProblem::from_pairs([
//!     ("Atlanta", (585.6, 376.8)),
//!     ("Boston", (738.4, 190.8)),
//!     ("Denver", (293.6, 274.0)),
//!     ("Austin", (389.2, 448.4)),
//! ])?;
//! let config = AnnealConfig::default().with_seed(1);
//! let result = AnnealRunner::run(tsp, &ExponentialSchedule::default(), &config)?;
//! assert_eq!(result.state.city_count(), 4);
//! assert!(result.state.tour_length() > 0.0);
//! # Ok::<(), u_anneal::Error>(())
//! ```

mod error;
pub mod sa;
pub mod tsp;

pub use error::{Error, Result};
