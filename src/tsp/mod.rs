//! Closed-loop traveling salesman problem.
//!
//! A state is an ordered cyclic sequence of [`LocatedCity`] values. Its
//! fitness is the negated Euclidean length of the closed tour, and its
//! neighborhood is every swap of two cyclically adjacent cities.

mod city;
mod problem;

pub use city::{LocatedCity, Point};
pub use problem::TravelingSalesmanProblem;
