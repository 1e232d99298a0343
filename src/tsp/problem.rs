//! Closed-loop traveling salesman state.

use super::city::{LocatedCity, Point};
use crate::error::{Error, Result};
use crate::sa::AnnealProblem;

/// A tour visiting every city once and returning to the start.
///
/// The path order is the visiting order; the city after the last one is
/// the first. Neighbors swap one pair of cyclically adjacent cities, so
/// every state reachable from a tour is a permutation of the same cities.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealProblem;
/// use u_anneal::tsp::TravelingSalesmanProblem;
///
/// let square = TravelingSalesmanProblem::from_pairs([
///     ("A", (0.0, 0.0)),
///     ("B", (0.0, 1.0)),
///     ("C", (1.0, 1.0)),
///     ("D", (1.0, 0.0)),
/// ])?;
/// assert_eq!(square.value(), -4.0);
/// assert_eq!(square.successors().len(), 4);
/// # Ok::<(), u_anneal::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TourRepr"))]
pub struct TravelingSalesmanProblem {
    path: Vec<LocatedCity>,
}

/// Unchecked wire shape. Deserialized tours get the same length check as
/// [`TravelingSalesmanProblem::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TourRepr {
    path: Vec<LocatedCity>,
}

#[cfg(feature = "serde")]
impl TryFrom<TourRepr> for TravelingSalesmanProblem {
    type Error = Error;

    fn try_from(repr: TourRepr) -> Result<Self> {
        Self::from_path(repr.path)
    }
}

impl TravelingSalesmanProblem {
    /// Builds a tour visiting `cities` in the given order.
    ///
    /// The cities are copied. Fewer than two cities is rejected with
    /// [`Error::InvalidInput`].
    pub fn new(cities: &[LocatedCity]) -> Result<Self> {
        Self::from_path(cities.to_vec())
    }

    fn from_path(path: Vec<LocatedCity>) -> Result<Self> {
        if path.len() < 2 {
            return Err(Error::InvalidInput { cities: path.len() });
        }
        Ok(Self { path })
    }

    /// Builds a tour from `(name, (x, y))` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, (f64, f64))>,
        S: Into<String>,
    {
        Self::from_path(pairs.into_iter().map(LocatedCity::from).collect())
    }

    /// Cities in visiting order.
    pub fn path(&self) -> &[LocatedCity] {
        &self.path
    }

    pub fn names(&self) -> Vec<&str> {
        self.path.iter().map(LocatedCity::name).collect()
    }

    pub fn coords(&self) -> Vec<Point> {
        self.path.iter().map(LocatedCity::position).collect()
    }

    pub fn city_count(&self) -> usize {
        self.path.len()
    }

    /// First city of the path, where the tour starts and ends.
    pub fn starting_city(&self) -> &LocatedCity {
        &self.path[0]
    }

    /// Total length of the closed loop, including the edge from the last
    /// city back to the first.
    pub fn tour_length(&self) -> f64 {
        let n = self.path.len();
        (0..n)
            .map(|i| self.path[(i + n - 1) % n].distance_to(&self.path[i]))
            .sum()
    }
}

impl AnnealProblem for TravelingSalesmanProblem {
    /// One neighbor per position `i`: the tour with cities `i - 1` and `i`
    /// exchanged, where position `-1` is the last city. For `i = 0` this
    /// swaps the last and first cities across the closing edge.
    fn successors(&self) -> Vec<Self> {
        let n = self.path.len();
        (0..n)
            .map(|i| {
                let mut neighbor = self.clone();
                neighbor.path.swap((i + n - 1) % n, i);
                neighbor
            })
            .collect()
    }

    /// Negated tour length, so shorter tours score higher.
    fn value(&self) -> f64 {
        -self.tour_length()
    }
}
