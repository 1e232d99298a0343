//! Core trait for Simulated Annealing.

/// A state the annealing engine can walk through.
///
/// The implementor owns its whole state and knows how to enumerate the
/// states one elementary move away. The engine handles temperature,
/// sampling and the acceptance criterion.
///
/// # Maximization
///
/// The engine maximizes [`value`](AnnealProblem::value). For a cost that
/// should be minimized (e.g. tour length), return its negation.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealProblem;
///
/// /// Walk on the integers towards 10.
/// #[derive(Clone)]
/// struct Walk(i64);
///
/// impl AnnealProblem for Walk {
///     fn successors(&self) -> Vec<Self> {
///         vec![Walk(self.0 - 1), Walk(self.0 + 1)]
///     }
///
///     fn value(&self) -> f64 {
///         -((self.0 - 10).abs() as f64)
///     }
/// }
///
/// assert_eq!(Walk(3).successors().len(), 2);
/// ```
pub trait AnnealProblem: Sized {
    /// Returns every state reachable from `self` by one local move.
    ///
    /// Must not mutate `self`, and must return the same neighbors in the
    /// same order for the same state so seeded runs are reproducible.
    /// An empty neighborhood makes the engine fail with
    /// [`Error::DegenerateNeighborhood`](crate::Error::DegenerateNeighborhood).
    fn successors(&self) -> Vec<Self>;

    /// Fitness of the state. Larger is better.
    fn value(&self) -> f64;
}
