//! Core type definitions for the GA engine.
//!
//! [`Individual`] pairs a chromosome with its fitness. [`GaProblem`] is the
//! contract between the generic engine and a domain-specific problem: the
//! engine never looks inside a chromosome, it only hands chromosomes to the
//! problem.

use super::error::ProblemError;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// A candidate solution: a chromosome and the fitness the problem assigned to it.
///
/// Higher fitness is better (maximization). The engine creates individuals
/// only through [`Individual::new`], with chromosome and fitness set together,
/// so a stored fitness always matches its chromosome.
///
/// Individuals are ranked with [`cmp_by_fitness`](Individual::cmp_by_fitness);
/// equality (`PartialEq`) compares both fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual<G> {
    chromosome: Vec<G>,
    fitness: f64,
}

impl<G> Individual<G> {
    /// Creates an individual, storing both fields verbatim.
    ///
    /// No validation of the chromosome shape happens here; that is the
    /// problem's responsibility.
    pub fn new(chromosome: Vec<G>, fitness: f64) -> Self {
        Self {
            chromosome,
            fitness,
        }
    }

    /// Returns the chromosome.
    pub fn chromosome(&self) -> &[G] {
        &self.chromosome
    }

    /// Returns the fitness score.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Consumes the individual, returning its chromosome.
    pub fn into_chromosome(self) -> Vec<G> {
        self.chromosome
    }

    /// Total order by fitness only (`f64::total_cmp`).
    pub fn cmp_by_fitness(&self, other: &Self) -> Ordering {
        self.fitness.total_cmp(&other.fitness)
    }
}

impl<G: fmt::Debug> fmt::Display for Individual<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Indiv({:.1},{:?})", self.fitness, self.chromosome)
    }
}

/// Defines a GA optimization problem.
///
/// This is the trait users implement to plug domain logic into the engine.
/// It covers exactly four operations:
///
/// 1. **Generation**: draw a random valid chromosome
/// 2. **Evaluation**: compute the fitness of a chromosome
/// 3. **Crossover**: combine two parents into one child
/// 4. **Mutation**: perturb one chromosome
///
/// Every operation takes `&self`, so no implementation can touch solver
/// state. Randomness comes from the generator the solver owns.
///
/// Any operation that cannot produce a valid result returns a
/// [`ProblemError`]; the engine propagates it unchanged.
///
/// # Implementing
///
/// ```
/// use rand::Rng;
/// use u_evolve::ga::{GaProblem, ProblemError};
///
/// struct OneMax {
///     n: usize,
/// }
///
/// impl GaProblem for OneMax {
///     type Gene = bool;
///
///     fn generate_random_chromosome<R: Rng>(&self, rng: &mut R) -> Result<Vec<bool>, ProblemError> {
///         Ok((0..self.n).map(|_| rng.random_bool(0.5)).collect())
///     }
///
///     fn calculate_fitness(&self, chromosome: &[bool]) -> Result<f64, ProblemError> {
///         Ok(chromosome.iter().filter(|&&b| b).count() as f64)
///     }
///
///     fn crossover<R: Rng>(&self, a: &[bool], b: &[bool], rng: &mut R) -> Result<Vec<bool>, ProblemError> {
///         let point = rng.random_range(0..self.n);
///         Ok(a[..point].iter().chain(&b[point..]).copied().collect())
///     }
///
///     fn mutate<R: Rng>(&self, chromosome: &[bool], rng: &mut R) -> Result<Vec<bool>, ProblemError> {
///         let mut child = chromosome.to_vec();
///         let i = rng.random_range(0..self.n);
///         child[i] = !child[i];
///         Ok(child)
///     }
/// }
/// ```
pub trait GaProblem {
    /// One element of a chromosome. Opaque to the engine.
    type Gene: Clone + fmt::Debug;

    /// Draws a chromosome independently and uniformly from the valid space.
    fn generate_random_chromosome<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Self::Gene>, ProblemError>;

    /// Scores a chromosome. Higher is better.
    ///
    /// Must be deterministic and defined for every chromosome the other
    /// three operations can produce.
    fn calculate_fitness(&self, chromosome: &[Self::Gene]) -> Result<f64, ProblemError>;

    /// Combines two parents into one valid child.
    ///
    /// The splice or repair strategy is entirely up to the implementation.
    fn crossover<R: Rng>(
        &self,
        parent1: &[Self::Gene],
        parent2: &[Self::Gene],
        rng: &mut R,
    ) -> Result<Vec<Self::Gene>, ProblemError>;

    /// Returns a perturbed copy of `chromosome` that is still valid.
    ///
    /// Should usually change at least one gene, but is not required to.
    fn mutate<R: Rng>(
        &self,
        chromosome: &[Self::Gene],
        rng: &mut R,
    ) -> Result<Vec<Self::Gene>, ProblemError>;
}
