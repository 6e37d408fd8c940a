//! Reference problem definitions.
//!
//! Concrete [`GaProblem`](crate::ga::GaProblem) implementations that exercise
//! the two encodings the engine is usually paired with: a free alphabet
//! ([`Mastermind`]) and a permutation ([`Tsp`]). They use different
//! crossover strategies on purpose; the engine assumes none.

mod mastermind;
mod tsp;

pub use mastermind::Mastermind;
pub use tsp::{City, Tsp, TspCrossover};
