//! Mastermind-style code breaking.
//!
//! A chromosome is a guess: one color index per peg. Fitness counts the
//! pegs that match the hidden code in both color and position, so the
//! best possible score is the code length.

use crate::ga::operators::{point_mutation, splice_crossover};
use crate::ga::{GaProblem, ProblemError};
use rand::Rng;

/// Hidden code over `num_colors` colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mastermind {
    secret: Vec<u8>,
    num_colors: u8,
}

impl Mastermind {
    /// Creates a match against a known code.
    ///
    /// Fails if the code is empty, `num_colors` is zero, or a peg uses a
    /// color outside `0..num_colors`.
    pub fn with_secret(secret: Vec<u8>, num_colors: u8) -> Result<Self, ProblemError> {
        if num_colors == 0 {
            return Err(ProblemError::InvalidContext(
                "num_colors must be at least 1".into(),
            ));
        }
        if secret.is_empty() {
            return Err(ProblemError::InvalidContext("secret must not be empty".into()));
        }
        if let Some(&peg) = secret.iter().find(|&&peg| peg >= num_colors) {
            return Err(ProblemError::InvalidContext(format!(
                "secret color {peg} outside 0..{num_colors}"
            )));
        }
        Ok(Self { secret, num_colors })
    }

    /// Creates a match against a random code of `secret_size` pegs.
    pub fn random<R: Rng>(
        secret_size: usize,
        num_colors: u8,
        rng: &mut R,
    ) -> Result<Self, ProblemError> {
        if num_colors == 0 {
            return Err(ProblemError::InvalidContext(
                "num_colors must be at least 1".into(),
            ));
        }
        let secret = (0..secret_size)
            .map(|_| rng.random_range(0..num_colors))
            .collect();
        Self::with_secret(secret, num_colors)
    }

    /// Number of pegs in the code.
    pub fn secret_size(&self) -> usize {
        self.secret.len()
    }

    /// Number of available colors.
    pub fn num_colors(&self) -> u8 {
        self.num_colors
    }

    /// Fitness of an exact guess.
    pub fn max_score(&self) -> f64 {
        self.secret.len() as f64
    }

    /// Returns `true` if `guess` is exactly the hidden code.
    pub fn is_correct(&self, guess: &[u8]) -> bool {
        guess == self.secret.as_slice()
    }

    /// Counts pegs with the right color in the right position.
    pub fn well_placed(&self, guess: &[u8]) -> Result<usize, ProblemError> {
        self.check_guess(guess)?;
        Ok(guess
            .iter()
            .zip(&self.secret)
            .filter(|(g, s)| g == s)
            .count())
    }

    fn check_guess(&self, guess: &[u8]) -> Result<(), ProblemError> {
        if guess.len() != self.secret.len() {
            return Err(ProblemError::InvalidChromosome(format!(
                "guess has {} pegs, expected {}",
                guess.len(),
                self.secret.len()
            )));
        }
        if let Some(&peg) = guess.iter().find(|&&peg| peg >= self.num_colors) {
            return Err(ProblemError::InvalidChromosome(format!(
                "color {peg} outside 0..{}",
                self.num_colors
            )));
        }
        Ok(())
    }
}

impl GaProblem for Mastermind {
    type Gene = u8;

    fn generate_random_chromosome<R: Rng>(&self, rng: &mut R) -> Result<Vec<u8>, ProblemError> {
        Ok((0..self.secret.len())
            .map(|_| rng.random_range(0..self.num_colors))
            .collect())
    }

    fn calculate_fitness(&self, chromosome: &[u8]) -> Result<f64, ProblemError> {
        Ok(self.well_placed(chromosome)? as f64)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &[u8],
        parent2: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>, ProblemError> {
        self.check_guess(parent1)?;
        self.check_guess(parent2)?;
        Ok(splice_crossover(parent1, parent2, rng))
    }

    fn mutate<R: Rng>(&self, chromosome: &[u8], rng: &mut R) -> Result<Vec<u8>, ProblemError> {
        self.check_guess(chromosome)?;
        let num_colors = self.num_colors;
        Ok(point_mutation(chromosome, rng, |r| {
            r.random_range(0..num_colors)
        }))
    }
}
