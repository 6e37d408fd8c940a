//! GA evolutionary loop execution.
//!
//! [`GaSolver`] owns the population and drives each generation:
//! rank → select (elitism) → reproduce → mutate.

use super::config::GaConfig;
use super::error::{GaError, Result};
use super::observer::{GenerationObserver, GenerationReport, LogProgress};
use super::types::{GaProblem, Individual};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Why an `evolve_until` run stopped. Both are normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The best fitness reached the requested threshold.
    ThresholdReached,

    /// `max_generations` generations were evolved.
    MaxGenerations,
}

/// Outcome of an [`GaSolver::evolve_until`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionSummary {
    /// Number of generations evolved in this run.
    pub generations: usize,

    /// Best fitness in the population when the run stopped.
    pub best_fitness: f64,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best fitness after each generation of this run.
    pub fitness_history: Vec<f64>,
}

/// Generational GA engine over a pluggable [`GaProblem`].
///
/// The solver has a single explicit state, "has a population", entered by
/// [`reset_population`](Self::reset_population). Every other operation
/// fails with [`GaError::UninitializedPopulation`] until then.
///
/// The random generator is owned by the solver, so two solvers never share
/// random state and a seeded solver replays the same run.
///
/// # Usage
///
/// ```ignore
/// let problem = Mastermind::with_secret(vec![0, 3, 5, 1], 6)?;
/// let config = GaConfig::default().with_seed(42);
/// let mut solver = GaSolver::new(problem, config)?;
/// solver.reset_population(50)?;
/// solver.evolve_until(500, Some(4.0))?;
/// println!("Best: {}", solver.get_best_individual()?);
/// ```
#[derive(Debug)]
pub struct GaSolver<P: GaProblem, R: Rng = StdRng> {
    problem: P,
    config: GaConfig,
    rng: R,
    population: Option<Vec<Individual<P::Gene>>>,
    generation: usize,
}

impl<P: GaProblem> GaSolver<P, StdRng> {
    /// Creates a solver seeded from `config.seed`, or from a random seed if unset.
    ///
    /// Fails with [`GaError::InvalidConfiguration`] if the rates are out of range.
    pub fn new(problem: P, config: GaConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::with_rng(problem, config, rng)
    }
}

impl<P: GaProblem, R: Rng> GaSolver<P, R> {
    /// Creates a solver that draws from the given generator.
    ///
    /// `config.seed` is ignored; the caller controls seeding.
    pub fn with_rng(problem: P, config: GaConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            problem,
            config,
            rng,
            population: None,
            generation: 0,
        })
    }

    /// Returns the problem definition.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Generations evolved since the last successful `reset_population`.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the current population.
    pub fn population(&self) -> Result<&[Individual<P::Gene>]> {
        self.population
            .as_deref()
            .ok_or(GaError::UninitializedPopulation)
    }

    /// Discards any existing population and creates `pop_size` random individuals.
    ///
    /// The new population is installed only once it is complete; if the
    /// problem fails part-way, the previous population (if any) stays in place.
    ///
    /// # Errors
    ///
    /// - [`GaError::InvalidConfiguration`] if `pop_size < 2` or the selection
    ///   rate keeps fewer than two survivors.
    /// - [`GaError::ProblemDefinition`] if generation or evaluation fails.
    pub fn reset_population(&mut self, pop_size: usize) -> Result<()> {
        self.config.validate_population(pop_size)?;

        let mut population = Vec::with_capacity(pop_size);
        for _ in 0..pop_size {
            let chromosome = self.problem.generate_random_chromosome(&mut self.rng)?;
            let fitness = self.problem.calculate_fitness(&chromosome)?;
            population.push(Individual::new(chromosome, fitness));
        }

        tracing::debug!(
            pop_size,
            survivors = self.config.survivors(pop_size),
            "population reset"
        );

        self.population = Some(population);
        self.generation = 0;
        Ok(())
    }

    /// Applies one generation: rank, select, reproduce, mutate.
    ///
    /// 1. Sort by fitness, best first (stable).
    /// 2. Keep the top `floor(selection_rate × N)` individuals unchanged.
    /// 3. Fill up to `N` with children of two distinct, uniformly sampled
    ///    parents.
    /// 4. Mutate each child with probability `mutation_rate`, re-evaluating
    ///    its fitness. Parents are never mutated.
    ///
    /// A problem failure aborts the generation and leaves the previous
    /// population installed.
    pub fn evolve_for_one_generation(&mut self) -> Result<()> {
        let population = self
            .population
            .as_mut()
            .ok_or(GaError::UninitializedPopulation)?;

        let size = population.len();
        population.sort_by(|a, b| b.cmp_by_fitness(a));

        // Checked at reset_population; both hold for the whole run.
        let survivors = self.config.survivors(size);
        debug_assert!((2..=size).contains(&survivors));
        let parents = &population[..survivors];

        let mut next_gen: Vec<Individual<P::Gene>> = Vec::with_capacity(size);
        next_gen.extend_from_slice(parents);

        while next_gen.len() < size {
            let picked = index::sample(&mut self.rng, survivors, 2);
            let (a, b) = (&parents[picked.index(0)], &parents[picked.index(1)]);

            let child = self
                .problem
                .crossover(a.chromosome(), b.chromosome(), &mut self.rng)?;
            let fitness = self.problem.calculate_fitness(&child)?;
            next_gen.push(Individual::new(child, fitness));
        }

        let mut mutations = 0usize;
        for individual in &mut next_gen[survivors..] {
            if self.rng.random::<f64>() < self.config.mutation_rate {
                let mutated = self.problem.mutate(individual.chromosome(), &mut self.rng)?;
                let fitness = self.problem.calculate_fitness(&mutated)?;
                *individual = Individual::new(mutated, fitness);
                mutations += 1;
            }
        }

        *population = next_gen;
        self.generation += 1;

        tracing::trace!(
            generation = self.generation,
            survivors,
            children = size - survivors,
            mutations,
            "generation evolved"
        );
        Ok(())
    }

    /// Evolves up to `max_generations` generations, logging progress through
    /// [`LogProgress`].
    ///
    /// See [`evolve_until_with`](Self::evolve_until_with).
    pub fn evolve_until(
        &mut self,
        max_generations: usize,
        threshold_fitness: Option<f64>,
    ) -> Result<EvolutionSummary> {
        self.evolve_until_with(max_generations, threshold_fitness, &mut LogProgress)
    }

    /// Evolves up to `max_generations` generations, reporting to `observer`.
    ///
    /// After each generation the observer receives the 1-based generation
    /// number and the current best fitness. If `threshold_fitness` is set and
    /// the best fitness is `>=` it, the run stops immediately. The stopping
    /// condition is only checked between generations.
    pub fn evolve_until_with<O: GenerationObserver + ?Sized>(
        &mut self,
        max_generations: usize,
        threshold_fitness: Option<f64>,
        observer: &mut O,
    ) -> Result<EvolutionSummary> {
        let mut best_fitness = self.get_best_individual()?.fitness();
        // max_generations may be usize::MAX ("until the threshold"); grow on demand.
        let mut fitness_history = Vec::with_capacity(max_generations.min(1024));
        let mut termination = Termination::MaxGenerations;

        for generation in 1..=max_generations {
            self.evolve_for_one_generation()?;
            best_fitness = self.get_best_individual()?.fitness();
            fitness_history.push(best_fitness);

            observer.on_generation(&GenerationReport {
                generation,
                best_fitness,
            });

            if threshold_fitness.is_some_and(|threshold| best_fitness >= threshold) {
                termination = Termination::ThresholdReached;
                break;
            }
        }

        tracing::info!(
            generations = fitness_history.len(),
            best_fitness,
            ?termination,
            "evolution finished"
        );

        Ok(EvolutionSummary {
            generations: fitness_history.len(),
            best_fitness,
            termination,
            fitness_history,
        })
    }

    /// Returns the individual with the highest fitness.
    ///
    /// Ties go to the first occurrence in population order.
    pub fn get_best_individual(&self) -> Result<&Individual<P::Gene>> {
        self.population()?
            .iter()
            .reduce(|best, ind| {
                if ind.cmp_by_fitness(best).is_gt() {
                    ind
                } else {
                    best
                }
            })
            .ok_or(GaError::UninitializedPopulation)
    }

    /// One-line description of the current best individual, for debugging.
    pub fn generation_summary(&self) -> Result<String> {
        let best = self.get_best_individual()?;
        tracing::debug!(generation = self.generation, %best, "generation summary");
        Ok(format!("Best individual: {best}"))
    }
}

// ============================================================================
// Tests
// ============================================================================
