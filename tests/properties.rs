//! Property tests for generation invariants across seeds and configurations.

use proptest::prelude::*;
use u_evolve::ga::{GaConfig, GaProblem, GaSolver, GenerationReport, Individual, Termination};
use u_evolve::problems::{City, Mastermind, Tsp, TspCrossover};

fn ranked<G: Clone>(population: &[Individual<G>]) -> Vec<Individual<G>> {
    let mut ranked = population.to_vec();
    ranked.sort_by(|a, b| b.cmp_by_fitness(a));
    ranked
}

fn ring(n: usize) -> Tsp {
    let cities = (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            City::new(format!("c{i}"), angle.cos() * 10.0, angle.sin() * 10.0)
        })
        .collect();
    Tsp::new(cities).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generation_preserves_size_parents_and_fitness(
        seed in any::<u64>(),
        pop_size in 4usize..40,
        selection_rate in 0.5f64..=1.0,
        mutation_rate in 0.0f64..=1.0,
        generations in 1usize..15,
    ) {
        let config = GaConfig::default()
            .with_selection_rate(selection_rate)
            .with_mutation_rate(mutation_rate)
            .with_seed(seed);
        let problem = Mastermind::with_secret(vec![2, 0, 1, 4, 3], 5).unwrap();
        let mut solver = GaSolver::new(problem, config).unwrap();
        solver.reset_population(pop_size).unwrap();

        let survivors = solver.config().survivors(pop_size);
        let mut best = solver.get_best_individual().unwrap().fitness();

        for _ in 0..generations {
            let before = ranked(solver.population().unwrap());
            solver.evolve_for_one_generation().unwrap();
            let after = solver.population().unwrap();

            prop_assert_eq!(after.len(), pop_size);
            prop_assert_eq!(&after[..survivors], &before[..survivors]);
            for ind in after {
                prop_assert_eq!(
                    ind.fitness(),
                    solver.problem().calculate_fitness(ind.chromosome()).unwrap()
                );
            }

            let new_best = solver.get_best_individual().unwrap().fitness();
            prop_assert!(new_best >= best);
            best = new_best;
        }
    }

    #[test]
    fn routes_stay_permutations(
        seed in any::<u64>(),
        cities in 3usize..12,
        ordered in any::<bool>(),
    ) {
        let policy = if ordered { TspCrossover::Ordered } else { TspCrossover::PrefixOrder };
        let problem = ring(cities).with_crossover(policy);
        let config = GaConfig::default().with_mutation_rate(0.5).with_seed(seed);
        let mut solver = GaSolver::new(problem, config).unwrap();
        solver.reset_population(20).unwrap();
        solver.evolve_until(10, None).unwrap();

        for ind in solver.population().unwrap() {
            prop_assert!(solver.problem().road_length(ind.chromosome()).is_ok());
        }
    }

    #[test]
    fn early_stop_implies_threshold(
        seed in any::<u64>(),
        threshold in 1.0f64..=4.0,
        max_generations in 1usize..60,
    ) {
        let problem = Mastermind::with_secret(vec![5, 5, 0, 2], 6).unwrap();
        let mut solver = GaSolver::new(problem, GaConfig::default().with_seed(seed)).unwrap();
        solver.reset_population(20).unwrap();

        let mut reported = Vec::new();
        let summary = solver
            .evolve_until_with(max_generations, Some(threshold), &mut |r: &GenerationReport| {
                reported.push(r.generation)
            })
            .unwrap();

        prop_assert!(summary.generations <= max_generations);
        prop_assert_eq!(reported, (1..=summary.generations).collect::<Vec<_>>());
        match summary.termination {
            Termination::ThresholdReached => prop_assert!(summary.best_fitness >= threshold),
            Termination::MaxGenerations => prop_assert_eq!(summary.generations, max_generations),
        }
        if summary.generations < max_generations {
            prop_assert!(summary.best_fitness >= threshold);
        }
    }
}
