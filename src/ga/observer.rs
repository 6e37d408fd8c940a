//! Per-generation progress reporting.
//!
//! The evolutionary loop has no console dependency: after every generation
//! it hands a [`GenerationReport`] to a [`GenerationObserver`]. Closures are
//! observers, and [`LogProgress`] forwards the report to `tracing`.

use std::fmt;

/// Progress snapshot taken after one generation of an `evolve_until` run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    /// 1-based generation number within the run.
    pub generation: usize,

    /// Best fitness in the population after this generation.
    pub best_fitness: f64,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation {}: Best fitness = {:.2}",
            self.generation, self.best_fitness
        )
    }
}

/// Receives a report once per generation.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::{GenerationObserver, GenerationReport};
///
/// let mut lines = Vec::new();
/// let mut collect = |report: &GenerationReport| lines.push(report.to_string());
/// collect.on_generation(&GenerationReport { generation: 7, best_fitness: 18.0 });
/// assert_eq!(lines, ["Generation 7: Best fitness = 18.00"]);
/// ```
pub trait GenerationObserver {
    /// Called after each generation, before the stopping condition is checked.
    fn on_generation(&mut self, report: &GenerationReport);
}

impl<F: FnMut(&GenerationReport)> GenerationObserver for F {
    fn on_generation(&mut self, report: &GenerationReport) {
        self(report)
    }
}

/// Emits each report as an `info` event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl GenerationObserver for LogProgress {
    fn on_generation(&mut self, report: &GenerationReport) {
        tracing::info!(
            generation = report.generation,
            best_fitness = report.best_fitness,
            "{report}"
        );
    }
}
