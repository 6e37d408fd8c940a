//! Travelling salesman routing.
//!
//! A chromosome is a route: a permutation of city indices, visited in order
//! and closed back to the start. Fitness is the negated route length, so
//! shorter routes score higher.

use crate::ga::operators::{order_crossover, prefix_order_crossover, swap_mutation};
use crate::ga::{GaProblem, ProblemError};
use rand::seq::SliceRandom;
use rand::Rng;

/// A named point on the plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Label used when printing routes.
    pub name: String,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Crossover policy for routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TspCrossover {
    /// Prefix of the first parent, then the second parent's remaining cities
    /// in order.
    #[default]
    PrefixOrder,

    /// Order crossover (OX): a segment of the first parent kept in place.
    Ordered,
}

/// Closed-tour routing over a fixed set of cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Tsp {
    cities: Vec<City>,
    crossover: TspCrossover,
}

impl Tsp {
    /// Creates a problem over `cities`.
    ///
    /// Fails with fewer than two cities or a non-finite coordinate.
    pub fn new(cities: Vec<City>) -> Result<Self, ProblemError> {
        if cities.len() < 2 {
            return Err(ProblemError::InvalidContext(format!(
                "at least 2 cities are required, got {}",
                cities.len()
            )));
        }
        if let Some(city) = cities.iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(ProblemError::InvalidContext(format!(
                "city {} has non-finite coordinates",
                city.name
            )));
        }
        Ok(Self {
            cities,
            crossover: TspCrossover::default(),
        })
    }

    /// Sets the crossover policy.
    pub fn with_crossover(mut self, crossover: TspCrossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Cities in index order; routes refer to them by position.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The route visiting cities in input order.
    pub fn default_road(&self) -> Vec<usize> {
        (0..self.cities.len()).collect()
    }

    /// Length of the closed tour, returning to the first city.
    pub fn road_length(&self, route: &[usize]) -> Result<f64, ProblemError> {
        self.check_route(route)?;
        let length: f64 = route
            .iter()
            .zip(route.iter().cycle().skip(1))
            .map(|(&from, &to)| self.cities[from].distance(&self.cities[to]))
            .sum();
        Ok(length)
    }

    /// City names along `route`.
    pub fn route_names(&self, route: &[usize]) -> Result<Vec<&str>, ProblemError> {
        self.check_route(route)?;
        Ok(route.iter().map(|&i| self.cities[i].name.as_str()).collect())
    }

    fn check_route(&self, route: &[usize]) -> Result<(), ProblemError> {
        let n = self.cities.len();
        if route.len() != n {
            return Err(ProblemError::InvalidChromosome(format!(
                "route visits {} cities, expected {n}",
                route.len()
            )));
        }
        let mut seen = vec![false; n];
        for &city in route {
            if city >= n {
                return Err(ProblemError::InvalidChromosome(format!(
                    "city index {city} outside 0..{n}"
                )));
            }
            if std::mem::replace(&mut seen[city], true) {
                return Err(ProblemError::InvalidChromosome(format!(
                    "city index {city} visited twice"
                )));
            }
        }
        Ok(())
    }
}

impl GaProblem for Tsp {
    type Gene = usize;

    fn generate_random_chromosome<R: Rng>(&self, rng: &mut R) -> Result<Vec<usize>, ProblemError> {
        let mut route = self.default_road();
        route.shuffle(rng);
        Ok(route)
    }

    fn calculate_fitness(&self, chromosome: &[usize]) -> Result<f64, ProblemError> {
        Ok(-self.road_length(chromosome)?)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> Result<Vec<usize>, ProblemError> {
        self.check_route(parent1)?;
        self.check_route(parent2)?;
        Ok(match self.crossover {
            TspCrossover::PrefixOrder => prefix_order_crossover(parent1, parent2, rng),
            TspCrossover::Ordered => order_crossover(parent1, parent2, rng),
        })
    }

    fn mutate<R: Rng>(&self, chromosome: &[usize], rng: &mut R) -> Result<Vec<usize>, ProblemError> {
        self.check_route(chromosome)?;
        Ok(swap_mutation(chromosome, rng))
    }
}
