//! Generic sequence-based genetic operators.
//!
//! Building blocks for [`GaProblem`](super::GaProblem) implementations. The
//! engine itself never calls these; problem adapters pick the ones whose
//! validity guarantees match their encoding.
//!
//! # Crossover Operators
//!
//! - [`splice_crossover`]: single-point splice `a[..x] ++ b[x..]`; for
//!   free-alphabet encodings where any gene may sit at any position
//! - [`prefix_order_crossover`]: prefix of one parent, then the other
//!   parent's remaining genes in order; keeps permutations valid
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//!
//! # Mutation Operators
//!
//! - [`point_mutation`]: replace one position with a fresh gene
//! - [`swap_mutation`]: exchange two distinct positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point splice: genes before a random cut from `parent1`, the rest
/// from `parent2`.
///
/// The cut is drawn from `0..len`, so the child may be a full copy of
/// `parent2` but always takes at least the last gene from it.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn splice_crossover<T: Clone, R: Rng>(parent1: &[T], parent2: &[T], rng: &mut R) -> Vec<T> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let point = rng.random_range(0..n);
    parent1[..point]
        .iter()
        .chain(&parent2[point..])
        .cloned()
        .collect()
}

/// Prefix-order crossover for permutations.
///
/// Takes `parent1[..x]` with the cut `x` drawn from `1..n`, then appends
/// every gene of `parent2` not already in the child, in `parent2`'s order.
/// If both parents are permutations of the same set, so is the child.
///
/// # Complexity
/// O(n²) for the membership checks; fine for the tour sizes GA problems use.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn prefix_order_crossover<T: Clone + PartialEq, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Vec<T> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let point = rng.random_range(1..n);
    let mut child = parent1[..point].to_vec();
    for gene in parent2 {
        if !child.contains(gene) {
            child.push(gene.clone());
        }
    }
    child
}

/// Order Crossover (OX) for index permutations.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random segment `[start, end]` from `parent1`
/// 2. Copy segment to child at the same positions
/// 3. Fill remaining positions from `parent2`, starting after the segment
///    and wrapping around, skipping genes already in the child
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths, are empty, or are not
/// permutations of `0..n`.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let (start, end) = random_segment(n, rng);

    let mut child = vec![usize::MAX; n];
    let mut taken = vec![false; n];
    for i in start..=end {
        child[i] = parent1[i];
        taken[parent1[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let gene = parent2[(end + 1 + offset) % n];
        if !taken[gene] {
            child[pos] = gene;
            taken[gene] = true;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Point mutation: one random position gets a gene from `new_gene`.
///
/// The replacement may equal the old gene, in which case nothing changes.
pub fn point_mutation<T: Clone, R: Rng>(
    chromosome: &[T],
    rng: &mut R,
    mut new_gene: impl FnMut(&mut R) -> T,
) -> Vec<T> {
    let mut child = chromosome.to_vec();
    if child.is_empty() {
        return child;
    }
    let pos = rng.random_range(0..child.len());
    child[pos] = new_gene(rng);
    child
}

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(n) for the copy, O(1) for the swap
pub fn swap_mutation<T: Clone, R: Rng>(chromosome: &[T], rng: &mut R) -> Vec<T> {
    let mut child = chromosome.to_vec();
    let n = child.len();
    if n < 2 {
        return child;
    }
    let picked = rand::seq::index::sample(rng, n, 2);
    child.swap(picked.index(0), picked.index(1));
    child
}

// ============================================================================
// Helpers
// ============================================================================

/// Inclusive bounds of a random segment of `0..n`, ordered `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let (i, j) = (rng.random_range(0..n), rng.random_range(0..n));
    (i.min(j), i.max(j))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    // ---- Splice ----

    #[test]
    fn test_splice_takes_prefix_and_suffix() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec!['a'; 6];
        let p2 = vec!['b'; 6];

        for _ in 0..100 {
            let child = splice_crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), 6);
            let cut = child.iter().position(|&g| g == 'b').unwrap();
            assert!(child[..cut].iter().all(|&g| g == 'a'));
            assert!(child[cut..].iter().all(|&g| g == 'b'));
        }
    }

    #[test]
    fn test_splice_single_gene_comes_from_second_parent() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(splice_crossover(&[1], &[2], &mut rng), vec![2]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_splice_length_mismatch_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        splice_crossover(&[1, 2], &[1], &mut rng);
    }

    // ---- Prefix order ----

    #[test]
    fn test_prefix_order_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<usize> = (0..8).collect();
        let p2 = vec![3, 7, 5, 1, 6, 0, 2, 4];

        for _ in 0..100 {
            let child = prefix_order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 8), "invalid child: {child:?}");
            assert_eq!(child[0], 0, "prefix always keeps parent1's first gene");
        }
    }

    #[test]
    fn test_prefix_order_keeps_donor_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let p1 = vec!["a", "b", "c", "d", "e"];
        let p2 = vec!["e", "d", "c", "b", "a"];

        for _ in 0..50 {
            let child = prefix_order_crossover(&p1, &p2, &mut rng);
            let cut = (1..5).find(|&i| child[i] != p1[i]).unwrap_or(5);
            let tail: Vec<&str> = p2
                .iter()
                .copied()
                .filter(|g| !p1[..cut].contains(g))
                .collect();
            assert_eq!(&child[cut..], tail.as_slice());
        }
    }

    #[test]
    fn test_prefix_order_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(prefix_order_crossover(&[4], &[4], &mut rng), vec![4]);
    }

    // ---- OX ----

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1: Vec<usize> = (0..8).collect();
        let p2: Vec<usize> = (0..8).rev().collect();

        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_valid_permutation(&child, 8), "OX child not valid: {child:?}");
        }
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![2, 0, 4, 1, 3];
        assert_eq!(order_crossover(&p, &p, &mut rng), p);
    }

    #[test]
    fn test_ox_two_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let child = order_crossover(&[0, 1], &[1, 0], &mut rng);
            assert!(is_valid_permutation(&child, 2));
        }
    }

    // ---- Point mutation ----

    #[test]
    fn test_point_mutation_changes_at_most_one_gene() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = vec![0u8; 10];

        for _ in 0..100 {
            let child = point_mutation(&original, &mut rng, |r| r.random_range(0..6));
            let diffs = child.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert!(diffs <= 1);
            assert!(child.iter().all(|&g| g < 6));
        }
    }

    #[test]
    fn test_point_mutation_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let child: Vec<u8> = point_mutation(&[], &mut rng, |_| 1);
        assert!(child.is_empty());
    }

    // ---- Swap mutation ----

    #[test]
    fn test_swap_always_changes_two_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<usize> = (0..10).collect();

        for _ in 0..100 {
            let child = swap_mutation(&original, &mut rng);
            assert!(is_valid_permutation(&child, 10));
            let diffs = child.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert_eq!(diffs, 2);
        }
    }

    #[test]
    fn test_swap_single_element() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(swap_mutation(&[0], &mut rng), vec![0]);
    }

    // ---- Random segment helper ----

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }
}
