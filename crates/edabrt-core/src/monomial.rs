//! Enumeration of monomial exponent tuples.
//!
//! [`Monomials`] yields every tuple of `variables` non-negative exponents
//! summing to `order`, in reverse lexicographic order: for two variables
//! and order two that is `(2, 0), (1, 1), (0, 2)`.

/// Number of phase-space variables in the x-a plane.
pub const VARIABLES: usize = 2;

/// Highest aberration order with tabulated coefficients.
pub const MAX_ORDER: usize = 2;

/// Lazy iterator over the exponent tuples of one total order.
///
/// The iterator is `Clone`, so a fresh walk can be restarted from any copy.
#[derive(Debug, Clone)]
pub struct Monomials {
    next: Option<Vec<usize>>,
}

impl Monomials {
    pub fn new(variables: usize, order: usize) -> Self {
        let next = (variables > 0).then(|| {
            let mut first = vec![0; variables];
            first[0] = order;
            first
        });
        Self { next }
    }
}

impl Iterator for Monomials {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let last = current.len() - 1;

        // Move one unit out of the rightmost non-zero slot before the last,
        // gathering everything to its right into the following slot.
        if let Some(pivot) = (0..last).rev().find(|&i| current[i] > 0) {
            let mut successor = current.clone();
            let tail = successor[last];
            successor[last] = 0;
            successor[pivot] -= 1;
            successor[pivot + 1] = tail + 1;
            self.next = Some(successor);
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_variable_orders() {
        let first: Vec<_> = Monomials::new(2, 1).collect();
        assert_eq!(first, vec![vec![1, 0], vec![0, 1]]);

        let second: Vec<_> = Monomials::new(2, 2).collect();
        assert_eq!(second, vec![vec![2, 0], vec![1, 1], vec![0, 2]]);
    }

    #[test]
    fn test_three_variables_reverse_lexicographic() {
        let tuples: Vec<_> = Monomials::new(3, 2).collect();
        assert_eq!(
            tuples,
            vec![
                vec![2, 0, 0],
                vec![1, 1, 0],
                vec![1, 0, 1],
                vec![0, 2, 0],
                vec![0, 1, 1],
                vec![0, 0, 2],
            ]
        );
    }

    #[test]
    fn test_counts_match_stars_and_bars() {
        // C(order + variables - 1, variables - 1)
        assert_eq!(Monomials::new(4, 3).count(), 20);
        assert_eq!(Monomials::new(2, 5).count(), 6);
        assert!(Monomials::new(3, 4).all(|t| t.iter().sum::<usize>() == 4));
    }

    #[test]
    fn test_degenerate_shapes() {
        assert_eq!(Monomials::new(0, 2).count(), 0);
        assert_eq!(Monomials::new(3, 0).collect::<Vec<_>>(), vec![vec![0, 0, 0]]);
        assert_eq!(Monomials::new(1, 3).collect::<Vec<_>>(), vec![vec![3]]);
    }

    #[test]
    fn test_restartable() {
        let walk = Monomials::new(VARIABLES, MAX_ORDER);
        let a: Vec<_> = walk.clone().collect();
        let b: Vec<_> = walk.collect();
        assert_eq!(a, b);
    }
}
