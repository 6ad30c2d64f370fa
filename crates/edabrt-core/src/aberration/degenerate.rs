//! Coefficients for `n1 = 3`, where the linear restoring force vanishes
//! and every coefficient is a polynomial in the arc length.

use super::Deflector;
use crate::types::{Row, Term};

pub(super) fn coefficient(d: &Deflector, row: Row, term: Term) -> f64 {
    let h = d.h;
    let s = d.s;
    let n2 = d.params.n2();

    match (row, term) {
        (Row::X, Term::X) => 1.0,
        (Row::X, Term::A) => s,
        (Row::X, Term::XX) => h * h * h * (6.0 + n2) * s * s,
        (Row::X, Term::XA) => 2.0 * h * s + h * h * h * (6.0 + n2) * s * s * s / 3.0,
        (Row::X, Term::AA) => h * s * s * (6.0 + h * h * (6.0 + n2) * s * s) / 6.0,
        (Row::A, Term::X) => 0.0,
        (Row::A, Term::A) => 1.0,
        (Row::A, Term::XX) => 2.0 * h * h * h * (6.0 + n2) * s,
        (Row::A, Term::XA) => h * h * h * (6.0 + n2) * s * s,
        (Row::A, Term::AA) => 2.0 * h * s * (h * h * (6.0 + n2) * s * s - 3.0) / 3.0,
    }
}

#[cfg(test)]
mod tests {
    use crate::aberration::Deflector;
    use crate::types::{DeflectorParameters, Row, Term};
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial_values() {
        // r = 1, s = 2 rad of orbit, n2 = 0
        let p = DeflectorParameters::new(1.0, 2.0 * 180.0 / std::f64::consts::PI, 3.0, 0.0).unwrap();
        let d = Deflector::new(p);
        let s = d.arc_length();
        assert_relative_eq!(s, 2.0, epsilon = 1e-14);
        assert_relative_eq!(d.coefficient(Row::X, Term::XX), 6.0 * s * s, epsilon = 1e-12);
        assert_relative_eq!(d.coefficient(Row::X, Term::XA), 2.0 * s + 2.0 * s.powi(3), epsilon = 1e-12);
        assert_relative_eq!(d.coefficient(Row::X, Term::AA), s * s * (6.0 + 6.0 * s * s) / 6.0, epsilon = 1e-12);
        assert_relative_eq!(d.coefficient(Row::A, Term::XX), 12.0 * s, epsilon = 1e-12);
        assert_relative_eq!(d.coefficient(Row::A, Term::XA), 6.0 * s * s, epsilon = 1e-12);
        assert_relative_eq!(d.coefficient(Row::A, Term::AA), 2.0 * s * (6.0 * s * s - 3.0) / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_second_order_vanishes_for_n2_minus_six() {
        let p = DeflectorParameters::new(0.8, 50.0, 3.0, -6.0).unwrap();
        let d = Deflector::new(p);
        assert_eq!(d.coefficient(Row::X, Term::XX), 0.0);
        assert_eq!(d.coefficient(Row::A, Term::XX), 0.0);
        assert_eq!(d.coefficient(Row::A, Term::XA), 0.0);
        assert_eq!(d.coefficient(Row::A, Term::X), 0.0);
    }
}
