//! Coefficients for `n1 > 3`, the defocusing case with wavenumber
//! `k = h·√(n1 − 3)`.
//!
//! Row (x|...) keeps the sign conventions of the published formulas, which
//! do not reduce to the degenerate regime as `n1 → 3⁺` for the a, x², xa
//! and a² terms.

use super::Deflector;
use crate::types::{Row, Term};

pub(super) fn coefficient(d: &Deflector, k: f64, row: Row, term: Term) -> f64 {
    let h = d.h;
    let s = d.s;
    let n1 = d.params.n1();
    let n2 = d.params.n2();

    let ks = k * s;

    match (row, term) {
        (Row::X, Term::X) => ks.cosh(),
        (Row::X, Term::A) => -ks.sinh() / k,
        (Row::X, Term::XX) => {
            h * (4.0 * (3.0 * n1 + n2 - 3.0) * ks.cosh()
                - 3.0 * (4.0 * n1 + n2 - 6.0) * (2.0 * (2.0 * ks).cosh() - 1.0)
                - (6.0 + n2) * (4.0 * ks).cosh())
                / (6.0 * (n1 - 3.0))
        }
        (Row::X, Term::XA) => {
            (4.0 * (3.0 * n1 + n2 - 3.0) * ks.sinh() - (6.0 + n2) * (4.0 * ks).sinh())
                / (6.0 * (n1 - 3.0).powf(1.5))
        }
        (Row::X, Term::AA) => {
            -(4.0 * (9.0 * n1 + 2.0 * n2 - 15.0) * ks.cosh()
                - 3.0 * (4.0 * n1 + n2 - 6.0) * (2.0 * (2.0 * ks).cosh() + 1.0)
                + (6.0 + n2) * (4.0 * ks).cosh())
                / (6.0 * h * (n1 - 3.0).powi(2))
        }
        (Row::A, Term::X) => k * ks.sinh(),
        (Row::A, Term::A) => ks.cosh(),
        (Row::A, Term::XX) => {
            2.0 * h * h * h * (3.0 * n1 + n2 - 3.0) * (ks.sinh() + (2.0 * ks).sinh()) / (3.0 * k)
        }
        (Row::A, Term::XA) => {
            2.0 * h * (3.0 * n1 + n2 - 3.0) * ((2.0 * ks).cosh() - ks.cosh()) / (3.0 * (n1 - 3.0))
        }
        (Row::A, Term::AA) => {
            2.0 * (15.0 - 9.0 * n1 - 2.0 * n2 + 2.0 * (3.0 * n1 + n2 - 3.0) * ks.cosh())
                * ks.sinh()
                / (3.0 * (n1 - 3.0).powf(1.5))
        }
    }
}
