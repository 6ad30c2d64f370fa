//! Coefficients for `n1 < 3`, where the linear motion is a rotation in
//! phase space with wavenumber `k = h·√(3 − n1)`.

use super::Deflector;
use crate::types::{Row, Term};

pub(super) fn coefficient(d: &Deflector, k: f64, row: Row, term: Term) -> f64 {
    let h = d.h;
    let s = d.s;
    let n1 = d.params.n1();
    let n2 = d.params.n2();

    let ks = k * s;
    let half_sin_sq = (ks / 2.0).sin().powi(2);
    // (h²(3 − n1))^1.5 = k³
    let k_cubed = (h * h * (3.0 - n1)).powf(1.5);

    match (row, term) {
        (Row::X, Term::X) => ks.cos(),
        (Row::X, Term::A) => ks.sin() / k,
        (Row::X, Term::XX) => {
            -4.0 * h * (9.0 * n1 + 2.0 * n2 - 15.0 + (6.0 * n1 + n2 - 12.0) * ks.cos())
                * half_sin_sq
                / (3.0 * (n1 - 3.0))
        }
        (Row::X, Term::XA) => {
            -2.0 * h.powi(3) * (3.0 - 3.0 * n1 - n2 + (6.0 * n1 + n2 - 12.0) * ks.cos())
                * ks.sin()
                / (3.0 * k_cubed)
        }
        (Row::X, Term::AA) => {
            -4.0 * (3.0 - 3.0 * n1 - n2 + (6.0 * n1 + n2 - 12.0) * ks.cos()) * half_sin_sq
                / (3.0 * h * (n1 - 3.0).powi(2))
        }
        (Row::A, Term::X) => -k * ks.sin(),
        (Row::A, Term::A) => ks.cos(),
        (Row::A, Term::XX) => {
            2.0 * h.powi(3) * (3.0 * n1 + n2 - 3.0) * (ks.sin() + (2.0 * ks).sin()) / (3.0 * k)
        }
        (Row::A, Term::XA) => {
            -4.0 * h * (3.0 * n1 + n2 - 3.0) * (1.0 + 2.0 * ks.cos()) * half_sin_sq
                / (3.0 * (n1 - 3.0))
        }
        (Row::A, Term::AA) => {
            -2.0 * h.powi(3)
                * (15.0 - 9.0 * n1 - 2.0 * n2 + 2.0 * (3.0 * n1 + n2 - 3.0) * ks.cos())
                * ks.sin()
                / (3.0 * k_cubed)
        }
    }
}
