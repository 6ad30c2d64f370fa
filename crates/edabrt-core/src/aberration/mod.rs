//! Closed-form aberration coefficients.
//!
//! The transfer map of a deflector has three analytic solution families,
//! selected by the sign of `3 − n1`:
//!
//! - [`Regime::Oscillatory`] for `n1 < 3`, with wavenumber `k = h·√(3 − n1)`;
//! - [`Regime::Hyperbolic`] for `n1 > 3`, with `k = h·√(n1 − 3)`;
//! - [`Regime::Degenerate`] for `n1 = 3`, where the map is polynomial in `s`.
//!
//! Every regime tabulates the ten coefficients of [`Row`] × [`Term`]. Any
//! other monomial has coefficient exactly zero.

mod degenerate;
mod hyperbolic;
mod oscillatory;

use log::{debug, trace};

use crate::types::{DeflectorParameters, Row, Term};

/// Source of aberration coefficients addressed by raw exponent tuples.
///
/// The reporter only talks to this trait, so any model (or a recording
/// stand-in) can be enumerated.
pub trait AberrationModel {
    /// Coefficient of the monomial with the given exponents in the
    /// expansion of `row`. Exponent tuples without a tabulated coefficient
    /// evaluate to `0.0`.
    fn coefficient_for(&self, row: Row, exponents: &[usize]) -> f64;
}

/// Analytic solution family of the deflector equations of motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    /// `n1 < 3`: trigonometric solutions.
    Oscillatory { k: f64 },
    /// `n1 > 3`: hyperbolic solutions.
    Hyperbolic { k: f64 },
    /// `n1 = 3`: polynomial solutions.
    Degenerate,
}

impl Regime {
    /// Pick the regime for a first order inhomogeneity `n1` and orbit
    /// curvature `h`.
    pub fn select(n1: f64, h: f64) -> Self {
        if n1 < 3.0 {
            Regime::Oscillatory { k: h * (3.0 - n1).sqrt() }
        } else if n1 > 3.0 {
            Regime::Hyperbolic { k: h * (n1 - 3.0).sqrt() }
        } else {
            Regime::Degenerate
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Regime::Oscillatory { .. } => "oscillatory",
            Regime::Hyperbolic { .. } => "hyperbolic",
            Regime::Degenerate => "degenerate",
        }
    }
}

/// An electrostatic deflector with its derived orbit quantities.
#[derive(Debug, Clone, Copy)]
pub struct Deflector {
    params: DeflectorParameters,
    /// Arc length of the reference orbit.
    s: f64,
    /// Curvature of the reference orbit.
    h: f64,
    regime: Regime,
}

impl Deflector {
    pub fn new(params: DeflectorParameters) -> Self {
        let s = params.arc_length();
        let h = params.curvature();
        let regime = Regime::select(params.n1(), h);
        debug!(
            "Deflector r={} ang={} n1={} n2={}: {} regime, s={:.6e}, h={:.6e}",
            params.radius(),
            params.angle_degrees(),
            params.n1(),
            params.n2(),
            regime.name(),
            s,
            h
        );
        Self { params, s, h, regime }
    }

    pub fn params(&self) -> &DeflectorParameters {
        &self.params
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn arc_length(&self) -> f64 {
        self.s
    }

    pub fn curvature(&self) -> f64 {
        self.h
    }

    /// Coefficient of `term` in the expansion of the final `row` coordinate.
    pub fn coefficient(&self, row: Row, term: Term) -> f64 {
        let value = match self.regime {
            Regime::Oscillatory { k } => oscillatory::coefficient(self, k, row, term),
            Regime::Hyperbolic { k } => hyperbolic::coefficient(self, k, row, term),
            Regime::Degenerate => degenerate::coefficient(self, row, term),
        };
        trace!("{}{:?} = {:e}", row, term, value);
        value
    }
}

impl AberrationModel for Deflector {
    fn coefficient_for(&self, row: Row, exponents: &[usize]) -> f64 {
        match Term::from_exponents(exponents) {
            Some(term) => self.coefficient(row, term),
            None => 0.0,
        }
    }
}

/// Evaluate a single aberration coefficient.
pub fn evaluate(params: &DeflectorParameters, row: Row, term: Term) -> f64 {
    Deflector::new(*params).coefficient(row, term)
}
