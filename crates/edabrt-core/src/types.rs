//! Core types shared by the evaluator and the reporter.

use std::fmt;

use crate::error::ParameterError;

/// Physical parameters of an electrostatic deflector.
///
/// Construct through [`DeflectorParameters::new`], which guarantees a
/// strictly positive radius and finite values everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeflectorParameters {
    radius: f64,
    angle_degrees: f64,
    n1: f64,
    n2: f64,
}

impl DeflectorParameters {
    /// Validate and bundle the four deflector parameters.
    ///
    /// # Arguments
    /// * `radius` - Reference orbit radius in metres.
    /// * `angle_degrees` - Central angle spanned by the deflector in degrees.
    /// * `n1` - First order field inhomogeneity coefficient.
    /// * `n2` - Second order field inhomogeneity coefficient.
    pub fn new(radius: f64, angle_degrees: f64, n1: f64, n2: f64) -> Result<Self, ParameterError> {
        for (name, value) in [
            ("radius", radius),
            ("angle_degrees", angle_degrees),
            ("n1", n1),
            ("n2", n2),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }
        if radius <= 0.0 {
            return Err(ParameterError::NonPositiveRadius(radius));
        }
        Ok(Self { radius, angle_degrees, n1, n2 })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    pub fn n1(&self) -> f64 {
        self.n1
    }

    pub fn n2(&self) -> f64 {
        self.n2
    }

    /// Arc length of the reference orbit through the deflector (m).
    pub fn arc_length(&self) -> f64 {
        self.radius * (std::f64::consts::PI / 180.0) * self.angle_degrees
    }

    /// Curvature of the reference orbit (1/m).
    pub fn curvature(&self) -> f64 {
        1.0 / self.radius
    }
}

/// Output phase-space coordinate whose expansion is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    /// Horizontal position x.
    X,
    /// Horizontal angle a.
    A,
}

impl Row {
    /// Both rows, in report order.
    pub const ALL: [Row; 2] = [Row::X, Row::A];

    /// 1-based index of the coordinate in the x-a plane.
    pub fn index(self) -> usize {
        match self {
            Row::X => 1,
            Row::A => 2,
        }
    }

    /// Heading used for this row in the printed report.
    pub fn label(self) -> &'static str {
        match self {
            Row::X => "(x|...)",
            Row::A => "(a|...)",
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A monomial of initial coordinates with a tabulated coefficient.
///
/// The variant name spells the monomial: `XA` is x·a, `AA` is a².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    X,
    A,
    XX,
    XA,
    AA,
}

impl Term {
    /// Every term, in enumeration order.
    pub const ALL: [Term; 5] = [Term::X, Term::A, Term::XX, Term::XA, Term::AA];

    /// Look up the term with the given (x, a) exponents.
    ///
    /// Returns `None` for any tuple that is not exactly two exponents of
    /// total order one or two.
    pub fn from_exponents(exponents: &[usize]) -> Option<Term> {
        match exponents {
            [1, 0] => Some(Term::X),
            [0, 1] => Some(Term::A),
            [2, 0] => Some(Term::XX),
            [1, 1] => Some(Term::XA),
            [0, 2] => Some(Term::AA),
            _ => None,
        }
    }

    /// Exponents of (x, a) in this monomial.
    pub fn exponents(self) -> [usize; 2] {
        match self {
            Term::X => [1, 0],
            Term::A => [0, 1],
            Term::XX => [2, 0],
            Term::XA => [1, 1],
            Term::AA => [0, 2],
        }
    }

    pub fn order(self) -> usize {
        self.exponents().iter().sum()
    }
}
