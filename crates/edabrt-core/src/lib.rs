//! # edabrt Core
//!
//! Exact analytic first and second order aberrations of an electrostatic
//! deflector in the horizontal x-a plane.
//!
//! ## Architecture
//!
//! A [`aberration::Deflector`] is built from validated
//! [`types::DeflectorParameters`] and selects one of three analytic
//! [`aberration::Regime`]s from the first order inhomogeneity coefficient.
//! The [`report`] module walks every monomial of order one and two (see
//! [`monomial::Monomials`]) against any [`aberration::AberrationModel`] and
//! renders the non-zero coefficients as a text table.
//!
//! ## Modules
//!
//! - [`types`] — Deflector parameters, output rows and monomial terms.
//! - [`error`] — Parameter validation errors.
//! - [`aberration`] — Regime dispatch and the closed-form coefficients.
//! - [`monomial`] — Exponent tuple generator.
//! - [`report`] — Enumeration and text rendering.
//!
//! ## Reference
//! E. Valetov and M. Berz, *Derivation of Analytic Formulas for
//! Electrostatic Deflector Aberrations, and Comparison with the Code COSY
//! INFINITY*, MSUHEP-180212, Michigan State University (2018).

pub mod aberration;
pub mod error;
pub mod monomial;
pub mod report;
pub mod types;

pub use aberration::{evaluate, AberrationModel, Deflector, Regime};
pub use error::ParameterError;
pub use report::{render_aberrations, Report, ReportRow};
pub use types::{DeflectorParameters, Row, Term};
