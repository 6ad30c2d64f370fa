//! Enumeration of non-zero aberrations and their text rendering.
//!
//! A [`Report`] walks every monomial of order one up to the maximum order,
//! keeps the non-zero coefficients as numbered [`ReportRow`]s and renders
//! them as a fixed-layout table:
//!
//! ```text
//! (x|...)
//!      I  COEFFICIENT           ORDER EXPONENTS
//!      1  8.660254037844387e-01   1   1 0
//!      ...
//!      --------------------------------------
//! ```

use std::fmt;

use log::debug;

use crate::aberration::{AberrationModel, Deflector};
use crate::monomial::{Monomials, MAX_ORDER, VARIABLES};
use crate::types::{DeflectorParameters, Row};

const INDENT: &str = "     ";
const COLUMN_HEADER: &str = "I  COEFFICIENT           ORDER EXPONENTS";
const ALL_ZERO: &str = "ALL COMPONENTS ZERO";
const SEPARATOR: &str = "--------------------------------------";

/// One non-zero coefficient in a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// 1-based position among the non-zero coefficients of the report.
    pub index: usize,
    pub coefficient: f64,
    pub order: usize,
    pub exponents: Vec<usize>,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exponents = self
            .exponents
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            f,
            "{}{} {}   {}   {}",
            INDENT,
            self.index,
            format_scientific(self.coefficient),
            self.order,
            exponents
        )
    }
}

/// Non-zero aberrations of one output coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub row: Row,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Enumerate the x-a plane up to second order.
    pub fn build<M: AberrationModel + ?Sized>(model: &M, row: Row) -> Self {
        Self::build_with(model, row, VARIABLES, MAX_ORDER)
    }

    /// Enumerate every monomial of `variables` exponents with order
    /// `1..=max_order`, lowest order first.
    pub fn build_with<M: AberrationModel + ?Sized>(
        model: &M,
        row: Row,
        variables: usize,
        max_order: usize,
    ) -> Self {
        let mut rows = Vec::new();
        for order in 1..=max_order {
            for exponents in Monomials::new(variables, order) {
                let coefficient = model.coefficient_for(row, &exponents);
                if coefficient != 0.0 {
                    rows.push(ReportRow {
                        index: rows.len() + 1,
                        coefficient,
                        order,
                        exponents,
                    });
                }
            }
        }
        debug!("{}: {} non-zero coefficients up to order {}", row, rows.len(), max_order);
        Self { row, rows }
    }

    pub fn is_all_zero(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.row)?;
        if self.rows.is_empty() {
            writeln!(f, "{}{}", INDENT, ALL_ZERO)?;
        } else {
            writeln!(f, "{}{}", INDENT, COLUMN_HEADER)?;
            for row in &self.rows {
                writeln!(f, "{}", row)?;
            }
        }
        writeln!(f, "{}{}", INDENT, SEPARATOR)
    }
}

/// Render the full x-a plane aberration listing for a deflector.
pub fn render_aberrations(params: &DeflectorParameters) -> String {
    let deflector = Deflector::new(*params);
    let mut out = String::from("First and second order aberrations in the x-a plane:\n\n");
    for row in Row::ALL {
        out.push_str(&Report::build(&deflector, row).to_string());
    }
    out
}

/// Format a value in scientific notation with 15 fractional digits, a
/// sign column (blank for non-negative values) and an exponent of at least
/// two digits, e.g. ` 1.000000000000000e+00`.
pub fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        let text = if value.is_nan() {
            " nan"
        } else if value > 0.0 {
            " inf"
        } else {
            "-inf"
        };
        return format!("{:>16}", text);
    }

    let formatted = format!("{:.15e}", value);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if mantissa.starts_with('-') { "" } else { " " };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{}e{}{:02}", sign, mantissa, exponent_sign, exponent.abs())
}
