//! End-to-end report rendering for physical deflectors.

use approx::assert_relative_eq;

use edabrt_core::aberration::{evaluate, Deflector};
use edabrt_core::report::{format_scientific, render_aberrations, Report};
use edabrt_core::types::{DeflectorParameters, Row, Term};

fn reference_params() -> DeflectorParameters {
    DeflectorParameters::new(1.0, 30.0, 1.5, 0.5).unwrap()
}

#[test]
fn test_render_is_deterministic() {
    let first = render_aberrations(&reference_params());
    let second = render_aberrations(&DeflectorParameters::new(1.0, 30.0, 1.5, 0.5).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_reference_report_structure() {
    let text = render_aberrations(&reference_params());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "First and second order aberrations in the x-a plane:");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "(x|...)");
    assert_eq!(lines[3], "     I  COEFFICIENT           ORDER EXPONENTS");

    let separators = lines
        .iter()
        .filter(|l| **l == "     --------------------------------------")
        .count();
    assert_eq!(separators, 2);
    assert!(lines.contains(&"(a|...)"));
    assert!(!text.contains("ALL COMPONENTS ZERO"));
}

#[test]
fn test_reference_first_row_values() {
    let params = reference_params();
    let k = 1.5_f64.sqrt();
    let s = std::f64::consts::PI / 6.0;

    let report = Report::build(&Deflector::new(params), Row::X);
    assert_eq!(report.rows.len(), 5);
    assert_relative_eq!(report.rows[0].coefficient, (k * s).cos(), epsilon = 1e-14);
    assert_relative_eq!(report.rows[1].coefficient, (k * s).sin() / k, epsilon = 1e-14);

    let orders: Vec<_> = report.rows.iter().map(|r| r.order).collect();
    assert_eq!(orders, vec![1, 1, 2, 2, 2]);

    let expected_line = format!(
        "     1 {}   1   1 0",
        format_scientific(evaluate(&params, Row::X, Term::X))
    );
    assert_eq!(report.rows[0].to_string(), expected_line);
}

#[test]
fn test_degenerate_angle_row_omits_zero_term() {
    // (a|x) vanishes identically at n1 = 3, so numbering closes the gap.
    let params = DeflectorParameters::new(2.0, 45.0, 3.0, 1.0).unwrap();
    let report = Report::build(&Deflector::new(params), Row::A);
    assert_eq!(report.rows[0].exponents, vec![0, 1]);
    assert_eq!(report.rows[0].index, 1);
    assert_eq!(report.rows.len(), 4);
}

#[test]
fn test_zero_angle_collapses_to_identity() {
    let params = DeflectorParameters::new(1.0, 0.0, 3.0, 0.0).unwrap();
    let x = Report::build(&Deflector::new(params), Row::X);
    let a = Report::build(&Deflector::new(params), Row::A);
    assert_eq!(x.rows.len(), 1);
    assert_eq!(x.rows[0].exponents, vec![1, 0]);
    assert_eq!(a.rows.len(), 1);
    assert_eq!(a.rows[0].exponents, vec![0, 1]);
}
