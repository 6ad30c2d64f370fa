//! Acquisition of the four deflector parameters, either from the command
//! line or from interactive prompts.

use std::io::{self, BufRead, Write};

use edabrt_core::{DeflectorParameters, ParameterError};
use thiserror::Error;

/// Number of values expected on the command line: r, ang, n1, n2.
pub const PARAMETER_COUNT: usize = 4;

/// Problems with user-supplied parameters.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid option -- {0}")]
    InvalidOption(String),

    #[error("supplied radius r is not positive")]
    NonPositiveRadius,

    #[error("4 numerical arguments expected, {0} supplied")]
    ArgumentCount(usize),

    #[error("input ended before all parameters were entered")]
    UnexpectedEof,

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parse `r ang n1 n2` from command-line values.
///
/// Values are checked in order, so a malformed radius is reported before a
/// malformed angle. With the wrong number of values, any non-numeric value
/// is reported ahead of the count mismatch.
pub fn from_arguments(values: &[String]) -> Result<DeflectorParameters, InputError> {
    let parse = |value: &String| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| InputError::InvalidOption(value.clone()))
    };

    if values.len() != PARAMETER_COUNT {
        for value in values {
            parse(value)?;
        }
        return Err(InputError::ArgumentCount(values.len()));
    }

    let radius = parse(&values[0])?;
    if radius <= 0.0 {
        return Err(InputError::NonPositiveRadius);
    }
    let angle = parse(&values[1])?;
    let n1 = parse(&values[2])?;
    let n2 = parse(&values[3])?;

    Ok(DeflectorParameters::new(radius, angle, n1, n2)?)
}

/// Prompt for each parameter in turn until a valid value is entered.
pub fn prompt_parameters<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<DeflectorParameters, InputError> {
    let radius = prompt_value(
        input,
        output,
        "Please enter the reference orbit radius r in [m].",
        |r| (r <= 0.0).then_some("The radius must be positive."),
    )?;
    let angle = prompt_value(
        input,
        output,
        "Please enter the central angle ang spanning the deflector in [°].",
        |_| None,
    )?;
    let n1 = prompt_value(
        input,
        output,
        "Please enter the first order inhomogeneity coefficient n1.",
        |_| None,
    )?;
    let n2 = prompt_value(
        input,
        output,
        "Please enter the second order inhomogeneity coefficient n2.",
        |_| None,
    )?;

    Ok(DeflectorParameters::new(radius, angle, n1, n2)?)
}

/// Ask once per line until `reject` accepts a finite number.
fn prompt_value<R, W, F>(input: &mut R, output: &mut W, prompt: &str, reject: F) -> Result<f64, InputError>
where
    R: BufRead,
    W: Write,
    F: Fn(f64) -> Option<&'static str>,
{
    let mut line = String::new();
    loop {
        write!(output, "{}\n> ", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof);
        }

        let value = line
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<f64>().ok())
            .filter(|v| v.is_finite());
        match value {
            None => writeln!(output, "Not a numerical value.")?,
            Some(v) => match reject(v) {
                Some(reason) => writeln!(output, "{}", reason)?,
                None => return Ok(v),
            },
        }
    }
}
