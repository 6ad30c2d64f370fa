//! Console output: banner, parameter echo and the aberration tables.

use std::io::{self, Write};

use edabrt_core::report::format_scientific;
use edabrt_core::{render_aberrations, DeflectorParameters};

const RULE: &str = "----------------------------------------------------------";

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "      edabrt: Electrostatic Deflector Aberrations")?;
    writeln!(out, "                    Version {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", RULE)
}

/// Echo parameters taken from the command line.
pub fn write_parameters<W: Write>(out: &mut W, params: &DeflectorParameters) -> io::Result<()> {
    writeln!(out, "Reference radius r = {} m", format_scientific(params.radius()))?;
    writeln!(out, "Central angle ang = {}°", format_scientific(params.angle_degrees()))?;
    writeln!(
        out,
        "1st order inhomogeneity coefficient n1 = {}",
        format_scientific(params.n1())
    )?;
    writeln!(
        out,
        "2nd order inhomogeneity coefficient n2 = {}",
        format_scientific(params.n2())
    )
}

/// Print both aberration tables, preceded by a blank line.
pub fn write_report<W: Write>(out: &mut W, params: &DeflectorParameters) -> io::Result<()> {
    writeln!(out)?;
    out.write_all(render_aberrations(params).as_bytes())?;
    out.flush()
}
