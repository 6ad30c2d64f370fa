//! edabrt command-line interface.
//!
//! Print the first and second order x-a plane aberrations of an
//! electrostatic deflector:
//! ```sh
//! edabrt 1.0 30.0 1.5 0.5   # r ang n1 n2
//! edabrt                    # prompt for each parameter
//! ```

mod config;
mod runner;

use std::io::{self, Write};

use clap::{CommandFactory, Parser};

const PARAMETER_HELP: &str = "\
Run without arguments to be prompted for each deflector parameter.

Arguments:
    r       Reference orbit radius in meters
    ang     Central angle spanning the deflector in degrees
    n1      First order electrostatic field inhomogeneity coefficient
    n2      Second order electrostatic field inhomogeneity coefficient";

#[derive(Parser)]
#[command(name = "edabrt")]
#[command(about = "Electrostatic Deflector Aberrations")]
#[command(
    long_about = "Computes the first and second order aberrations of an electrostatic \
                  deflector in the horizontal x-a plane using exact analytic formulas."
)]
#[command(after_help = PARAMETER_HELP)]
#[command(version)]
struct Cli {
    /// Deflector parameters in the order: r ang n1 n2.
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner::write_banner(&mut out)?;

    if std::env::args().nth(1).as_deref() == Some("/h") {
        out.flush()?;
        Cli::command().print_long_help()?;
        return Ok(());
    }
    let cli = Cli::parse();

    writeln!(out)?;
    let params = if cli.values.is_empty() {
        log::debug!("No arguments supplied, entering interactive mode");
        let stdin = io::stdin();
        config::prompt_parameters(&mut stdin.lock(), &mut out)
    } else {
        config::from_arguments(&cli.values).and_then(|params| {
            runner::write_parameters(&mut out, &params)?;
            Ok(params)
        })
    }
    .map_err(|e| anyhow::anyhow!("edabrt: {}\nTry 'edabrt --help' for more information.", e))?;

    runner::write_report(&mut out, &params)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_accepts_negative_values() {
        let cli = Cli::try_parse_from(["edabrt", "1.0", "30", "-1.5", "-0.5"]).unwrap();
        assert_eq!(cli.values, vec!["1.0", "30", "-1.5", "-0.5"]);
    }

    #[test]
    fn test_cli_without_values() {
        let cli = Cli::try_parse_from(["edabrt"]).unwrap();
        assert!(cli.values.is_empty());
    }

    #[test]
    fn test_cli_help_flags() {
        for flag in ["-h", "--help"] {
            let err = Cli::try_parse_from(["edabrt", flag]).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
