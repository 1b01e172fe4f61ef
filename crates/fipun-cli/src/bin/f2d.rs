//! Print the int whose bit pattern is the given float.

use clap::Parser;
use fipun_cli::{Exit, Program, Request, RuntimeConfig};

#[derive(Debug, Parser)]
#[command(name = "f2d")]
#[command(about = "Reinterpret an IEEE-754 float as a 32-bit int")]
struct Cli {
    /// Float to reinterpret, as accepted by `strtof`.
    #[arg(allow_hyphen_values = true)]
    value: Option<String>,
    /// Arguments after the value are accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
    /// Reject malformed or overflowing input instead of falling back.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = RuntimeConfig::from_env().with_strict_flag(cli.strict);
    let exit = fipun_cli::run(&Request::new(Program::F2d, cli.value), &config)?;
    if exit != Exit::Done {
        std::process::exit(exit.code());
    }
    Ok(())
}
