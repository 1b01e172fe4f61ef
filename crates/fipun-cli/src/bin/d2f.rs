//! Print the float whose bit pattern is the given int.

use clap::Parser;
use fipun_cli::{Exit, Program, Request, RuntimeConfig};

/// Reinterpret a 32-bit int as a float, trailing zeros trimmed.
#[derive(Debug, Parser)]
#[command(name = "d2f")]
#[command(about = "Reinterpret a 32-bit int as an IEEE-754 float")]
struct Cli {
    /// Integer to reinterpret. Read from stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    value: Option<String>,
    /// Arguments after the value are accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
    /// Reject malformed or out-of-range input instead of falling back.
    #[arg(long)]
    strict: bool,
    /// Integer radix, 2 to 36, or 0 to detect `0x`/`0` prefixes.
    #[arg(long, default_value_t = 10)]
    base: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = RuntimeConfig::from_env().with_strict_flag(cli.strict);
    let request = Request::new(Program::D2f, cli.value).with_base(cli.base);
    let exit = fipun_cli::run(&request, &config)?;
    if exit != Exit::Done {
        std::process::exit(exit.code());
    }
    Ok(())
}
