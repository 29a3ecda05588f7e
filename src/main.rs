use std::process::ExitCode;

use calculator::{
    calculate,
    util::logging::{LogConfig, init_logging, report_failure},
};
use clap::Parser;

/// calculator evaluates a single `<operand> <operator> <operand>` expression
/// using one of `+`, `-`, `*` or `/`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the parsed calculation to standard error before the result.
    #[arg(short, long)]
    verbose: bool,

    /// Omits the timestamp from error lines.
    #[arg(long)]
    no_timestamp: bool,

    /// The left operand, e.g. `2.5`.
    #[arg(allow_hyphen_values = true)]
    operand1: String,

    /// One of `+`, `-`, `*` or `/`.
    #[arg(allow_hyphen_values = true)]
    operator: String,

    /// The right operand, e.g. `-2`.
    #[arg(allow_hyphen_values = true)]
    operand2: String,
}

impl Args {
    fn log_config(&self) -> LogConfig {
        match (self.verbose, self.no_timestamp) {
            (false, false) => LogConfig::default(),
            (false, true) => LogConfig::plain(),
            (true, no_timestamp) => LogConfig { timestamps: !no_timestamp,
                                                ..LogConfig::verbose() },
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_config()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match calculate(&args.operand1, &args.operator, &args.operand2) {
        Ok(calculation) => {
            log::debug!("{calculation:?}");
            println!("{calculation}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::debug!("{e:?}");
            report_failure(&e);
            ExitCode::FAILURE
        },
    }
}
