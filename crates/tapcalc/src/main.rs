//! tapcalc CLI
//!
//! ## Usage
//!
//! ```bash
//! tapcalc                      # Interactive keypad
//! tapcalc tui --no-mouse       # Keypad without mouse capture
//! tapcalc press "7+3="         # Prints 10
//! tapcalc press "5÷0=" --json  # Prints the full state
//! ```

use std::process::ExitCode;

use clap::Parser;
use tapcalc::config::{init_logging, Cli, Commands, LogTarget};
use tapcalc::core::CalculatorState;
use tapcalc::driver::CalculatorDriver;
use tapcalc::error::CalcResult;
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CalcResult<()> {
    let cli = Cli::parse();
    let command = cli.resolved_command();

    let target = LogTarget::for_command(cli.log_file.as_deref(), &command);
    init_logging(cli.verbosity(), &target)?;
    info!(?command, "starting tapcalc");

    match command {
        Commands::Tui { no_mouse } => run_tui(no_mouse),
        Commands::Press { keys, json } => run_press(&keys, json),
    }
}

#[cfg(feature = "tui")]
fn run_tui(no_mouse: bool) -> CalcResult<()> {
    tapcalc::tui::run(tapcalc::tui::TuiOptions { mouse: !no_mouse })
}

#[cfg(not(feature = "tui"))]
fn run_tui(_no_mouse: bool) -> CalcResult<()> {
    eprintln!("Interactive keypad not enabled. Rebuild with --features tui");
    Ok(())
}

fn run_press(keys: &str, json: bool) -> CalcResult<()> {
    let mut calc = CalculatorState::new();
    calc.press_keys(keys)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&calc)?);
    } else {
        println!("{}", calc.display());
    }
    Ok(())
}
