//! CLI configuration and logging setup

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::{CalcError, CalcResult};

/// tapcalc: a keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to the interactive keypad)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive keypad
    Tui {
        /// Do not capture the mouse
        #[arg(long)]
        no_mouse: bool,
    },

    /// Press a key sequence headless and print the display
    ///
    /// Every non-whitespace character presses one button, e.g. "7+3=".
    /// Aliases: * or x multiply, / divide, c clear, < delete, n sign toggle.
    Press {
        /// Keys to press, in order
        #[arg(allow_hyphen_values = true)]
        keys: String,

        /// Print the full calculator state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Effective verbosity from the -v/-q flags
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    /// The subcommand, defaulting to the interactive keypad
    #[must_use]
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Tui { no_mouse: false })
    }
}

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Informational messages
    Verbose,
    /// Every state transition
    Debug,
    /// Everything
    Trace,
}

impl Verbosity {
    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error; never used while the TUI owns the terminal
    Stderr,
    /// Append to a file
    File(PathBuf),
    /// Discard everything
    Disabled,
}

impl LogTarget {
    /// Picks the target for a command: an explicit file always wins,
    /// otherwise the TUI logs nowhere and headless runs log to stderr.
    #[must_use]
    pub fn for_command(log_file: Option<&Path>, command: &Commands) -> Self {
        match (log_file, command) {
            (Some(path), _) => Self::File(path.to_path_buf()),
            (None, Commands::Tui { .. }) => Self::Disabled,
            (None, Commands::Press { .. }) => Self::Stderr,
        }
    }
}

/// Builds the filter, letting `RUST_LOG` override the verbosity default
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global `tracing` subscriber
pub fn init_logging(verbosity: Verbosity, target: &LogTarget) -> CalcResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false);

    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| CalcError::Logging(e.to_string()))
}
