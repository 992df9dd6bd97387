//! CLI module for the MindWell client.
//!
//! Called early in `main()` so `--version` and `--help` exit before the
//! terminal is touched:
//!
//! ```ignore
//! use mindwell::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let options = match run_cli_command(command) {
//!     Ok(options) => options,
//!     Err(code) => std::process::exit(code),
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_version_command, VERSION};

pub const USAGE: &str = "\
MindWell terminal client

Usage: mindwell [OPTIONS]

Options:
      --backend-url <URL>  Backend base URL [env: MINDWELL_BACKEND_URL] [default: http://localhost:8001]
      --skin <SKIN>        Colour skin: flat or glass [env: MINDWELL_SKIN]
  -V, --version            Print version
  -h, --help               Print help

Environment:
  MINDWELL_LOG_FILE        Log file path
  MINDWELL_LOG             Log filter (default: info)";

/// Handle commands that finish without starting the TUI.
///
/// Returns the run options for `Run`; `Err(code)` when the process should
/// exit with that status instead. `Version` never returns.
pub fn run_cli_command(command: CliCommand) -> Result<RunOptions, i32> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Err(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            Err(2)
        }
        CliCommand::Run(options) => Ok(options),
    }
}
