// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (missing paths, unknown flags, or --help), clap
/// displays the error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
