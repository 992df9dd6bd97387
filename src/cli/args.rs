//! Command-line argument parsing for the MindWell client.

use crate::ui::theme::Skin;

/// Overrides for a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub backend_url: Option<String>,
    pub skin: Option<Skin>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Arguments could not be parsed
    Invalid(String),
    /// Run the TUI application (default)
    Run(RunOptions),
}

/// Parse command-line arguments. The first item is the program name.
///
/// Flags take their value either as the next argument or after `=`.
/// Unknown flags are ignored.
///
/// ```
/// use mindwell::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["mindwell".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--backend-url" => match inline.or_else(|| args.next()) {
                Some(url) if !url.trim().is_empty() => options.backend_url = Some(url),
                _ => return CliCommand::Invalid("--backend-url requires a URL".to_string()),
            },
            "--skin" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid("--skin requires flat or glass".to_string());
                };
                match value.parse::<Skin>() {
                    Ok(skin) => options.skin = Some(skin),
                    Err(e) => return CliCommand::Invalid(e),
                }
            }
            _ => {}
        }
    }
    CliCommand::Run(options)
}
