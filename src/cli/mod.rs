//! CLI module for the Floorp portal
//!
//! Without a subcommand the binary opens the download window. Subcommands
//! expose the same release lookup and link building headlessly.

mod commands;
mod output;

use clap::{Parser, Subcommand};

use crate::platform::Platform;

pub use output::OutputFormat;

/// Floorp Portal - download the Floorp browser
#[derive(Parser, Debug)]
#[command(name = "floorp-portal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the latest release
    Release,

    /// Print download links for every platform
    Links {
        /// Release tag to link to instead of the latest release
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show which platform tab the page would open on
    Detect {
        /// Environment string to detect from (defaults to this host)
        #[arg(long)]
        env: Option<String>,
    },

    /// List package manager install commands
    #[command(name = "commands")]
    Packages {
        /// Only show commands for this platform
        #[arg(long, value_enum)]
        platform: Option<Platform>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run a subcommand
pub async fn run(command: Commands, output: &OutputOptions) -> anyhow::Result<()> {
    let format = output.format();
    let quiet = output.quiet;

    match command {
        Commands::Release => commands::release::run(format).await,
        Commands::Links { tag } => commands::links::run(tag, format).await,
        Commands::Detect { env } => commands::detect::run(env, format),
        Commands::Packages { platform } => commands::packages::run(platform, format),
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_opens_window() {
        let cli = Cli::try_parse_from(["floorp-portal"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output.format(), OutputFormat::Text);
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["floorp-portal", "links", "--tag", "v11.0", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Links { tag: Some(ref t) }) if t == "v11.0"));
        assert_eq!(cli.output.format(), OutputFormat::Json);

        let cli = Cli::try_parse_from(["floorp-portal", "commands", "--platform", "mac"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Packages { platform: Some(Platform::Mac) })
        ));

        let cli = Cli::try_parse_from(["floorp-portal", "-q", "config", "path"]).unwrap();
        assert!(cli.output.quiet);
        assert!(matches!(cli.command, Some(Commands::Config { .. })));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
