use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tsheet",
    about = "Term sheet comparison: align extracted fields and classify every difference",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two extracted field sets (JSON files)
    Compare(CompareArgs),
    /// Start the HTTP comparison service
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Field set of the ideal term sheet (`-` for stdin)
    pub ideal: PathBuf,
    /// Field set of the term sheet under review (`-` for stdin)
    pub input: PathBuf,
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
    /// Only list fields where the documents disagree
    #[arg(long)]
    pub only_differences: bool,
    /// Trim values but otherwise require an exact match
    #[arg(long)]
    pub strict: bool,
    /// Include word-level highlights for changed fields
    #[arg(long)]
    pub highlights: bool,
    /// Exit with status 1 if any field differs
    #[arg(long)]
    pub fail_on_difference: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override `server.bind_addr`
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_compare() {
        let cli = Cli::try_parse_from([
            "tsheet", "compare", "ideal.json", "input.json", "--format", "json", "--strict",
        ])
        .unwrap();
        match cli.command {
            Command::Compare(args) => {
                assert_eq!(args.ideal, PathBuf::from("ideal.json"));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.strict);
                assert!(!args.only_differences);
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn parse_serve_bind() {
        let cli = Cli::try_parse_from(["tsheet", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        match cli.command {
            Command::Serve(args) => assert_eq!(args.bind.unwrap().port(), 9000),
            _ => panic!("expected serve"),
        }
    }
}
