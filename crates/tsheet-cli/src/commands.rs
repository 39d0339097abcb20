use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use tsheet_diff::{Comparator, NormalizationPolicy};
use tsheet_protocol::ComparisonReport;
use tsheet_server::{TsheetConfig, TsheetServer};
use tsheet_types::FieldSet;

use crate::cli::*;
use crate::render::render_table;

/// Run a parsed command and return the process exit code.
pub fn run_command(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Command::Compare(args) => cmd_compare(args),
        Command::Serve(args) => cmd_serve(args).map(|()| 0),
        Command::Config(args) => cmd_config(args).map(|()| 0),
    }
}

fn cmd_compare(args: CompareArgs) -> anyhow::Result<i32> {
    let (report, identical) = compare_files(&args)?;
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render_table(&report, args.only_differences)),
    }
    if args.fail_on_difference && !identical {
        tracing::debug!(
            differences = report.summary.differences(),
            "differences found, exiting with status 1"
        );
        return Ok(1);
    }
    Ok(0)
}

fn compare_files(args: &CompareArgs) -> anyhow::Result<(ComparisonReport, bool)> {
    if is_stdin(&args.ideal) && is_stdin(&args.input) {
        bail!("only one of the two field sets can be read from stdin");
    }
    let ideal = read_field_set(&args.ideal)?;
    let input = read_field_set(&args.input)?;

    let policy = if args.strict {
        NormalizationPolicy::strict()
    } else {
        NormalizationPolicy::default()
    };
    let comparator = Comparator::new(policy);
    let result = comparator.compare(Some(&ideal), Some(&input))?;
    let identical = result.is_identical();

    let mut report = ComparisonReport::new(ideal, input, result);
    if args.highlights {
        report = report.with_highlights(comparator.policy());
    }
    Ok((report, identical))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_field_set(path: &Path) -> anyhow::Result<FieldSet> {
    let text = if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read field set from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid field set", path.display()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<TsheetConfig> {
    match path {
        Some(path) => TsheetConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(TsheetConfig::default()),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    let server = TsheetServer::new(config)?;
    println!(
        "{} tsheet server on {}",
        "✓".green().bold(),
        server.config().server.bind_addr.to_string().bold()
    );
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_toml()?);
    Ok(())
}
