use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::OutputFormat;
use recase::engine::{convert, CaseKind};
use recase::{cli, BatchEntry, BatchResult, Config};
use std::io::{self, Read};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Normalize identifier casing (kebab, camel, dot, snake, pascal)", long_about = None)]
struct Cli {
    /// Strings to convert; reads lines from stdin when omitted
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case convention
    #[arg(short = 't', long = "to", value_name = "CASE")]
    to: Option<CaseKind>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs fail validation
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// List supported case kinds with a sample rendering
    Kinds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.to, cli.no_color)?;
    let colored = !config.no_color;

    // Handle subcommands
    if let Some(Commands::Kinds) = cli.command {
        cli::output::print_kinds(colored);
        return Ok(());
    }

    // Collect inputs: positional arguments, or stdin lines when none given
    let inputs = if cli.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        cli.inputs.clone()
    };

    if inputs.is_empty() {
        anyhow::bail!("No input given. Pass strings as arguments or pipe them on stdin.");
    }

    let kind = config.default_case;
    let mut result = BatchResult::default();

    for input in inputs {
        let outcome = convert(&input, kind);
        match &outcome {
            Ok(_) => result.converted += 1,
            Err(_) => result.failed += 1,
        }
        result.entries.push(BatchEntry { input, outcome });
    }

    cli::output::print_results(&result, kind, colored, &cli.format);
    if matches!(cli.format, OutputFormat::Text) {
        cli::output::print_summary(&result, colored);
    }

    // Exit with appropriate code
    if result.failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    // Blank lines delimit input, they are not inputs themselves
    Ok(buffer
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
