//! `gql-json` CLI — coerce GraphQL value literals to JSON and back.
//!
//! ## Usage
//!
//! ```sh
//! # Literal text → pretty-printed JSON (stdin → stdout)
//! echo '{ name: "Alice", tags: [1, 2] }' | gql-json parse
//!
//! # From file to file, compact output
//! gql-json parse -i arg.graphql -o arg.json --compact
//!
//! # JSON → literal text, ready to paste into a query
//! gql-json print -i data.json
//!
//! # Check that a literal is representable as JSON
//! echo '{ color: RED }' | gql-json check
//!
//! # Log rejected literals (or set RUST_LOG)
//! gql-json -v check -i arg.graphql
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gql-json",
    version,
    about = "GraphQL JSON scalar literal CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log coercion details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Coerce a GraphQL value literal into JSON
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit minified JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print a JSON document as a GraphQL value literal
    Print {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that a GraphQL value literal is representable as JSON
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse {
            input,
            output,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let value = graphql_json::coerce_str(&text)
                .context("Failed to coerce literal to JSON")?;
            let json = if compact {
                serde_json::to_string(&value)?
            } else {
                serde_json::to_string_pretty(&value)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Print { input, output } => {
            let text = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&text).context("Failed to parse JSON input")?;
            let literal = graphql_json::print_value(&value)
                .context("Failed to print JSON as a literal")?;
            write_output(output.as_deref(), &literal)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let literal = graphql_json::parse_literal_str(&text)
                .context("Failed to parse literal")?;
            graphql_json::parse_literal(&literal).context("Literal is not valid JSON")?;
            println!("ok: {}", literal.kind());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
