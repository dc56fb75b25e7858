//! Jasp CLI entry point.

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jasp_es::Statement;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

#[derive(Parser)]
#[command(name = "jasp")]
#[command(about = "Jasp to JavaScript compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream as JSON
    Tokens {
        /// Input Jasp file (or - for stdin)
        file: String,
    },

    /// Print the parsed forms as JSON
    Parse {
        /// Input Jasp file (or - for stdin)
        file: String,
    },

    /// Compile to ESTree JSON
    Compile {
        /// Input Jasp file (or - for stdin)
        file: String,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        out: Option<String>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn read_source(file: &str) -> CliResult<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

/// Renders a pipeline error as `file:line:column: message`.
fn located(file: &str, source: &str, err: jasp_syntax::Error) -> Box<dyn std::error::Error> {
    let (line, column) = err.span().location(source);
    format!("{file}:{line}:{column}: {}", err.message()).into()
}

fn to_json(value: &impl Serialize, compact: bool) -> CliResult<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Tokens { file } => {
            let source = read_source(&file)?;
            let tokens = jasp_syntax::tokenize(&source).map_err(|err| located(&file, &source, err))?;
            debug!(tokens = tokens.len(), "tokenized {}", file);
            println!("{}", to_json(&tokens, false)?);
        }

        Commands::Parse { file } => {
            let source = read_source(&file)?;
            let forms = jasp_syntax::parse(&source).map_err(|err| located(&file, &source, err))?;
            debug!(forms = forms.len(), "parsed {}", file);
            println!("{}", to_json(&forms, false)?);
        }

        Commands::Compile { file, out, compact } => {
            let source = read_source(&file)?;
            let program = jasp_compiler::compile(&source).map_err(|err| located(&file, &source, err))?;
            let json = to_json(&Statement::from(program), compact)?;

            if let Some(out_path) = out {
                std::fs::write(&out_path, &json)?;
                info!("Wrote: {}", out_path);
            } else {
                println!("{}", json);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only JSON.
    let filter = match "jasp=info".parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
