use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use batchop::error::BopError;
use batchop::output::{
    json_response, CountResponse, DeleteResponse, ErrorResponse, ListResponse, OutputFormat,
};
use batchop::parser::{parse_command, CommandKind};
use batchop::{BatchOp, FileSet, Session};

#[derive(Parser)]
#[command(
    name = "batchop",
    version = env!("CARGO_PKG_VERSION"),
    about = "Batch filesystem operations from plain-English commands",
    after_help = COMMAND_EXAMPLES
)]
struct Cli {
    /// The command, given as plain words. With no command, batchop starts
    /// an interactive session.
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,

    /// Root directory the command operates on.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[arg(long, default_value_t = OutputFormat::Human)]
    output: OutputFormat,
}

const COMMAND_EXAMPLES: &str = "\
Examples:
  batchop list files that are not hidden
  batchop count everything
  batchop delete folders that are empty
  batchop list files bigger than 10 mb
  batchop 'list anything named *.log'
  batchop                # interactive session";

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_error(&err, cli.output);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.command.is_empty() {
        let mut session = Session::new(&cli.root)?;
        session.run()?;
        return Ok(());
    }

    let input = cli.command.join(" ");
    let parsed = parse_command(&input)?;
    let op = BatchOp::new(&cli.root, FileSet::from(parsed.filters))?;

    match parsed.kind {
        CommandKind::List => {
            let paths = op.list();
            match cli.output {
                OutputFormat::Human => {
                    for path in &paths {
                        println!("{}", path.display());
                    }
                }
                OutputFormat::Json | OutputFormat::Pretty => {
                    let total_count = paths.len() as u64;
                    let response = ListResponse {
                        command: input.clone(),
                        root: cli.root.display().to_string(),
                        paths: paths
                            .iter()
                            .map(|path| path.display().to_string())
                            .collect(),
                        total_count,
                    };
                    print_json(&json_response(response), cli.output)?;
                }
            }
        }
        CommandKind::Count => {
            let (files, folders) = op.count_detailed();
            match cli.output {
                OutputFormat::Human => println!("{} files, {} folders", files, folders),
                OutputFormat::Json | OutputFormat::Pretty => {
                    let response = CountResponse {
                        command: input.clone(),
                        root: cli.root.display().to_string(),
                        files,
                        folders,
                        total_count: files + folders,
                    };
                    print_json(&json_response(response), cli.output)?;
                }
            }
        }
        CommandKind::Delete => {
            let removed = op.delete()?;
            match cli.output {
                OutputFormat::Human => println!("Removed {} entries", removed),
                OutputFormat::Json | OutputFormat::Pretty => {
                    let response = DeleteResponse {
                        command: input.clone(),
                        root: cli.root.display().to_string(),
                        removed,
                    };
                    print_json(&json_response(response), cli.output)?;
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        _ => serde_json::to_string(value)?,
    };
    println!("{}", rendered);
    Ok(())
}

fn report_error(err: &anyhow::Error, format: OutputFormat) {
    match (format, err.downcast_ref::<BopError>()) {
        (OutputFormat::Human, Some(bop)) => {
            eprintln!("Error [{}]: {}", bop.error_code(), bop);
            if let Some(hint) = bop.remediation() {
                eprintln!("  {}", hint);
            }
        }
        (OutputFormat::Human, None) => eprintln!("Error: {:#}", err),
        (OutputFormat::Json | OutputFormat::Pretty, bop) => {
            let response = json_response(match bop {
                Some(bop) => ErrorResponse::from_error(bop),
                None => ErrorResponse {
                    code: "BOP-E999".to_string(),
                    error: "internal".to_string(),
                    severity: "error".to_string(),
                    message: format!("{:#}", err),
                    remediation: None,
                },
            });
            let rendered = match format {
                OutputFormat::Pretty => serde_json::to_string_pretty(&response),
                _ => serde_json::to_string(&response),
            }
            .unwrap_or_default();
            println!("{}", rendered);
        }
    }
}
