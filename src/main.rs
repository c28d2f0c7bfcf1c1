use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use clap::Parser;

use iisparse::cli::{Cli, OutputFormat};
use iisparse::{group_by_client_ip, render, LogRecord, ParseError, ParserSession};

fn main() {
    if let Err(e) = run() {
        eprintln!("iisparse: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut session = ParserSession::open(&cli.file)?.with_error_strategy(cli.on_error);

    // Progress lines only make sense for chunked reads on a terminal;
    // bulk mode finishes in one call.
    let show_progress = !cli.quiet && !session.is_bulk_mode() && io::stdout().is_terminal();

    let mut logs: Vec<LogRecord> = Vec::new();
    while session.is_active() {
        let batch = session.read_next()?;
        logs.extend(batch);

        if show_progress {
            match session.estimate_progress(&logs) {
                Ok(percentage) => println!("Percentage of logs processed: {}%", percentage),
                Err(e @ ParseError::ProgressEstimation { .. }) => eprintln!("iisparse: {}", e),
                Err(e) => return Err(e.into()),
            }
        }
    }
    session.close();

    if show_progress {
        println!("Percentage of logs processed: 100%");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.output_format {
        OutputFormat::Jsonl => {
            for record in &logs {
                serde_json::to_writer(&mut out, record)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Report => {
            let groups = group_by_client_ip(&logs);
            render(&mut out, &groups, !cli.no_resolve)?;
        }
    }

    if cli.stats {
        eprintln!("{}", session.stats().format_stats());
    }

    Ok(())
}
