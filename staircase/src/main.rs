use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use staircase::StaircaseSearch;
use tracing_subscriber::EnvFilter;

/// Searches all staircase Toffoli ladders on six qubits for third level permutations that none
/// of the candidate maximal abelian subgroups conjugates into the Pauli group.
///
/// Prints every such selection mask in binary. Log verbosity follows `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Split the masks over a thread pool instead of checking them one by one.
    #[arg(long)]
    parallel: bool,

    /// Number of worker threads, implies --parallel.
    #[arg(long, value_name = "N")]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let search = StaircaseSearch::six_qubit();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "starting search")?;
    writeln!(stdout)?;

    let report = if cli.parallel || cli.threads.is_some() {
        if let Some(threads) = cli.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("failed to start the worker pool")?;
        }
        let report = search.run_parallel(search.masks());
        for &mask in &report.unresolved {
            writeln!(stdout, "{}", search.format(mask))?;
        }
        report
    } else {
        search.run_with(search.masks(), |mask| {
            writeln!(stdout, "{}", search.format(mask))?;
            stdout.flush()
        })?
    };

    writeln!(stdout, "search complete")?;
    if !report.is_resolved() {
        tracing::warn!(count = report.unresolved.len(), "unresolved masks found");
    }
    Ok(())
}
