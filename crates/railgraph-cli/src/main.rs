use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use railgraph::{CollectArgs, GraphOptions, RailgraphOptions, run_main};
use railgraph_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "railgraph",
    about = "railgraph: diagrams of models and their relationships",
    version
)]
pub struct Cli {
    /// Facts document (JSON); reads stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,

    #[command(flatten)]
    graph: GraphOptions,

    #[command(flatten)]
    collect: CollectArgs,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = RailgraphOptions {
        input: args.input,
        output: args.output,
        graph: args.graph,
        collect: args.collect,
    };

    let output = run_main(&opts)?;
    if let Some(ref path) = opts.output {
        std::fs::write(path, &output)?;
        tracing::info!(path = %path, "output written");
    } else {
        print!("{output}");
    }

    tracing::info!(total_secs = total_start.elapsed().as_secs_f64(), "complete");
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            if e.kind().is_input_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
