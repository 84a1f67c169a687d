use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};

use mirrortext::parallel_processing::{
    process_inputs_parallel, write_stats_file, BatchConfig, InputText, PalindromeReport,
};
use mirrortext::reader::{AsyncFileReader, ReaderConfig};

/// Demonstration passage searched when no input is given
const SAMPLE_TEXT: &str = "On a warm day in a quiet town, Eve saw her reflection in a lake. 'Wow', she whispered.
Bob, her friend, laughed. No lemon, no melon - he exclaimed.
Eve smiled. Radar shows that level of calm.
Later, she walked by the racecar parked by the street,
noting the sign: \"A man, a plan, a canal, Panama\".
As they strolled back, she spotted an owl.
Eve knew some things could only be seen in reverse.";

#[derive(Parser, Debug)]
#[command(name = "mirrortext")]
#[command(about = "Find the longest palindrome in prose, keeping its original formatting")]
#[command(version)]
struct Args {
    /// Text files to search; each file is one text
    inputs: Vec<PathBuf>,

    /// Search this text as well
    #[arg(long)]
    text: Option<String>,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Print one JSON report per input instead of plain lines
    #[arg(long)]
    json: bool,

    /// Write all reports to this JSON file
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = 8192)]
    buffer_size: usize,

    /// Emit debug-level logs
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: structured JSON logs on stderr keep stdout for results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Starting mirrortext");
    info!(?args, "Parsed CLI arguments");

    let reader = AsyncFileReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        buffer_size: args.buffer_size,
    });

    let mut inputs = Vec::new();
    let mut unreadable = Vec::new();

    for (content, stats) in reader.read_files_batch(&args.inputs).await? {
        match stats.read_error {
            Some(error) => unreadable.push(PalindromeReport::failed(stats.file_path, error)),
            None => inputs.push(InputText::new(stats.file_path, content)),
        }
    }

    if let Some(text) = args.text {
        inputs.push(InputText::new("<inline>", text));
    }

    if inputs.is_empty() && unreadable.is_empty() {
        info!("No input given, searching the built-in sample");
        inputs.push(InputText::new("<sample>", SAMPLE_TEXT));
    }

    let batch_config = BatchConfig { fail_fast: args.fail_fast };
    let mut reports = unreadable;
    reports.extend(process_inputs_parallel(inputs, &batch_config).await?);

    for report in &reports {
        if args.json {
            println!("{}", serde_json::to_string(report)?);
        } else if report.is_success() {
            println!("{}", report.display_line());
        } else {
            eprintln!("{}", report.display_line());
        }
    }

    if let Some(ref stats_path) = args.stats_out {
        write_stats_file(stats_path, &reports).await?;
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} inputs failed", reports.len());
    }

    Ok(())
}
