use clap::Parser;

use std::io::{self, Write};
use std::process::exit;

use assess_barcodes::*;

#[derive(Parser)]
#[command(name = "assess-barcodes")]
#[command(about = "Tabulate barcode IDs per sample to inspect cross-sample leakage", long_about = None)]
#[command(version)]
struct Cli {
    /// Interleaved paired-end fastq files, one per sample
    #[arg(value_name = "FASTQ", required = true)]
    files: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli.files) {
        eprintln!("Error: {e}");
        exit(1);
    }
}

fn run(files: &[String]) -> Result<()> {
    let table = SampleTable::assess_files(files)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    table
        .write_matrix(&mut out)
        .and_then(|_| out.flush())
        .map_err(Error::Output)
}
