use barcode_names::utils::error::Result;
use barcode_names::utils::logger;
use barcode_names::{convert_batch, BatchConversion};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// Exit status when a candidate is not a barcode.
const INVALID_INPUT_EXIT_CODE: i32 = 2;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Tsv,
}

#[derive(Parser)]
#[command(name = "barcode-convert")]
#[command(about = "Convert barcode agent names to given names without running the service")]
struct Args {
    /// Barcodes to convert; read one per line from stdin when omitted
    barcodes: Vec<String>,

    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Row<'a> {
    input: &'a str,
    barcode_name: &'a str,
    given_name: &'a str,
    integer_value: u16,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose, Some("warn"));

    let candidates = if args.barcodes.is_empty() {
        read_candidates(io::stdin().lock())?
    } else {
        args.barcodes
    };
    tracing::debug!("Converting {} barcodes", candidates.len());

    let batch = match convert_batch(&candidates) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(INVALID_INPUT_EXIT_CODE);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &batch)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_delimited(&mut out, &batch, b',')?,
        OutputFormat::Tsv => write_delimited(&mut out, &batch, b'\t')?,
    }

    Ok(())
}

fn read_candidates<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            candidates.push(line.to_string());
        }
    }
    Ok(candidates)
}

fn write_delimited<W: Write>(out: W, batch: &BatchConversion, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    for (input, result) in batch.iter() {
        writer.serialize(Row {
            input,
            barcode_name: &result.barcode_name,
            given_name: &result.given_name,
            integer_value: result.integer_value.value(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
