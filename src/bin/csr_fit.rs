// src/bin/csr_fit.rs - Power-law fit over an x/y column pair of a results
// CSV (e.g. CSR versus number of cycles to liquefaction).

use clap::Parser;
use csv::{ReaderBuilder, WriterBuilder};
use deckgen::powerfit::power_fit;
use std::path::PathBuf;

#[derive(Parser)]
struct Cli {
    /// Input CSV with a header row
    #[arg(long)]
    input: PathBuf,

    /// Header of the x column, e.g. numCycles
    #[arg(long)]
    x_col: String,

    /// Header of the y column, e.g. CSR
    #[arg(long)]
    y_col: String,

    /// Number of points on the fitted curve
    #[arg(long, default_value = "50")]
    points: usize,

    /// Output CSV for the fitted curve
    #[arg(long, default_value = "power_fit.csv")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(&args.input)?;
    let headers = rdr.headers()?.clone();
    let x_idx = headers
        .iter()
        .position(|h| h == args.x_col)
        .ok_or_else(|| format!("no column '{}' in {}", args.x_col, args.input.display()))?;
    let y_idx = headers
        .iter()
        .position(|h| h == args.y_col)
        .ok_or_else(|| format!("no column '{}' in {}", args.y_col, args.input.display()))?;

    let mut samples: Vec<(f64, f64)> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        samples.push((record[x_idx].parse()?, record[y_idx].parse()?));
    }

    let fit = power_fit(&samples, args.points)?;
    println!("y = A * x^b over {} samples", samples.len());
    println!("  exponent  b = {:.6}", fit.exponent);
    println!("  amplitude A = {:.6}", fit.amplitude);

    let mut wtr = WriterBuilder::new().from_path(&args.output)?;
    wtr.write_record([args.x_col.as_str(), "fit"])?;
    for (xi, yi) in fit.x.iter().zip(&fit.y) {
        wtr.write_record([xi.to_string(), yi.to_string()])?;
    }
    wtr.flush()?;

    println!("Fitted curve → {}", args.output.display());
    Ok(())
}
