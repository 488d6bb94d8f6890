// src/bin/deck_filter.rs - Filter simulator output files by the fields
// decoded from their names.

use clap::Parser;
use deckgen::decode::{filter_files, ExtraFilter, FileFilter};
use std::path::PathBuf;

#[derive(Parser)]
struct Cli {
    /// Files to filter; when omitted, --dir is listed instead
    #[arg(long, value_delimiter = ',')]
    files: Vec<String>,

    /// Directory to list when --files is not given
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Driver allow-list, e.g. DSS,PSC
    #[arg(long, value_delimiter = ',')]
    driver: Vec<String>,

    /// Test-goal allow-list: cyc, mono, MRD, vol, rec
    #[arg(long, value_delimiter = ',')]
    test: Vec<String>,

    /// Drainage allow-list: u, d
    #[arg(long, value_delimiter = ',')]
    drain: Vec<char>,

    /// Relative-density allow-list, e.g. 35,55,75
    #[arg(long, value_delimiter = ',')]
    density: Vec<String>,

    /// Output-tag allow-list, e.g. 3,csrN,peakPhi
    #[arg(long, value_delimiter = ',')]
    output: Vec<String>,

    /// Overburden-stress allow-list (cyc and rec tests)
    #[arg(long, value_delimiter = ',')]
    sig_vc: Vec<String>,

    /// Bias-ratio allow-list (cyc and rec tests), e.g. 0.0,0.1
    #[arg(long, value_delimiter = ',')]
    alpha: Vec<String>,

    /// Ko allow-list (cyc tests)
    #[arg(long, value_delimiter = ',')]
    ko: Vec<String>,

    /// Cycle-count allow-list (MRD and vol tests)
    #[arg(long, value_delimiter = ',')]
    ncyc: Vec<String>,

    /// Maximum-strain allow-list (MRD and vol tests), e.g. 1%,3%
    #[arg(long, value_delimiter = ',')]
    max_strain: Vec<String>,
}

impl Cli {
    /// Map the extra-field flags onto the goal-specific filter. The
    /// degradation flags win when given; sig-vc/alpha alone go to the
    /// reconsolidation check only when `--test rec` was asked for.
    fn extra_filter(&self) -> ExtraFilter {
        if !self.ncyc.is_empty() || !self.max_strain.is_empty() {
            ExtraFilter::Degradation {
                ncyc: self.ncyc.clone(),
                max_strain: self.max_strain.clone(),
            }
        } else if self.test.iter().any(|t| t == "rec") && self.ko.is_empty() {
            ExtraFilter::Reconsolidation {
                sig_vc: self.sig_vc.clone(),
                alpha: self.alpha.clone(),
            }
        } else if !self.sig_vc.is_empty() || !self.alpha.is_empty() || !self.ko.is_empty() {
            ExtraFilter::Cyclic {
                sig_vc: self.sig_vc.clone(),
                alpha: self.alpha.clone(),
                ko: self.ko.clone(),
            }
        } else {
            ExtraFilter::None
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let files = if args.files.is_empty() {
        // Only the simulator's .csv outputs follow the naming grammar;
        // anything else in the directory would trip the decoder.
        let mut names: Vec<String> = std::fs::read_dir(&args.dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".csv"))
            .collect();
        names.sort();
        names
    } else {
        args.files.clone()
    };

    let filter = FileFilter {
        driver: args.driver.clone(),
        test: args.test.clone(),
        drainage: args.drain.clone(),
        density: args.density.clone(),
        output: args.output.clone(),
        extra: args.extra_filter(),
    };

    let kept = filter_files(&files, &filter);
    for file in &kept {
        println!("{file}");
    }
    eprintln!("{} of {} files matched", kept.len(), files.len());
    Ok(())
}
