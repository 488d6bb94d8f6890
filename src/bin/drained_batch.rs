//! Drained cyclic DSS deck generator.
//!
//! Opens the header template, writes the parametrically varied inputs
//! underneath, appends the full `DSS_cyclic_drained.f2fis` driver and a
//! save-file footer, one deck per tuple. A `batch_drainedDSS_MRD.f2fis`
//! (or `batch_drainedDSS_vol.f2fis` with `volumetric` set) is produced,
//! populated by call commands for every generated deck; only the batch
//! file needs to be called from FLAC2D.
//!
//! Parameters are kept in one `Config` struct so comments never drift out
//! of sync with the executable settings. Anything held constant lives in
//! the driver itself and can be promoted to another axis array here,
//! following the same pattern.
//!
//! CAUTION: file naming is intimately tied to the post-processing and
//! plotting protocols; see the `naming` module.

use deckgen::batch::BatchWriter;
use deckgen::deck::{assemble, DeckTemplates, ParamBlock};
use deckgen::naming::{fmt_ratio, mrd_name, vol_name};
use deckgen::sweep::DrainedSweep;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Run-time configuration (single source of truth).
#[derive(Debug, Clone)]
struct Config {
    soil:          String,
    test_name:     String,
    sweep:         DrainedSweep,
    template_file: PathBuf,
    driver_file:   PathBuf,
    out_dir:       PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            soil:          String::new(),      // populate if more specific
            test_name:     "dDSS".into(),      // matches template and driver
            sweep:         DrainedSweep::default(),
            template_file: PathBuf::from("templ_drDSScyc.f2fis"),
            driver_file:   PathBuf::from("DSS_cyclic_drained.f2fis"),
            out_dir:       PathBuf::from("."),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::default();
    println!("Generating drained DSS decks with configuration:\n{cfg:#?}");

    // Both templates must be present; abort otherwise.
    let templates = DeckTemplates::load(&cfg.template_file, &cfg.driver_file)?;

    let bar = ProgressBar::new(cfg.sweep.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]",
    )?);

    let mut batch = BatchWriter::new();
    for p in cfg.sweep.tuples() {
        let base = if cfg.sweep.volumetric {
            vol_name(&cfg.test_name, &cfg.soil, p.dr, p.ncyc)
        } else {
            mrd_name(&cfg.test_name, &cfg.soil, p.dr, p.ncyc, p.strain_count)
        };

        let mut block = ParamBlock::new('_', 13);
        block.push("Dr", fmt_ratio(p.dr));
        block.push("nCycles", p.ncyc);
        block.push("strainCount", p.strain_count);
        block.push_quoted("basefile", &base);

        let deck_file = format!("{base}.f2fis");
        assemble(&templates, &block, &cfg.out_dir.join(&deck_file))?;

        // The drained batch refers to decks by base name, relative to
        // wherever the batch file itself lives.
        batch.push(&deck_file);
        bar.inc(1);
    }
    bar.finish();

    let batch_name = if cfg.sweep.volumetric {
        "batch_drainedDSS_vol.f2fis"
    } else {
        "batch_drainedDSS_MRD.f2fis"
    };
    let batch_path = cfg.out_dir.join(batch_name);
    batch.write(&batch_path)?;

    println!("{} decks → {}", batch.len(), batch_path.display());
    Ok(())
}
