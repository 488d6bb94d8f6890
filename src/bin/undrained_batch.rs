//! Undrained cyclic DSS deck generator.
//!
//! Same assembly as the drained generator, for the undrained driver: the
//! varied inputs are relative density, initial overburden stress, static
//! shear-stress bias ratio and Ko, each providable with one or more axis
//! values. Produces `batch_undrainedDSS_cyc.f2fis`, which is the only
//! file that needs to be called from FLAC2D.
//!
//! All other variables are defined inside `DSS_cyclic_undrained.f2fis`
//! and can either be changed there (if constant across drivers) or
//! brought in here as another axis array.

use deckgen::batch::BatchWriter;
use deckgen::deck::{assemble, DeckTemplates, ParamBlock};
use deckgen::naming::{cyclic_name, fmt_ratio, fmt_stress};
use deckgen::sweep::CyclicSweep;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Run-time configuration (single source of truth).
#[derive(Debug, Clone)]
struct Config {
    soil:          String,
    test_name:     String,
    sweep:         CyclicSweep,
    template_file: PathBuf,
    driver_file:   PathBuf,
    out_dir:       PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            soil:          String::new(),
            test_name:     "uDSS".into(),
            sweep:         CyclicSweep::default(),
            template_file: PathBuf::from("templ_uDSScyc.f2fis"),
            driver_file:   PathBuf::from("DSS_cyclic_undrained.f2fis"),
            out_dir:       PathBuf::from("."),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::default();
    println!("Generating undrained DSS decks with configuration:\n{cfg:#?}");

    let templates = DeckTemplates::load(&cfg.template_file, &cfg.driver_file)?;

    let bar = ProgressBar::new(cfg.sweep.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]",
    )?);

    let mut batch = BatchWriter::new();
    for p in cfg.sweep.tuples() {
        let base = cyclic_name(&cfg.test_name, &cfg.soil, p.dr, p.sig_vc, p.alpha, p.ko);

        let mut block = ParamBlock::new('$', 12);
        block.push("Dr", fmt_ratio(p.dr));
        block.push("static_bias", fmt_ratio(p.alpha));
        block.push("flag_on_FirstCall", i32::from(p.first_call));
        block.push("confinement", fmt_stress(p.sig_vc));
        block.push("Ko", fmt_ratio(p.ko));
        block.push_quoted("basefile", &base);

        let deck_path = cfg.out_dir.join(format!("{base}.f2fis"));
        assemble(&templates, &block, &deck_path)?;

        // The undrained batch calls decks by full path.
        batch.push(&deck_path.display().to_string());
        bar.inc(1);
    }
    bar.finish();

    let batch_path = cfg.out_dir.join("batch_undrainedDSS_cyc.f2fis");
    batch.write(&batch_path)?;

    println!("{} decks → {}", batch.len(), batch_path.display());
    Ok(())
}
