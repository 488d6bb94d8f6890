// deck.rs - Assembly of one simulator input deck per parameter tuple.
//
// A deck is: template header, injected FISH variable block, driver body,
// fixed footer. Header and driver are opaque FLAC2D artifacts; they are
// copied verbatim and never parsed.

use std::fmt::Display;
use std::fs;
use std::io;
use std::path::Path;

const INPUT_MARKER: &str = ";------------GENERAL INPUT CONDITIONS------------\n";
const FOOTER_RULE: &str = ";-------------Footer-------------------\n";
const CLOSING_RULE: &str = ";--------------------------------------\n";

/// The two structural template files a generator run cannot proceed
/// without. A missing file surfaces as the `Err` from `load`.
pub struct DeckTemplates {
    pub header: String,
    pub driver: String,
}

impl DeckTemplates {
    pub fn load(header_path: &Path, driver_path: &Path) -> io::Result<Self> {
        Ok(Self {
            header: fs::read_to_string(header_path)?,
            driver: fs::read_to_string(driver_path)?,
        })
    }
}

/// Ordered FISH variable assignments injected between template header and
/// driver body. The drained drivers name their variables with a `_` sigil,
/// the undrained ones with `$`; `pad` is the column the `=` signs align to
/// in the corresponding hand-written drivers.
pub struct ParamBlock {
    sigil: char,
    pad: usize,
    fields: Vec<(String, String)>,
}

impl ParamBlock {
    pub fn new(sigil: char, pad: usize) -> Self {
        Self { sigil, pad, fields: Vec::new() }
    }

    pub fn sigil(&self) -> char {
        self.sigil
    }

    /// Append one `<sigil><name> = <value>` assignment.
    pub fn push(&mut self, name: &str, value: impl Display) {
        self.fields
            .push((format!("{}{name}", self.sigil), value.to_string()));
    }

    /// Append a single-quoted string assignment (used for `basefile`).
    pub fn push_quoted(&mut self, name: &str, value: &str) {
        self.push(name, format!("'{value}'"));
    }

    /// The `fish def` block plus the bracketed apply line.
    fn render(&self) -> String {
        let mut s = format!("fish def {}var_inputs\n", self.sigil);
        for (name, value) in &self.fields {
            s.push_str(&format!("\t{:<width$} = {value} \n", name, width = self.pad));
        }
        s.push_str("end \n");
        s.push_str(&format!("[{}var_inputs]\n\n", self.sigil));
        s
    }
}

/// Write one complete deck file. Overwrites unconditionally; re-running a
/// generator with the same axes clobbers the previous run's decks.
pub fn assemble(templates: &DeckTemplates, block: &ParamBlock, path: &Path) -> io::Result<()> {
    let mut out = String::with_capacity(
        templates.header.len() + templates.driver.len() + 512,
    );
    out.push_str(&templates.header);
    out.push_str("\n\n");
    out.push_str(INPUT_MARKER);
    out.push_str(&block.render());
    out.push_str(&templates.driver);
    out.push_str(FOOTER_RULE);
    out.push_str(&format!(";save @{}savefile\n", block.sigil));
    out.push_str(CLOSING_RULE);
    fs::write(path, out)
}
