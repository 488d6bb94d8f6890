// batch.rs - Aggregate call script consumed by FLAC2D.
//
// One `program call '<deck>'` line per generated deck, in enumeration
// order. Only this file needs to be called from the simulator; it then
// runs every deck sequentially.

use std::fs;
use std::io;
use std::path::Path;

// Kept character-for-character from the hand-written batch scripts,
// trailing spaces on the title line included.
const HEADER_LINES: [&str; 3] = [
    ";-----------------------------------------------------------------------",
    ";                     FLAC batch calling of input files                 ",
    ";-----------------------------------------------------------------------",
];

/// Accumulates call lines for one generator run.
#[derive(Default)]
pub struct BatchWriter {
    lines: Vec<String>,
}

impl BatchWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one deck. `name` lands between the quotes verbatim, so the
    /// caller decides whether the batch refers to decks by base name or by
    /// full path.
    pub fn push(&mut self, name: &str) {
        self.lines.push(format!("program call '{name}'\n"));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write header block, one blank line, then the call lines. Overwrites
    /// whatever is at `path`; re-running with different axes silently
    /// clobbers the previous batch file unless the operator renames it.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        let mut out = String::with_capacity(256 + self.lines.len() * 64);
        for line in HEADER_LINES {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
        }
        fs::write(path, out)
    }
}
