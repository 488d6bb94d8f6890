// decode.rs - Inverse of the naming grammar, used on simulator output
// files (`<basefile>_<tag>.csv`) to recover loading path, drainage,
// density and the goal-specific extras for plotting.
//
// Closed world: inputs are trusted to come out of `naming`. A name with
// the wrong token count or prefixes panics on the slice, it is not
// guarded against.

use std::path::Path;

/// Structured record recovered from one output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckInfo {
    /// Element-test driver, e.g. `DSS` or `PSC`.
    pub driver: String,
    /// Test goal: `cyc`, `mono`, `MRD`, `vol`, `rec`.
    pub goal: String,
    /// `u` (undrained) or `d` (drained).
    pub drainage: char,
    /// Relative density digits, e.g. `35`.
    pub density: String,
    /// Goal-specific middle tokens, still carrying their prefixes
    /// (`sig1`, `a0.0`, `Ko0.3` / `Ncyc2`, `max1%`). Empty for goals
    /// without extras.
    pub extra: Vec<String>,
    /// Trailing output tag: an element number or a summary-file label
    /// such as `csrN` or `peakPhi`.
    pub output: String,
}

/// Decode one file name. The final 4 characters are taken to be the
/// extension (`.csv`) and dropped before splitting on `_`.
pub fn decode_name(filework: &str) -> DeckInfo {
    let filename = Path::new(filework)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filework);
    let stem = &filename[..filename.len() - 4];
    let tokens: Vec<&str> = stem.split('_').collect();

    let drainage = tokens[0].as_bytes()[0] as char;
    let driver = tokens[0][1..].to_string();
    let goal = tokens[1].to_string();
    let density = tokens[2][2..].to_string();
    let output = tokens[tokens.len() - 1].to_string();

    let extra: Vec<String> = match goal.as_str() {
        "cyc" => tokens[tokens.len() - 4..tokens.len() - 1]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        "MRD" | "vol" | "rec" => tokens[tokens.len() - 3..tokens.len() - 1]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        _ => Vec::new(),
    };

    DeckInfo { driver, goal, drainage, density, extra, output }
}

/// Goal-specific allow-lists for the extra tokens. Values are compared
/// after the field prefix is stripped, so they look like the axis values
/// (`"1"`, `"0.0"`, `"0.3"`, `"2"`, `"1%"`). An empty list is a wildcard.
#[derive(Debug, Clone, Default)]
pub enum ExtraFilter {
    #[default]
    None,
    /// `cyc`: overburden stress, bias ratio, lateral-pressure coefficient.
    Cyclic {
        sig_vc: Vec<String>,
        alpha: Vec<String>,
        ko: Vec<String>,
    },
    /// `MRD` / `vol`: cycle count and maximum strain label.
    Degradation {
        ncyc: Vec<String>,
        max_strain: Vec<String>,
    },
    /// `rec`: overburden stress and bias ratio.
    Reconsolidation {
        sig_vc: Vec<String>,
        alpha: Vec<String>,
    },
}

/// Allow-list filter over decoded file names. Every list empty (the
/// `Default`) matches everything.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    pub driver: Vec<String>,
    pub test: Vec<String>,
    pub drainage: Vec<char>,
    pub density: Vec<String>,
    pub output: Vec<String>,
    pub extra: ExtraFilter,
}

fn allow(list: &[String], value: &str) -> bool {
    list.is_empty() || list.iter().any(|v| v == value)
}

impl FileFilter {
    pub fn matches(&self, info: &DeckInfo) -> bool {
        if !allow(&self.driver, &info.driver)
            || !allow(&self.test, &info.goal)
            || !(self.drainage.is_empty() || self.drainage.contains(&info.drainage))
            || !allow(&self.density, &info.density)
            || !allow(&self.output, &info.output)
        {
            return false;
        }
        self.extra_matches(info)
    }

    fn extra_matches(&self, info: &DeckInfo) -> bool {
        match (&self.extra, info.goal.as_str()) {
            (ExtraFilter::None, _) => true,
            (ExtraFilter::Cyclic { sig_vc, alpha, ko }, "cyc") => {
                allow(sig_vc, &info.extra[0][3..])
                    && allow(alpha, &info.extra[1][1..])
                    && allow(ko, &info.extra[2][2..])
            }
            (ExtraFilter::Degradation { ncyc, max_strain }, "MRD" | "vol") => {
                allow(ncyc, &info.extra[0][4..]) && allow(max_strain, &info.extra[1][3..])
            }
            (ExtraFilter::Reconsolidation { sig_vc, alpha }, "rec") => {
                allow(sig_vc, &info.extra[0][3..]) && allow(alpha, &info.extra[1][1..])
            }
            // A goal the extra filter does not cover never matches.
            _ => false,
        }
    }
}

/// Keep the file names that survive the filter, in input order.
pub fn filter_files(files: &[String], filter: &FileFilter) -> Vec<String> {
    files
        .iter()
        .filter(|f| filter.matches(&decode_name(f)))
        .cloned()
        .collect()
}
