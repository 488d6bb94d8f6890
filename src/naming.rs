// naming.rs - Canonical base-file-name grammar shared by the deck
// generators and the post-processing decoder.
//
// CAUTION: field order, prefixes and numeric rendering are a frozen wire
// format. The plotting pipeline slices these names by prefix width, so any
// change here must be mirrored in `decode`.

/// Maximum-strain labels addressed by 1-based index in the drained drivers.
/// Index `k` is the strain limit the driver stops at.
pub const STRAIN_LABELS: [&str; 10] = [
    "0.0003%", "0.001%", "0.003%", "0.01%", "0.03%", "0.1%", "0.3%", "1%", "3%", "10%",
];

/// Resolve a 1-based strain-limit index to its display label.
///
/// Panics if `count` is outside `1..=10`; the sweep arrays are written by
/// hand and an out-of-range index is an operator typo worth halting on.
pub fn strain_label(count: usize) -> &'static str {
    STRAIN_LABELS[count - 1]
}

/// Render a ratio-valued field (`alpha`, `Ko`, `Dr` in deck bodies) keeping
/// at least one fractional digit: `0.0`, `0.1`, `1.2`. The decoder and the
/// downstream allow-lists expect `a0.0`, never `a0`.
pub fn fmt_ratio(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Render an overburden-stress field: whole numbers lose the trailing
/// fraction (`sig4`, not `sig4.0`), anything else keeps it (`sig1.5`).
pub fn fmt_stress(v: f64) -> String {
    format!("{v}")
}

/// Relative density rendered as an integer percentage (`0.35` -> `35`).
pub fn fmt_density(dr: f64) -> String {
    format!("{}", (dr * 100.0) as i32)
}

/// Base name for an undrained cyclic deck:
/// `<test><soil>_cyc_Dr35_sig1_a0.1_Ko0.3`
pub fn cyclic_name(test: &str, soil: &str, dr: f64, sig_vc: f64, alpha: f64, ko: f64) -> String {
    format!(
        "{test}{soil}_cyc_Dr{}_sig{}_a{}_Ko{}",
        fmt_density(dr),
        fmt_stress(sig_vc),
        fmt_ratio(alpha),
        fmt_ratio(ko),
    )
}

/// Base name for a drained modulus-reduction/damping deck:
/// `<test><soil>_MRD_Dr35_Ncyc2_max1%`
pub fn mrd_name(test: &str, soil: &str, dr: f64, ncyc: u32, strain_count: usize) -> String {
    format!(
        "{test}{soil}_MRD_Dr{}_Ncyc{ncyc}_max{}",
        fmt_density(dr),
        strain_label(strain_count),
    )
}

/// Base name for a drained volumetric deck. The strain-controlled loading
/// is uniform at 1% (table index 8), so the `max` field is pinned there.
pub fn vol_name(test: &str, soil: &str, dr: f64, ncyc: u32) -> String {
    format!(
        "{test}{soil}_vol_Dr{}_Ncyc{ncyc}_max{}",
        fmt_density(dr),
        strain_label(8),
    )
}
