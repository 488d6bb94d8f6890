use deckgen::decode::{decode_name, filter_files, ExtraFilter, FileFilter};
use deckgen::naming::{cyclic_name, fmt_density, fmt_ratio, fmt_stress, mrd_name, strain_label};
use deckgen::sweep::{CyclicSweep, DrainedSweep};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

#[test]
fn test_decode_recovers_cyclic_fields() {
    let info = decode_name("uDSS_cyc_Dr35_sig1_a0.1_Ko0.3_3.csv");
    assert_eq!(info.drainage, 'u');
    assert_eq!(info.driver, "DSS");
    assert_eq!(info.goal, "cyc");
    assert_eq!(info.density, "35");
    assert_eq!(info.extra, vec!["sig1", "a0.1", "Ko0.3"]);
    assert_eq!(info.output, "3");
}

#[test]
fn test_decode_takes_basename() {
    let info = decode_name("runs/batch1/dDSS_MRD_Dr55_Ncyc2_max1%_csrN.csv");
    assert_eq!(info.drainage, 'd');
    assert_eq!(info.goal, "MRD");
    assert_eq!(info.extra, vec!["Ncyc2", "max1%"]);
    assert_eq!(info.output, "csrN");
}

#[test]
fn test_decode_unknown_goal_has_no_extras() {
    let info = decode_name("uDSS_mono_Dr35_peakPhi.csv");
    assert_eq!(info.goal, "mono");
    assert!(info.extra.is_empty());
    assert_eq!(info.output, "peakPhi");
}

// Round trip: every tuple of the default sweeps must decode back to the
// rendered field values once the simulator has appended an output tag.
#[test]
fn test_round_trip_default_cyclic_sweep() {
    let sweep = CyclicSweep::default();
    for p in sweep.tuples() {
        let base = cyclic_name("uDSS", "", p.dr, p.sig_vc, p.alpha, p.ko);
        let info = decode_name(&format!("{base}_3.csv"));

        assert_eq!(info.drainage, 'u');
        assert_eq!(info.driver, "DSS");
        assert_eq!(info.goal, "cyc");
        assert_eq!(info.density, fmt_density(p.dr));
        assert_eq!(info.extra[0], format!("sig{}", fmt_stress(p.sig_vc)));
        assert_eq!(info.extra[1], format!("a{}", fmt_ratio(p.alpha)));
        assert_eq!(info.extra[2], format!("Ko{}", fmt_ratio(p.ko)));
        assert_eq!(info.output, "3");
    }
}

#[test]
fn test_round_trip_default_drained_sweep() {
    let sweep = DrainedSweep::default();
    for p in sweep.tuples() {
        let base = mrd_name("dDSS", "", p.dr, p.ncyc, p.strain_count);
        let info = decode_name(&format!("{base}_1.csv"));

        assert_eq!(info.drainage, 'd');
        assert_eq!(info.goal, "MRD");
        assert_eq!(info.density, fmt_density(p.dr));
        assert_eq!(info.extra[0], format!("Ncyc{}", p.ncyc));
        assert_eq!(info.extra[1], format!("max{}", strain_label(p.strain_count)));
    }
}

#[test]
fn test_round_trip_random_axes() {
    let mut rng = Pcg64::seed_from_u64(42);

    for _ in 0..200 {
        let dr: f64 = rng.gen_range(0.05..1.0);
        let sig_vc: f64 = rng.gen_range(0.5..16.0);
        let alpha: f64 = rng.gen_range(0.0..0.9);
        let ko: f64 = rng.gen_range(0.1..2.0);

        let base = cyclic_name("uDSS", "", dr, sig_vc, alpha, ko);
        let info = decode_name(&format!("{base}_csrN.csv"));

        assert_eq!(info.density, fmt_density(dr));
        assert_eq!(info.extra[0], format!("sig{}", fmt_stress(sig_vc)));
        assert_eq!(info.extra[1], format!("a{}", fmt_ratio(alpha)));
        assert_eq!(info.extra[2], format!("Ko{}", fmt_ratio(ko)));
        assert_eq!(info.output, "csrN");
    }
}

fn sample_files() -> Vec<String> {
    vec![
        "uDSS_cyc_Dr35_sig1_a0.0_Ko0.3_3.csv".to_string(),
        "uDSS_cyc_Dr55_sig4_a0.1_Ko0.3_3.csv".to_string(),
        "uDSS_cyc_Dr75_sig8_a0.2_Ko1.2_csrN.csv".to_string(),
        "dDSS_MRD_Dr35_Ncyc2_max1%_1.csv".to_string(),
        "dDSS_vol_Dr55_Ncyc2_max1%_1.csv".to_string(),
        "uDSS_rec_Dr55_sig4_a0.1_3.csv".to_string(),
        "uDSS_mono_Dr35_peakPhi.csv".to_string(),
    ]
}

#[test]
fn test_wildcard_filter_is_identity() {
    let files = sample_files();
    let kept = filter_files(&files, &FileFilter::default());
    assert_eq!(kept, files, "all-empty allow-lists must match every file");
}

#[test]
fn test_density_and_goal_filters() {
    let files = sample_files();

    let filter = FileFilter {
        density: vec!["35".to_string()],
        ..FileFilter::default()
    };
    let kept = filter_files(&files, &filter);
    assert_eq!(kept.len(), 3);
    assert!(kept.iter().all(|f| f.contains("Dr35")));

    let filter = FileFilter {
        test: vec!["MRD".to_string(), "vol".to_string()],
        ..FileFilter::default()
    };
    assert_eq!(filter_files(&files, &filter).len(), 2);

    let filter = FileFilter {
        drainage: vec!['d'],
        ..FileFilter::default()
    };
    assert_eq!(filter_files(&files, &filter).len(), 2);
}

#[test]
fn test_cyclic_extra_filter_strips_prefixes() {
    let files = sample_files();
    let filter = FileFilter {
        test: vec!["cyc".to_string()],
        extra: ExtraFilter::Cyclic {
            sig_vc: Vec::new(),
            alpha: vec!["0.0".to_string(), "0.1".to_string()],
            ko: vec!["0.3".to_string()],
        },
        ..FileFilter::default()
    };
    let kept = filter_files(&files, &filter);
    assert_eq!(
        kept,
        vec![
            "uDSS_cyc_Dr35_sig1_a0.0_Ko0.3_3.csv".to_string(),
            "uDSS_cyc_Dr55_sig4_a0.1_Ko0.3_3.csv".to_string(),
        ]
    );
}

#[test]
fn test_degradation_extra_filter() {
    let files = sample_files();
    let filter = FileFilter {
        extra: ExtraFilter::Degradation {
            ncyc: vec!["2".to_string()],
            max_strain: vec!["1%".to_string()],
        },
        ..FileFilter::default()
    };
    // Only the MRD and vol files can satisfy a degradation filter; every
    // other goal falls through unmatched.
    let kept = filter_files(&files, &filter);
    assert_eq!(
        kept,
        vec![
            "dDSS_MRD_Dr35_Ncyc2_max1%_1.csv".to_string(),
            "dDSS_vol_Dr55_Ncyc2_max1%_1.csv".to_string(),
        ]
    );
}

#[test]
fn test_reconsolidation_extra_filter() {
    let files = sample_files();
    let filter = FileFilter {
        extra: ExtraFilter::Reconsolidation {
            sig_vc: vec!["4".to_string()],
            alpha: Vec::new(),
        },
        ..FileFilter::default()
    };
    let kept = filter_files(&files, &filter);
    assert_eq!(kept, vec!["uDSS_rec_Dr55_sig4_a0.1_3.csv".to_string()]);
}

#[test]
fn test_unmatched_goal_with_extra_filter_never_matches() {
    let files = vec!["uDSS_mono_Dr35_peakPhi.csv".to_string()];
    let filter = FileFilter {
        extra: ExtraFilter::Cyclic {
            sig_vc: Vec::new(),
            alpha: Vec::new(),
            ko: Vec::new(),
        },
        ..FileFilter::default()
    };
    assert!(
        filter_files(&files, &filter).is_empty(),
        "a goal the extra filter does not cover must fall through unmatched"
    );
}
