// powerfit.rs - Power-law fit y = A * x^b for cyclic-strength curves
// (e.g. CSR versus number of cycles), done as a least-squares line fit in
// log-log space.

use nalgebra::{DMatrix, DVector};
use std::error::Error;

/// Fit result plus an evaluation grid spanning the fitted sample.
#[derive(Debug, Clone)]
pub struct PowerFit {
    pub exponent: f64,
    pub amplitude: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

// Starting point inherited from the plotting pipeline; the model is linear
// in (p0, p1) so Gauss-Newton lands on the optimum in one step from
// anywhere, the loop only confirms it.
const P_INIT: [f64; 2] = [0.15, -0.25];
const MAX_ITER: usize = 20;
const STEP_TOL: f64 = 1e-12;

/// Fit `log10(y) = p0 + p1 * log10(x)` over the samples with `x > 0` and
/// return `amplitude = 10^p0`, `exponent = p1` together with `pts` evenly
/// spaced x values across the filtered sample range and the fitted y
/// there. Degenerate input (fewer than two usable samples, all x equal)
/// or a non-converging solve is an error for the caller.
pub fn power_fit(samples: &[(f64, f64)], pts: usize) -> Result<PowerFit, Box<dyn Error>> {
    let kept: Vec<(f64, f64)> = samples.iter().copied().filter(|&(x, _)| x > 0.0).collect();
    if kept.len() < 2 {
        return Err("power fit needs at least two samples with x > 0".into());
    }
    if kept.iter().all(|&(x, _)| x == kept[0].0) {
        return Err("power fit needs at least two distinct x values".into());
    }

    let logx: Vec<f64> = kept.iter().map(|&(x, _)| x.log10()).collect();
    let logy: Vec<f64> = kept.iter().map(|&(_, y)| y.log10()).collect();

    let n = kept.len();
    let jac = DMatrix::from_fn(n, 2, |i, c| if c == 0 { 1.0 } else { logx[i] });
    let mut p = DVector::from_column_slice(&P_INIT);
    let mut converged = false;
    for _ in 0..MAX_ITER {
        let resid = DVector::from_fn(n, |i, _| logy[i] - (p[0] + p[1] * logx[i]));
        let jtj = jac.transpose() * &jac;
        let jtr = jac.transpose() * resid;
        let step = jtj
            .lu()
            .solve(&jtr)
            .ok_or("singular normal equations in power fit")?;
        p += &step;
        if step.norm() < STEP_TOL {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err("power fit did not converge".into());
    }

    let amplitude = 10f64.powf(p[0]);
    let exponent = p[1];

    let x_min = kept.iter().map(|&(x, _)| x).fold(f64::INFINITY, f64::min);
    let x_max = kept.iter().map(|&(x, _)| x).fold(f64::NEG_INFINITY, f64::max);
    let x = linspace(x_min, x_max, pts);
    let y = x.iter().map(|&xi| amplitude * xi.powf(exponent)).collect();

    Ok(PowerFit { exponent, amplitude, x, y })
}

fn linspace(lo: f64, hi: f64, pts: usize) -> Vec<f64> {
    match pts {
        0 => Vec::new(),
        1 => vec![lo],
        _ => (0..pts)
            .map(|i| lo + (hi - lo) * i as f64 / (pts - 1) as f64)
            .collect(),
    }
}
