// sweep.rs - Cartesian enumeration of driver parameter tuples.
//
// Axis arrays are held in one immutable struct per test variant (single
// source of truth, same as the run configs in the scan binaries) and
// expanded lazily. The first axis varies slowest; post-processing relies on
// the batch file listing decks in this order.

/// One undrained cyclic DSS tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclicParams {
    pub dr: f64,
    pub sig_vc: f64,
    pub alpha: f64,
    pub ko: f64,
    /// Whether this deck continues from an already-consolidated state.
    /// Only the zero-bias case initializes the specimen fresh, and the
    /// comparison is exact: any non-zero bias is a continuation call.
    pub first_call: bool,
}

/// One drained cyclic DSS tuple (MRD or volumetric mode).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrainedParams {
    pub dr: f64,
    pub ncyc: u32,
    pub strain_count: usize,
}

/// Axis arrays for the undrained cyclic sweep.
#[derive(Debug, Clone)]
pub struct CyclicSweep {
    pub dr: Vec<f64>,
    pub sig_vc: Vec<f64>,
    pub alpha: Vec<f64>,
    pub ko: Vec<f64>,
}

impl Default for CyclicSweep {
    fn default() -> Self {
        Self {
            dr:     vec![0.35, 0.55, 0.75],
            sig_vc: vec![1.0, 4.0, 8.0],
            alpha:  vec![0.0, 0.1, 0.2, 0.3],
            ko:     vec![0.3, 0.8, 1.2],
        }
    }
}

impl CyclicSweep {
    /// Number of tuples the sweep will produce.
    pub fn len(&self) -> usize {
        self.dr.len() * self.sig_vc.len() * self.alpha.len() * self.ko.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazy cartesian product, `dr` slowest, `ko` fastest.
    pub fn tuples(&self) -> impl Iterator<Item = CyclicParams> + '_ {
        Odometer::new(&[self.dr.len(), self.sig_vc.len(), self.alpha.len(), self.ko.len()]).map(
            move |ix| {
                let alpha = self.alpha[ix[2]];
                CyclicParams {
                    dr: self.dr[ix[0]],
                    sig_vc: self.sig_vc[ix[1]],
                    alpha,
                    ko: self.ko[ix[3]],
                    first_call: alpha != 0.0,
                }
            },
        )
    }
}

/// Axis arrays for the drained cyclic sweep. `volumetric` switches between
/// the MRD mode (dr x ncyc x strain_count) and the volumetric mode
/// (dr x ncyc, strain-controlled at 1%, strain count pinned to 1).
#[derive(Debug, Clone)]
pub struct DrainedSweep {
    pub dr: Vec<f64>,
    pub ncyc: Vec<u32>,
    pub strain_count: Vec<usize>,
    pub volumetric: bool,
}

impl Default for DrainedSweep {
    fn default() -> Self {
        Self {
            dr:           vec![0.35, 0.55, 0.75],
            ncyc:         vec![2],
            strain_count: vec![8],
            volumetric:   false,
        }
    }
}

impl DrainedSweep {
    pub fn len(&self) -> usize {
        let base = self.dr.len() * self.ncyc.len();
        if self.volumetric {
            base
        } else {
            base * self.strain_count.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazy cartesian product in mode-appropriate order, `dr` slowest.
    pub fn tuples(&self) -> Box<dyn Iterator<Item = DrainedParams> + '_> {
        if self.volumetric {
            Box::new(
                Odometer::new(&[self.dr.len(), self.ncyc.len()]).map(move |ix| DrainedParams {
                    dr: self.dr[ix[0]],
                    ncyc: self.ncyc[ix[1]],
                    strain_count: 1,
                }),
            )
        } else {
            Box::new(
                Odometer::new(&[self.dr.len(), self.ncyc.len(), self.strain_count.len()]).map(
                    move |ix| DrainedParams {
                        dr: self.dr[ix[0]],
                        ncyc: self.ncyc[ix[1]],
                        strain_count: self.strain_count[ix[2]],
                    },
                ),
            )
        }
    }
}

/// Row-major multi-index iterator over a rectangular grid: digit 0 varies
/// slowest. Any zero-length axis yields an empty sequence.
struct Odometer {
    dims: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl Odometer {
    fn new(dims: &[usize]) -> Self {
        let next = if dims.iter().any(|&d| d == 0) {
            None
        } else {
            Some(vec![0; dims.len()])
        };
        Self { dims: dims.to_vec(), next }
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut idx = current.clone();
        let mut pos = idx.len();
        while pos > 0 {
            pos -= 1;
            idx[pos] += 1;
            if idx[pos] < self.dims[pos] {
                self.next = Some(idx);
                break;
            }
            idx[pos] = 0;
        }
        Some(current)
    }
}
