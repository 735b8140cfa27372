//! Comparison model: join the two timing tables and derive the speedup series.

use crate::Result;
use crate::log::TimingTable;
use anyhow::bail;

/// Validated join of the parallel and sequential timing tables.
///
/// All vectors are aligned positionally, sorted by iteration count ascending.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub iterations: Vec<u64>,
    pub parallel_secs: Vec<f64>,
    pub sequential_secs: Vec<f64>,

    /// sequential / parallel per iteration count; >1 means the parallel run won.
    pub speedup: Vec<f64>,
}

impl Comparison {
    pub fn max_iterations(&self) -> u64 {
        self.iterations.iter().copied().max().unwrap_or(0)
    }

    /// Largest value across both time series, for the shared y-axis.
    pub fn max_seconds(&self) -> f64 {
        self.parallel_secs
            .iter()
            .chain(self.sequential_secs.iter())
            .copied()
            .fold(0.0, f64::max)
    }

    pub fn max_speedup(&self) -> f64 {
        self.speedup.iter().copied().fold(0.0, f64::max)
    }
}

/// Build the comparison. Performs:
/// - enforce that both logs cover the same iteration counts (error)
/// - extract the aligned series in ascending iteration order
/// - derive the speedup, rejecting a parallel time of exactly zero
pub fn build_comparison(parallel: &TimingTable, sequential: &TimingTable) -> Result<Comparison> {
    // 1) Enforce: both logs measured the same iteration counts (strict).
    let missing_sequential: Vec<u64> = parallel
        .keys()
        .filter(|n| !sequential.contains_key(n))
        .copied()
        .collect();
    if !missing_sequential.is_empty() {
        bail!(
            "iteration counts {:?} are in the parallel log but missing from the sequential log",
            missing_sequential
        );
    }

    let missing_parallel: Vec<u64> = sequential
        .keys()
        .filter(|n| !parallel.contains_key(n))
        .copied()
        .collect();
    if !missing_parallel.is_empty() {
        bail!(
            "iteration counts {:?} are in the sequential log but missing from the parallel log",
            missing_parallel
        );
    }

    // 2) Extract aligned series; BTreeMap iteration is already ascending.
    let mut iterations = Vec::with_capacity(parallel.len());
    let mut parallel_secs = Vec::with_capacity(parallel.len());
    let mut sequential_secs = Vec::with_capacity(parallel.len());

    for (&n, &p) in parallel {
        iterations.push(n);
        parallel_secs.push(p);
        // Lookup cannot miss after 1).
        sequential_secs.push(sequential[&n]);
    }

    // 3) Derive the speedup pointwise.
    let mut speedup = Vec::with_capacity(iterations.len());
    for (i, &p) in parallel_secs.iter().enumerate() {
        if p == 0.0 {
            bail!(
                "parallel time for {} iterations is zero, speedup is undefined",
                iterations[i]
            );
        }
        speedup.push(sequential_secs[i] / p);
    }

    Ok(Comparison {
        iterations,
        parallel_secs,
        sequential_secs,
        speedup,
    })
}
