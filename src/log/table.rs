use std::collections::BTreeMap;

/// Timing table for one algorithm variant: iteration count -> elapsed seconds.
///
/// BTreeMap keeps the iteration counts sorted, so series extraction and the
/// x-axis order are deterministic.
pub type TimingTable = BTreeMap<u64, f64>;
