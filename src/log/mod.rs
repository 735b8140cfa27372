//! Parsing for the benchmark timing logs.

pub mod parse;
pub mod table;

pub use parse::parse_timing_file;
pub use table::TimingTable;
