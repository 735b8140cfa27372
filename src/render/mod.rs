//! Chart rendering: turns a comparison into the two PNG artifacts.

pub mod charts;

pub use charts::{render_speedup_chart, render_time_chart};
