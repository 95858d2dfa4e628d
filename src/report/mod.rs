//! Presentation helpers that consume the genre table: binning, line fits,
//! Arrow tables and the console report.

pub mod console;
pub mod stats;
pub mod table;
