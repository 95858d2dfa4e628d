//! Genre popularity analysis of the TMDb movie dataset.
//!
//! [`data`] holds the pipeline (load, select, filter, explode, aggregate);
//! [`report`] turns its output into tables, histograms and fitted lines.

pub mod config;
pub mod data;
pub mod report;
