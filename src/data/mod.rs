//! Data layer: core types, loading, cleaning and aggregation.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → RawTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  select   │  seven analysed columns → Vec<Movie>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  drop rows holding a zero
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  explode  │  one GenreMovie per (movie, genre), lazily
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ aggregate  │  per-genre means → GenreTable
//!   └───────────┘
//! ```

pub mod aggregate;
pub mod error;
pub mod explode;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod select;

pub use error::PipelineError;
pub use model::{Column, GenreAggregate, GenreMovie, GenreTable, Movie, NumericColumn};
pub use pipeline::{analyze, analyze_file, Analysis, DatasetSummary};
