//! Filter FASTQ reads by name, single-end or paired-end.
//!
//! - Plain and `.gz` inputs (auto-detect) and outputs (by `.gz` name).
//! - Paired files are read in strict lockstep; a shorter mate file is an error.
//! - Only stream 0's header decides; every stream's header must start with `@`.
//! - Include or exclude (`invert`) listed names, optional short names and match limit.
//! - Per-stream FASTQ output or one tabular `name\tseq_0\tseq_1` line per read.
//! - Optional `mmap` for plain inputs; `zlib` feature for system-zlib parity.

pub mod config;
pub mod error;
pub mod filter;
pub mod names;
pub mod pipeline;
pub mod policy;
pub mod reader;
pub mod record;
pub mod sink;
mod util;
pub mod writer;

pub use crate::config::RunConfig;
pub use crate::error::{ConfigError, FilterError, FormatError, LineContext};
pub use crate::filter::{Decision, Emit, FilterEngine, FilterStats, Snapshot, Step};
pub use crate::names::NameSet;
pub use crate::pipeline::run;
pub use crate::policy::{FilterOptions, NameMode, OutputMode};
pub use crate::reader::LineReader;
pub use crate::record::LineRole;
pub use crate::sink::{OutputSink, output_paths};
pub use crate::writer::LineWriter;
