//! Validated settings for one filtering run.

use crate::error::ConfigError;
use crate::policy::{FilterOptions, OutputMode};
use crate::sink::output_paths;
use crate::util::is_stdin_path;

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// One (single-end) or two (paired-end) FASTQ inputs; `-` is stdin.
    pub inputs: Vec<PathBuf>,
    /// Name list; `stdin` or `-` is stdin.
    pub reads: Option<PathBuf>,
    /// Output file prefix; `None` writes to stdout.
    pub out_prefix: Option<String>,
    pub tabular: bool,
    pub filter: FilterOptions,
}

impl RunConfig {
    /// Check everything that can be checked before a file is opened.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reads.is_none() {
            return Err(ConfigError::MissingReadsList);
        }
        match self.inputs.len() {
            0 => return Err(ConfigError::NoInputs),
            1 | 2 => {}
            n => return Err(ConfigError::TooManyInputs(n)),
        }
        if self.tabular && self.out_prefix.is_some() {
            return Err(ConfigError::TabularWithPrefix);
        }
        let stdin_users = self.inputs.iter().filter(|p| is_stdin_path(p)).count()
            + usize::from(self.reads.as_deref().is_some_and(reads_from_stdin));
        if stdin_users > 1 {
            return Err(ConfigError::StdinReused);
        }
        Ok(())
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.tabular {
            OutputMode::Tabular
        } else {
            OutputMode::PerStream
        }
    }

    /// Per-stream output files, or `None` when writing to stdout.
    pub fn output_paths(&self) -> Option<Vec<PathBuf>> {
        self.out_prefix
            .as_deref()
            .map(|prefix| output_paths(prefix, self.inputs.len()))
    }
}

fn reads_from_stdin(path: &Path) -> bool {
    is_stdin_path(path) || path.as_os_str() == "stdin"
}
