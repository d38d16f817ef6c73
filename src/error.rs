use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Where in the lockstep pass an error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineContext {
    /// Index of the input stream (or output sink), 0-based.
    pub stream: usize,
    /// Shared line position, 0-based.
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("must provide a reads list (--reads <file>)")]
    MissingReadsList,
    #[error("must specify at least one fastq file")]
    NoInputs,
    #[error("at most two fastq files are supported, got {0}")]
    TooManyInputs(usize),
    #[error("tabular output only supports writing to stdout")]
    TabularWithPrefix,
    #[error("standard input can only be used by one source")]
    StdinReused,
    #[error("{inputs} input streams but {sinks} output sinks")]
    SinkCount { inputs: usize, sinks: usize },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("should be a header line, got: {line}")]
    MissingHeader { line: String },
}

#[derive(Debug, Error)]
pub enum FilterError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
    #[error("I/O error on stream {} at line {}: {source}", .ctx.stream, .ctx.line_num)]
    Io {
        #[source]
        source: io::Error,
        ctx: LineContext,
    },
    #[error("line {} of stream {}: {source}", .ctx.line_num, .ctx.stream)]
    Format {
        #[source]
        source: FormatError,
        ctx: LineContext,
    },
    #[error("stream {} ran out of lines at line {} while stream 0 has more", .ctx.stream, .ctx.line_num)]
    Desync { ctx: LineContext },
    #[error("failed to write line {} to output {}: {source}", .ctx.line_num, .ctx.stream)]
    Write {
        #[source]
        source: io::Error,
        ctx: LineContext,
    },
    #[error("failed to finish output {sink}: {source}")]
    Finish {
        #[source]
        source: io::Error,
        sink: usize,
    },
}

impl FilterError {
    pub(crate) fn open_err(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Open {
            source,
            path: path.into(),
        }
    }
    pub(crate) fn io_err(source: io::Error, ctx: LineContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: LineContext) -> Self {
        Self::Format { source, ctx }
    }
    pub(crate) fn write_err(source: io::Error, ctx: LineContext) -> Self {
        Self::Write { source, ctx }
    }
}
