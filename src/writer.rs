use crate::error::FilterError;
use crate::util::{has_gz_extension, is_stdin_path};

#[cfg(feature = "gzip")]
use flate2::{Compression, write::GzEncoder};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output handle for filtered lines: a plain file, a gzip file, or stdout.
///
/// Stdout is not wrapped in a private buffer, so several per-stream writers
/// sharing it keep their lines in the order they were written.
pub enum LineWriter {
    Stdout(io::Stdout),
    Plain(BufWriter<File>),
    #[cfg(feature = "gzip")]
    Gzip(GzEncoder<BufWriter<File>>),
}

impl LineWriter {
    /// Create `path`, or write to stdout when `path` is `None` or `-`.
    /// A `.gz` name selects gzip compression.
    pub fn create(path: Option<&Path>) -> Result<Self, FilterError> {
        let path = match path {
            Some(p) if !is_stdin_path(p) => p,
            _ => return Ok(Self::stdout()),
        };
        let f = File::create(path).map_err(|e| FilterError::open_err(e, path))?;
        let buf = BufWriter::with_capacity(256 * 1024, f);
        log::debug!("writing {}", path.display());

        if has_gz_extension(path) {
            #[cfg(feature = "gzip")]
            {
                return Ok(Self::Gzip(GzEncoder::new(buf, Compression::default())));
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(FilterError::open_err(
                    io::Error::new(io::ErrorKind::Unsupported, "gzip support not enabled"),
                    path,
                ));
            }
        }
        Ok(Self::Plain(buf))
    }

    pub fn stdout() -> Self {
        Self::Stdout(io::stdout())
    }

    /// Flush everything and, for gzip, write the trailer.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Stdout(mut w) => w.flush(),
            Self::Plain(mut w) => w.flush(),
            #[cfg(feature = "gzip")]
            Self::Gzip(w) => w.finish()?.flush(),
        }
    }
}

impl Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::Plain(w) => w.write(buf),
            #[cfg(feature = "gzip")]
            Self::Gzip(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.write_all(buf),
            Self::Plain(w) => w.write_all(buf),
            #[cfg(feature = "gzip")]
            Self::Gzip(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Plain(w) => w.flush(),
            #[cfg(feature = "gzip")]
            Self::Gzip(w) => w.flush(),
        }
    }
}
