use crate::error::{FilterError, LineContext};
use crate::util::{has_gz_extension, is_stdin_path, looks_like_gzip, open_file};

#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Raw line reader over a FASTQ stream (plain/.gz) or a name list.
///
/// Lines are raw bytes handed out without their `\n` / `\r\n` terminator;
/// no encoding is assumed. Record structure is not interpreted here; the
/// filter engine does that.
pub struct LineReader {
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
}

impl LineReader {
    /// Open `path`, or standard input when `path` is `None` or `-`.
    pub fn open(path: Option<&Path>) -> Result<Self, FilterError> {
        match path {
            Some(p) if !is_stdin_path(p) => Self::from_path(p),
            _ => Ok(Self::from_stdin()),
        }
    }

    /// Open from a file path. Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let f = open_file(path).map_err(|e| FilterError::open_err(e, path))?;

        let is_gz = has_gz_extension(path) || looks_like_gzip(&f).unwrap_or(false);

        let rdr: Box<dyn BufRead + Send> = if is_gz {
            #[cfg(feature = "gzip")]
            {
                let dec = MultiGzDecoder::new(f);
                Box::new(BufReader::with_capacity(256 * 1024, dec))
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(FilterError::open_err(
                    io::Error::new(io::ErrorKind::Unsupported, "gzip support not enabled"),
                    path,
                ));
            }
        } else {
            #[cfg(feature = "mmap")]
            {
                use memmap2::Mmap;
                // The file must not be truncated while mapped.
                let mmap = unsafe { Mmap::map(&f) }.map_err(|e| FilterError::open_err(e, path))?;
                Box::new(io::Cursor::new(mmap))
            }
            #[cfg(not(feature = "mmap"))]
            {
                Box::new(BufReader::with_capacity(256 * 1024, f))
            }
        };

        log::debug!("opened {} (gzip: {is_gz})", path.display());

        Ok(Self {
            rdr,
            line_num: 0,
        })
    }

    pub fn from_stdin() -> Self {
        Self {
            rdr: Box::new(BufReader::with_capacity(256 * 1024, io::stdin())),
            line_num: 0,
        }
    }

    /// Wrap an arbitrary `BufRead` (in-memory data, pipes, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            rdr: Box::new(reader),
            line_num: 0,
        }
    }

    /// Read the next line into `buf` (cleared first). Returns `false` at end of input.
    pub fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        buf.clear();
        let n = self.rdr.read_until(b'\n', buf)?;
        if n == 0 {
            return Ok(false);
        }
        self.line_num += 1;
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(true)
    }

    /// Lines consumed so far.
    pub fn line_num(&self) -> u64 {
        self.line_num
    }

    #[inline]
    pub(crate) fn ctx(&self, stream: usize) -> LineContext {
        LineContext {
            stream,
            line_num: self.line_num,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_lf_and_crlf() {
        let mut r = LineReader::from_bufread(io::Cursor::new(b"a\r\nb\nc".to_vec()));
        let mut buf = Vec::new();
        assert!(r.read_line(&mut buf).unwrap());
        assert_eq!(buf, b"a");
        assert!(r.read_line(&mut buf).unwrap());
        assert_eq!(buf, b"b");
        assert!(r.read_line(&mut buf).unwrap());
        assert_eq!(buf, b"c");
        assert!(!r.read_line(&mut buf).unwrap());
        assert_eq!(r.line_num(), 3);
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let mut r = LineReader::from_bufread(io::Cursor::new(b"@r1 caf\xE9\nACGT\n".to_vec()));
        let mut buf = Vec::new();
        assert!(r.read_line(&mut buf).unwrap());
        assert_eq!(buf, b"@r1 caf\xE9");
        assert!(r.read_line(&mut buf).unwrap());
        assert_eq!(buf, b"ACGT");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = LineReader::from_path("/definitely/not/here.fq").err().unwrap();
        match err {
            FilterError::Open { path, .. } => assert_eq!(path, Path::new("/definitely/not/here.fq")),
            other => panic!("expected open error, got {other}"),
        }
    }
}
