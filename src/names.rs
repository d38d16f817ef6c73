use crate::error::FilterError;
use crate::policy::NameMode;
use crate::reader::LineReader;

use rustc_hash::FxHashSet;
use std::path::Path;

/// Read names to match against, one per line of the list.
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    names: FxHashSet<Vec<u8>>,
}

impl NameSet {
    /// Load a name list from `path` (plain or .gz). `stdin` / `-` read standard input.
    pub fn from_path<P: AsRef<Path>>(path: P, mode: NameMode) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let mut rdr = if path.as_os_str() == "stdin" {
            LineReader::from_stdin()
        } else {
            LineReader::open(Some(path))?
        };
        Self::from_reader(&mut rdr, mode)
    }

    /// Drain `rdr`, inserting every line normalized by `mode`.
    ///
    /// A read failure aborts the load; no partial set is returned.
    pub fn from_reader(rdr: &mut LineReader, mode: NameMode) -> Result<Self, FilterError> {
        let mut names: FxHashSet<Vec<u8>> = FxHashSet::default();
        let mut line = Vec::new();
        loop {
            match rdr.read_line(&mut line) {
                Ok(true) => {
                    let name = mode.apply(&line);
                    if !names.contains(name) {
                        names.insert(name.to_vec());
                    }
                }
                Ok(false) => break,
                Err(e) => return Err(FilterError::io_err(e, rdr.ctx(0))),
            }
        }
        log::debug!("loaded {} read names", names.len());
        Ok(Self { names })
    }

    #[inline]
    pub fn contains(&self, name: &[u8]) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<Vec<u8>>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(text: &[u8], mode: NameMode) -> NameSet {
        let mut rdr = LineReader::from_bufread(Cursor::new(text.to_vec()));
        NameSet::from_reader(&mut rdr, mode).unwrap()
    }

    #[test]
    fn duplicates_collapse() {
        let set = load(b"r1\nr2\nr1\nr2\n", NameMode::Full);
        assert_eq!(set.len(), 2);
        assert!(set.contains(b"r1"));
        assert!(set.contains(b"r2"));
    }

    #[test]
    fn full_mode_keeps_whole_line() {
        let set = load(b"r1 1:N:0\nr2\n", NameMode::Full);
        assert!(set.contains(b"r1 1:N:0"));
        assert!(!set.contains(b"r1"));
    }

    #[test]
    fn short_mode_truncates_entries() {
        let set = load(b"r1 1:N:0\nr1 2:N:0\nr2\tx\n", NameMode::Short);
        assert_eq!(set.len(), 2);
        assert!(set.contains(b"r1"));
        assert!(set.contains(b"r2"));
    }

    #[test]
    fn no_case_folding() {
        let set = load(b"Read1\n", NameMode::Full);
        assert!(!set.contains(b"read1"));
    }

    #[test]
    fn non_utf8_names() {
        let set = load(b"caf\xE9 1\n", NameMode::Short);
        assert!(set.contains(b"caf\xE9"));
    }

    #[test]
    fn empty_list() {
        let set = load(b"", NameMode::Full);
        assert!(set.is_empty());
    }
}
