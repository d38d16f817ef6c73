/// How read names are compared against the name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMode {
    /// The whole header after `@` (and the whole name-list line).
    Full,
    /// Only the first whitespace-delimited token.
    Short,
}

impl NameMode {
    /// Normalize a name (or name-list entry) according to the mode.
    #[inline]
    pub fn apply<'a>(&self, name: &'a [u8]) -> &'a [u8] {
        match self {
            NameMode::Full => name,
            NameMode::Short => crate::util::short_name(name),
        }
    }
}

/// Shape of the filter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Every stream's included lines go verbatim to that stream's sink.
    PerStream,
    /// One `name\tseq_0\t...` line per included record on a single sink.
    Tabular,
}

#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Keep records whose name is NOT in the list.
    pub invert: bool,
    pub name_mode: NameMode,
    /// Stop after this many included records; `None` (or `Some(0)`) means unlimited.
    pub limit: Option<u64>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            invert: false,
            name_mode: NameMode::Full,
            limit: None,
        }
    }
}
