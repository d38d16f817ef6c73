/// Role of a line inside a 4-line FASTQ record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Header,
    Sequence,
    Separator,
    Quality,
}

impl LineRole {
    /// Lines per record.
    pub const LINES: u64 = 4;

    /// Role of the line at the shared 0-based `position`.
    #[inline]
    pub fn at(position: u64) -> Self {
        match position % Self::LINES {
            0 => LineRole::Header,
            1 => LineRole::Sequence,
            2 => LineRole::Separator,
            _ => LineRole::Quality,
        }
    }

    /// `position` is the first line of a record (or one past the last record).
    #[inline]
    pub fn is_boundary(position: u64) -> bool {
        position % Self::LINES == 0
    }
}

/// Header sentinel.
pub const HEADER_PREFIX: u8 = b'@';

/// Name carried by a header line, `None` when the sentinel is missing.
#[inline]
pub fn header_name(line: &[u8]) -> Option<&[u8]> {
    line.strip_prefix(&[HEADER_PREFIX])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_cycle_every_four_lines() {
        let roles: Vec<_> = (0..8).map(LineRole::at).collect();
        assert_eq!(
            roles,
            vec![
                LineRole::Header,
                LineRole::Sequence,
                LineRole::Separator,
                LineRole::Quality,
                LineRole::Header,
                LineRole::Sequence,
                LineRole::Separator,
                LineRole::Quality,
            ]
        );
        assert!(LineRole::is_boundary(8));
        assert!(!LineRole::is_boundary(6));
    }

    #[test]
    fn header_name_strips_sentinel() {
        assert_eq!(header_name(b"@r1 desc"), Some(&b"r1 desc"[..]));
        assert_eq!(header_name(b"@"), Some(&b""[..]));
        assert_eq!(header_name(b"r1"), None);
        assert_eq!(header_name(b">r1"), None);
    }
}
