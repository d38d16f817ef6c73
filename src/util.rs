use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

pub fn open_file(path: &Path) -> io::Result<File> {
    File::open(path)
}

pub fn has_gz_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// `-` (and `stdin` for the name list) stand for standard input.
pub fn is_stdin_path(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// First ASCII-whitespace-delimited token, or empty for a blank name.
#[inline]
pub fn short_name(name: &[u8]) -> &[u8] {
    name.split(|b| b.is_ascii_whitespace())
        .find(|t| !t.is_empty())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn short_name_tokens() {
        assert_eq!(short_name(b"read1 extra words"), b"read1");
        assert_eq!(short_name(b"read1\tdesc"), b"read1");
        assert_eq!(short_name(b"  lead"), b"lead");
        assert_eq!(short_name(b"   "), b"");
        assert_eq!(short_name(b"r\xE9 x"), b"r\xE9");
    }

    #[test]
    fn gzip_magic_keeps_position() {
        let mut c = Cursor::new(vec![0x1F, 0x8B, 0x08, 0x00]);
        assert!(looks_like_gzip(&mut c).unwrap());
        assert_eq!(c.position(), 0);
        assert!(!looks_like_gzip(Cursor::new(b"@r1\n".to_vec())).unwrap());
    }
}
