use crate::error::{ConfigError, FilterError, LineContext};
use crate::policy::OutputMode;
use crate::writer::LineWriter;

use std::io::Write;
use std::path::PathBuf;

/// Extension of files written under an output prefix.
pub const OUTPUT_EXT: &str = "fq.gz";

/// Output file names for `streams` inputs under `prefix`:
/// `<prefix>.fq.gz` for one stream, `<prefix>_1.fq.gz`, `<prefix>_2.fq.gz`, ... otherwise.
pub fn output_paths(prefix: &str, streams: usize) -> Vec<PathBuf> {
    if streams == 1 {
        vec![PathBuf::from(format!("{prefix}.{OUTPUT_EXT}"))]
    } else {
        (1..=streams)
            .map(|i| PathBuf::from(format!("{prefix}_{i}.{OUTPUT_EXT}")))
            .collect()
    }
}

/// Where included records go.
pub enum OutputSink<W: Write> {
    /// One writer per input stream, same order as the inputs.
    PerStream(Vec<W>),
    /// A single destination for `name\tseq_0\t...` rows.
    Tabular(W),
}

impl<W: Write> OutputSink<W> {
    pub fn mode(&self) -> OutputMode {
        match self {
            Self::PerStream(_) => OutputMode::PerStream,
            Self::Tabular(_) => OutputMode::Tabular,
        }
    }

    /// Write `line` plus `\n` to stream `stream`'s writer. No-op in tabular mode.
    pub(crate) fn write_line(
        &mut self,
        stream: usize,
        line: &[u8],
        line_num: u64,
    ) -> Result<(), FilterError> {
        let Self::PerStream(writers) = self else {
            return Ok(());
        };
        let sinks = writers.len();
        let w = writers
            .get_mut(stream)
            .ok_or(ConfigError::SinkCount {
                inputs: stream + 1,
                sinks,
            })?;
        let ctx = LineContext { stream, line_num };
        w.write_all(line)
            .and_then(|()| w.write_all(b"\n"))
            .map_err(|e| FilterError::write_err(e, ctx))
    }

    /// Write one tabular row. No-op in per-stream mode.
    pub(crate) fn write_row(
        &mut self,
        name: &[u8],
        sequences: &[Vec<u8>],
        line_num: u64,
    ) -> Result<(), FilterError> {
        let Self::Tabular(w) = self else {
            return Ok(());
        };
        let ctx = LineContext {
            stream: 0,
            line_num,
        };
        let mut row = Vec::with_capacity(
            name.len() + sequences.iter().map(|s| s.len() + 1).sum::<usize>() + 1,
        );
        row.extend_from_slice(name);
        for seq in sequences {
            row.push(b'\t');
            row.extend_from_slice(seq);
        }
        row.push(b'\n');
        w.write_all(&row)
            .map_err(|e| FilterError::write_err(e, ctx))
    }

    /// Number of writers.
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::PerStream(writers) => writers.len(),
            Self::Tabular(_) => 1,
        }
    }

    pub fn into_writers(self) -> Vec<W> {
        match self {
            Self::PerStream(writers) => writers,
            Self::Tabular(w) => vec![w],
        }
    }
}

impl OutputSink<LineWriter> {
    /// Open the sinks for `streams` inputs.
    ///
    /// Without `paths` every per-stream writer (or the tabular writer) is stdout.
    pub fn open(
        mode: OutputMode,
        streams: usize,
        paths: Option<&[PathBuf]>,
    ) -> Result<Self, FilterError> {
        match mode {
            OutputMode::Tabular => Ok(Self::Tabular(LineWriter::stdout())),
            OutputMode::PerStream => {
                let writers = match paths {
                    Some(paths) => paths
                        .iter()
                        .map(|p| LineWriter::create(Some(p.as_path())))
                        .collect::<Result<Vec<_>, _>>()?,
                    None => (0..streams).map(|_| LineWriter::stdout()).collect(),
                };
                Ok(Self::PerStream(writers))
            }
        }
    }

    /// Flush every writer and finalize gzip streams.
    pub fn finish(self) -> Result<(), FilterError> {
        for (sink, w) in self.into_writers().into_iter().enumerate() {
            w.finish()
                .map_err(|source| FilterError::Finish { source, sink })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_stream_name() {
        assert_eq!(output_paths("out", 1), vec![PathBuf::from("out.fq.gz")]);
    }

    #[test]
    fn paired_stream_names() {
        assert_eq!(
            output_paths("dir/sample", 2),
            vec![
                PathBuf::from("dir/sample_1.fq.gz"),
                PathBuf::from("dir/sample_2.fq.gz")
            ]
        );
    }

    #[test]
    fn row_is_tab_separated() {
        let mut sink = OutputSink::Tabular(Vec::<u8>::new());
        sink.write_row(b"r1", &[b"ACGT".to_vec(), b"TTGA".to_vec()], 1)
            .unwrap();
        let out = sink.into_writers().remove(0);
        assert_eq!(out, b"r1\tACGT\tTTGA\n");
    }

    #[test]
    fn per_stream_lines_get_newline() {
        let mut sink = OutputSink::PerStream(vec![Vec::<u8>::new(), Vec::new()]);
        sink.write_line(1, b"@r1", 0).unwrap();
        sink.write_line(0, b"@r1", 0).unwrap();
        let outs = sink.into_writers();
        assert_eq!(outs[0], b"@r1\n");
        assert_eq!(outs[1], b"@r1\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_carries_sink_and_line() {
        let mut sink = OutputSink::PerStream(vec![Broken]);
        match sink.write_line(0, b"@r1", 12) {
            Err(FilterError::Write { ctx, .. }) => {
                assert_eq!(ctx, LineContext { stream: 0, line_num: 12 });
            }
            _ => panic!("expected write error"),
        }
    }
}
