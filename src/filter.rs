//! Lockstep filter over one or more FASTQ streams.
//!
//! Every iteration pulls exactly one line from each stream, then hands an
//! immutable [`Snapshot`] of that position to [`FilterEngine::step`], which
//! validates headers, decides inclusion and says what to emit. The loop in
//! [`FilterEngine::run`] owns all mutable state: the shared line position,
//! the current [`Decision`] and the counts.

use crate::error::{ConfigError, FilterError, FormatError, LineContext};
use crate::names::NameSet;
use crate::policy::{FilterOptions, OutputMode};
use crate::reader::LineReader;
use crate::record::{LineRole, header_name};
use crate::sink::OutputSink;

use std::io::Write;

/// Inclusion of the current record, fixed at its header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Read name from the primary stream's header (short name if enabled).
    pub name: Vec<u8>,
    pub included: bool,
}

/// The lines of all streams at one shared position.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub position: u64,
    /// One line per stream, stream 0 first. At a sequence position this is
    /// also the per-stream sequence buffer.
    pub lines: &'a [Vec<u8>],
    /// Decision of the record in progress; `None` before the first header.
    pub decision: Option<&'a Decision>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Nothing,
    /// Every stream's line goes to its own sink.
    Lines,
    /// One tabular row for the record.
    Row,
}

/// Outcome of one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// New decision, only at a header position.
    pub decision: Option<Decision>,
    pub emit: Emit,
    /// `Some(included)` once per record, at the sequence position.
    pub counted: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub included: u64,
    pub excluded: u64,
    /// Line positions consumed from every stream.
    pub lines: u64,
    /// The pass stopped on the match limit rather than end of input.
    pub limit_reached: bool,
}

pub struct FilterEngine<'n> {
    names: &'n NameSet,
    opts: FilterOptions,
}

impl<'n> FilterEngine<'n> {
    pub fn new(names: &'n NameSet, opts: FilterOptions) -> Self {
        Self { names, opts }
    }

    /// Decide inclusion from a primary header line (already known to carry `@`).
    pub fn decide(&self, name: &[u8]) -> Decision {
        let name = self.opts.name_mode.apply(name);
        let listed = self.names.contains(name);
        Decision {
            name: name.to_vec(),
            included: listed != self.opts.invert,
        }
    }

    /// Process one position.
    ///
    /// At a header position every stream's line must carry the sentinel, but
    /// only the primary stream (index 0) decides. Other positions reuse the
    /// decision in `snap` and are not validated.
    pub fn step(&self, snap: &Snapshot<'_>, mode: OutputMode) -> Result<Step, FilterError> {
        let role = LineRole::at(snap.position);

        let fresh = if role == LineRole::Header {
            let mut primary = None;
            for (stream, line) in snap.lines.iter().enumerate() {
                let Some(name) = header_name(line) else {
                    return Err(FilterError::fmt_err(
                        FormatError::MissingHeader {
                            line: String::from_utf8_lossy(line).into_owned(),
                        },
                        LineContext {
                            stream,
                            line_num: snap.position,
                        },
                    ));
                };
                if stream == 0 {
                    primary = Some(name);
                }
            }
            primary.map(|name| self.decide(name))
        } else {
            None
        };

        let included = fresh
            .as_ref()
            .or(snap.decision)
            .is_some_and(|d| d.included);

        let emit = match (included, mode, role) {
            (false, _, _) => Emit::Nothing,
            (true, OutputMode::PerStream, _) => Emit::Lines,
            // The row needs the last stream's sequence, which the snapshot already holds.
            (true, OutputMode::Tabular, LineRole::Sequence) => Emit::Row,
            (true, OutputMode::Tabular, _) => Emit::Nothing,
        };

        Ok(Step {
            decision: fresh,
            emit,
            counted: (role == LineRole::Sequence).then_some(included),
        })
    }

    /// Run the pass until stream 0 ends or the match limit is reached.
    pub fn run<W: Write>(
        &self,
        inputs: &mut [LineReader],
        sink: &mut OutputSink<W>,
    ) -> Result<FilterStats, FilterError> {
        let Some((primary, secondary)) = inputs.split_first_mut() else {
            return Err(ConfigError::NoInputs.into());
        };
        let streams = secondary.len() + 1;
        if sink.mode() == OutputMode::PerStream && sink.len() != streams {
            return Err(ConfigError::SinkCount {
                inputs: streams,
                sinks: sink.len(),
            }
            .into());
        }

        let mode = sink.mode();
        let limit = self.opts.limit.filter(|&k| k > 0);
        let mut lines = vec![Vec::new(); streams];
        let mut decision: Option<Decision> = None;
        let mut stats = FilterStats::default();
        let mut position: u64 = 0;

        loop {
            let ctx = |stream| LineContext {
                stream,
                line_num: position,
            };

            let more = primary
                .read_line(&mut lines[0])
                .map_err(|e| FilterError::io_err(e, ctx(0)))?;
            if !more {
                if !LineRole::is_boundary(position) {
                    log::warn!("stream 0 ended inside a record at line {position}");
                }
                break;
            }
            for (i, input) in secondary.iter_mut().enumerate() {
                let stream = i + 1;
                let more = input
                    .read_line(&mut lines[stream])
                    .map_err(|e| FilterError::io_err(e, ctx(stream)))?;
                if !more {
                    return Err(FilterError::Desync { ctx: ctx(stream) });
                }
            }

            let step = self.step(
                &Snapshot {
                    position,
                    lines: &lines,
                    decision: decision.as_ref(),
                },
                mode,
            )?;
            if step.decision.is_some() {
                decision = step.decision;
            }

            match step.counted {
                Some(true) => stats.included += 1,
                Some(false) => stats.excluded += 1,
                None => {}
            }

            match step.emit {
                Emit::Nothing => {}
                Emit::Lines => {
                    for (stream, line) in lines.iter().enumerate() {
                        sink.write_line(stream, line, position)?;
                    }
                }
                Emit::Row => {
                    if let Some(d) = &decision {
                        sink.write_row(&d.name, &lines, position)?;
                    }
                }
            }

            position += 1;
            stats.lines = position;

            if LineRole::is_boundary(position) && limit.is_some_and(|k| stats.included >= k) {
                log::info!("reached limit");
                stats.limit_reached = true;
                break;
            }
        }

        Ok(stats)
    }
}
