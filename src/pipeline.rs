use crate::config::RunConfig;
use crate::error::{ConfigError, FilterError};
use crate::filter::{FilterEngine, FilterStats};
use crate::names::NameSet;
use crate::reader::LineReader;
use crate::sink::OutputSink;

/// Open everything `cfg` names, filter, and finalize the outputs.
///
/// Handles are dropped on every early return; outputs are only finished
/// (flushed, gzip trailer written) after a successful pass.
pub fn run(cfg: &RunConfig) -> Result<FilterStats, FilterError> {
    cfg.validate()?;
    let reads = cfg.reads.as_deref().ok_or(ConfigError::MissingReadsList)?;

    let mut inputs = cfg
        .inputs
        .iter()
        .map(|p| LineReader::open(Some(p.as_path())))
        .collect::<Result<Vec<_>, _>>()?;

    let names = NameSet::from_path(reads, cfg.filter.name_mode)?;

    let paths = cfg.output_paths();
    let mut sink = OutputSink::open(cfg.output_mode(), inputs.len(), paths.as_deref())?;

    let engine = FilterEngine::new(&names, cfg.filter.clone());
    let stats = engine.run(&mut inputs, &mut sink)?;
    sink.finish()?;
    Ok(stats)
}
