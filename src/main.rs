//! kira-fqfilter: return the subset of FASTQ reads whose names are (or are not) in a list.
//!
//! Usage: kira-fqfilter --reads <FILE> [OPTIONS] <FASTQ> [FASTQ]

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process;

use kira_fqfilter::{FilterOptions, NameMode, RunConfig};

#[derive(Parser)]
#[command(name = "kira-fqfilter")]
#[command(version)]
#[command(about = "Return a subset of the reads of one or two (paired-end) FASTQ files", long_about = None)]
struct Cli {
    /// Return reads NOT in the file
    #[arg(long)]
    invert: bool,

    /// Filename of reads to match (`stdin` reads the list from standard input)
    #[arg(long)]
    reads: Option<PathBuf>,

    /// Output filename prefix (default = stdout)
    #[arg(long)]
    out: Option<String>,

    /// Output only the first LIMIT matches (0 = all)
    #[arg(long, default_value_t = 0)]
    limit: u64,

    /// Print sequences as tabular output (readName, read1, read2)
    #[arg(long, conflicts_with = "out")]
    tab: bool,

    /// Use just the first space-separated word of the read name
    #[arg(long)]
    short_name: bool,

    /// Input FASTQ files, plain or gzipped (use - for stdin)
    #[arg(value_name = "FASTQ", num_args = 0..=2)]
    inputs: Vec<PathBuf>,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            inputs: cli.inputs,
            reads: cli.reads,
            out_prefix: cli.out,
            tabular: cli.tab,
            filter: FilterOptions {
                invert: cli.invert,
                name_mode: if cli.short_name {
                    NameMode::Short
                } else {
                    NameMode::Full
                },
                limit: (cli.limit > 0).then_some(cli.limit),
            },
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cfg = RunConfig::from(Cli::parse());

    match kira_fqfilter::run(&cfg) {
        Ok(stats) => {
            log::info!("included: {}", stats.included);
            log::info!("excluded: {}", stats.excluded);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
