// crates/pagegen-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pagegen_core::{assemble_document, Arch, Config};
use rand::{rngs::StdRng, SeedableRng};
use std::io::Write;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "pagegen",
    about = "Generate input files for the virtual-memory paging simulator",
    long_about = "Generate input files for the virtual-memory paging simulator.\n\nThe document (memory sizes, architecture tag, page count, and randomized\npage-reference sequences) is written to stdout; redirect it into a file to\nfeed the simulator. Diagnostics go to stderr.",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Total number of virtual pages P; indices range from 0 to P-1
    #[arg(short = 'p', long = "pages", default_value_t = 16)]
    pages: u32,

    /// Number of request sequences to generate
    #[arg(short = 's', long = "sequences", default_value_t = 3)]
    sequences: u32,

    /// Maximum number of requests per sequence (inclusive)
    #[arg(long = "max-req", default_value_t = 100)]
    max_req: u32,

    /// Minimum number of requests per sequence (inclusive, must be <= the maximum)
    #[arg(long = "min-req", default_value_t = 10)]
    min_req: u32,

    /// Physical memory size M in bytes, emitted verbatim in the header
    #[arg(long = "physical-mem", default_value_t = 4096)]
    physical_mem: u64,

    /// Virtual memory size V in bytes, emitted verbatim in the header
    #[arg(long = "virtual-mem", default_value_t = 16384)]
    virtual_mem: u64,

    /// Addressing architecture tag
    #[arg(long = "arch", value_enum, default_value_t = ArchOpt::X86)]
    arch: ArchOpt,

    /// Seed the generator for byte-identical output across runs
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum ArchOpt {
    /// 32-bit addressing
    X86,
    /// 64-bit addressing
    X64,
    /// Legacy 286 tag
    #[value(name = "286")]
    A286,
    /// Legacy 264 tag
    #[value(name = "264")]
    A264,
}

impl From<ArchOpt> for Arch {
    fn from(opt: ArchOpt) -> Self {
        match opt {
            ArchOpt::X86 => Self::X86,
            ArchOpt::X64 => Self::X64,
            ArchOpt::A286 => Self::A286,
            ArchOpt::A264 => Self::A264,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let cfg = Config {
        physical_mem: cli.physical_mem,
        virtual_mem: cli.virtual_mem,
        arch: cli.arch.into(),
        num_pages: cli.pages,
        num_sequences: cli.sequences,
        min_requests: cli.min_req,
        max_requests: cli.max_req,
    };
    cfg.validate()?;
    warn_on_simulator_mismatches(&cfg);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(
        pages = cfg.num_pages,
        sequences = cfg.num_sequences,
        min_req = cfg.min_requests,
        max_req = cfg.max_requests,
        seeded = cli.seed.is_some(),
        "generating simulator input"
    );
    let doc = assemble_document(&mut rng, &cfg);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(doc.as_bytes())
        .context("writing document to stdout")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}

/// Initialize tracing with an env-driven filter (default INFO).
///
/// The fmt layer writes to stderr: stdout carries the generated document and
/// must stay byte-clean.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Flag header values the reference simulator rejects at parse time.
///
/// The generation grammar itself does not require any of these, so they are
/// warnings rather than errors; the document is still emitted.
fn warn_on_simulator_mismatches(cfg: &Config) {
    if cfg.virtual_mem < cfg.physical_mem {
        warn!(
            physical_mem = cfg.physical_mem,
            virtual_mem = cfg.virtual_mem,
            "virtual memory is smaller than physical memory; the simulator rejects this header"
        );
    }
    if let Some(page_size) = cfg.derived_page_size() {
        if !page_size.is_power_of_two() {
            warn!(
                page_size,
                "derived page size V/P is not a power of two; the simulator rejects this header"
            );
        }
    }
    if !matches!(cfg.arch, Arch::X86 | Arch::X64) {
        warn!(
            arch = %cfg.arch,
            "the reference simulator only accepts the x86 and x64 tags"
        );
    }
}
