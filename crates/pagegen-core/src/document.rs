// crates/pagegen-core/src/document.rs

//! Assembly of the complete simulator input document.
//!
//! Layout, in order:
//!
//! 1. physical memory size
//! 2. virtual memory size
//! 3. architecture tag
//! 4. page count
//! 5. (blank)
//! 6. sequence count
//! 7. (blank)
//! 8. per sequence: the request count on one line and the space-separated
//!    page indices on the next, with one blank line *between* blocks.
//!
//! Every emitted line ends in `\n`; nothing trails the final sequence line.
//! The assembler returns one `String` blob so the caller controls exactly one
//! write to its output channel.

use std::fmt::Write as _;

use rand::Rng;

use crate::config::Config;
use crate::sequence::render_sequence;

/// Assemble the full input document for `cfg`.
///
/// Each sequence's length is drawn uniformly from
/// `[cfg.min_requests, cfg.max_requests]`, independently per sequence.
/// `cfg.num_sequences == 0` yields just the header block.
///
/// # Panics
/// Panics if `cfg` violates the generation preconditions
/// (`num_pages == 0` or `min_requests > max_requests`); run
/// [`Config::validate`] first.
#[must_use]
pub fn assemble_document(rng: &mut impl Rng, cfg: &Config) -> String {
    assert!(cfg.num_pages > 0, "assemble_document: num_pages must be > 0");
    assert!(
        cfg.min_requests <= cfg.max_requests,
        "assemble_document: min_requests must not exceed max_requests"
    );

    let mut doc = String::new();
    let _ = writeln!(doc, "{}", cfg.physical_mem);
    let _ = writeln!(doc, "{}", cfg.virtual_mem);
    let _ = writeln!(doc, "{}", cfg.arch);
    let _ = writeln!(doc, "{}", cfg.num_pages);
    doc.push('\n');
    let _ = writeln!(doc, "{}", cfg.num_sequences);
    doc.push('\n');

    for i in 0..cfg.num_sequences {
        if i > 0 {
            doc.push('\n');
        }
        let n = rng.random_range(cfg.min_requests..=cfg.max_requests);
        let _ = writeln!(doc, "{n}");
        let _ = writeln!(doc, "{}", render_sequence(rng, n, cfg.num_pages));
    }

    doc
}
