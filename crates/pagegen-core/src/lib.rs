//! pagegen-core — configuration, random reference sequences, and document
//! assembly for the paging-simulator input generator.
//!
//! Three small building blocks, deliberately free of any I/O:
//!
//! - `config`: the immutable generation parameters and their precondition
//!   checks.
//! - `sequence`: one line of uniformly random page indices.
//! - `document`: the full input document in the simulator's plain-text
//!   grammar.
//!
//! The RNG is always an explicit parameter, never a hidden process-wide
//! source, so callers can pin a seed and get byte-identical documents for
//! reproducible fixtures.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Small, explicit allowlist to keep docs readable and APIs ergonomic.
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

/// Generation parameters and precondition checks.
pub mod config;
/// Full-document assembly in the simulator's input grammar.
pub mod document;
/// Uniform random page-reference lines.
pub mod sequence;

pub use config::{Arch, Config};
pub use document::assemble_document;
pub use sequence::render_sequence;
