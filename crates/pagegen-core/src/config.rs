//! Generation parameters for one simulator input document.
//!
//! `Config` is built once (normally from the CLI surface), checked with
//! [`Config::validate`], and then consumed read-only by the assembler.

use std::fmt;

use anyhow::{bail, Result};

/// Addressing-architecture tag emitted verbatim in the document header.
///
/// The set is closed; the downstream simulator selects its addressing scheme
/// from this token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arch {
    /// 32-bit addressing (`x86`).
    #[default]
    X86,
    /// 64-bit addressing (`x64`).
    X64,
    /// Legacy `286` addressing tag.
    A286,
    /// Legacy `264` addressing tag.
    A264,
}

impl Arch {
    /// All recognized tags, in surface order.
    pub const ALL: [Self; 4] = [Self::X86, Self::X64, Self::A286, Self::A264];

    /// The exact header token for this tag.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::A286 => "286",
            Self::A264 => "264",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable parameter set for one generated document.
///
/// Memory sizes and the architecture tag pass through to the header verbatim;
/// the remaining fields drive sequence generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Physical memory size M in bytes.
    pub physical_mem: u64,
    /// Virtual memory size V in bytes.
    pub virtual_mem: u64,
    /// Addressing architecture tag.
    pub arch: Arch,
    /// Virtual page count P; generated indices range over `[0, P)`.
    pub num_pages: u32,
    /// Number of request sequences to emit.
    pub num_sequences: u32,
    /// Inclusive lower bound on per-sequence length.
    pub min_requests: u32,
    /// Inclusive upper bound on per-sequence length.
    pub max_requests: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            physical_mem: 4096,
            virtual_mem: 16_384,
            arch: Arch::X86,
            num_pages: 16,
            num_sequences: 3,
            min_requests: 10,
            max_requests: 100,
        }
    }
}

impl Config {
    /// Check the generation preconditions.
    ///
    /// Messages name the CLI flag carrying the offending value. Runs before
    /// any entropy is drawn; a violation means no partial document is ever
    /// produced.
    pub fn validate(&self) -> Result<()> {
        if self.min_requests > self.max_requests {
            bail!(
                "minimum requests per sequence (--min-req {}) cannot exceed the maximum (--max-req {})",
                self.min_requests,
                self.max_requests
            );
        }
        if self.num_pages == 0 {
            bail!("number of pages (--pages) must be positive");
        }
        Ok(())
    }

    /// Page size the consumer derives from this header, `V / P`.
    ///
    /// `None` when `num_pages == 0` (the header is invalid anyway).
    #[inline]
    #[must_use]
    pub const fn derived_page_size(&self) -> Option<u64> {
        if self.num_pages == 0 {
            None
        } else {
            Some(self.virtual_mem / self.num_pages as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_min_above_max() {
        let cfg = Config {
            min_requests: 20,
            max_requests: 10,
            ..Config::default()
        };
        let err = cfg.validate().expect_err("min > max must fail validation");
        assert!(err.to_string().contains("--min-req"));
    }

    #[test]
    fn rejects_zero_pages() {
        let cfg = Config {
            num_pages: 0,
            ..Config::default()
        };
        let err = cfg.validate().expect_err("P = 0 must fail validation");
        assert!(err.to_string().contains("--pages"));
    }

    #[test]
    fn zero_sequences_is_valid() {
        let cfg = Config {
            num_sequences: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn equal_min_and_max_is_valid() {
        let cfg = Config {
            min_requests: 5,
            max_requests: 5,
            ..Config::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn arch_tokens() {
        let tags: Vec<&str> = Arch::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(tags, ["x86", "x64", "286", "264"]);
        assert_eq!(Arch::default(), Arch::X86);
        assert_eq!(Arch::A286.to_string(), "286");
    }

    #[test]
    fn derived_page_size_matches_consumer() {
        // Defaults: 16384 / 16 = 1024, a power of two.
        assert_eq!(Config::default().derived_page_size(), Some(1024));
        let degenerate = Config {
            num_pages: 0,
            ..Config::default()
        };
        assert_eq!(degenerate.derived_page_size(), None);
    }
}
