// crates/pagegen-core/src/sequence.rs

//! One line of uniformly random page indices.
//!
//! Draws are independent and repeats are expected; a repeated index models a
//! repeated touch of the same page, which is exactly what replacement-policy
//! simulations need to see.

use rand::Rng;

/// Render `n` uniform draws from `[0, num_pages)` as a single line of
/// space-separated decimal indices.
///
/// Returns the empty string when `n == 0`. No ordering or uniqueness is
/// guaranteed among the indices. The RNG is an explicit parameter; seed it
/// for byte-identical output.
///
/// # Panics
/// Panics if `num_pages == 0` (the sample range would be empty).
#[must_use]
pub fn render_sequence(rng: &mut impl Rng, n: u32, num_pages: u32) -> String {
    assert!(num_pages > 0, "render_sequence: num_pages must be > 0");
    let indices: Vec<String> = (0..n)
        .map(|_| rng.random_range(0..num_pages).to_string())
        .collect();
    indices.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn empty_for_zero_requests() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(render_sequence(&mut rng, 0, 8), "");
    }

    #[test]
    fn token_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let line = render_sequence(&mut rng, 64, 5);
        let tokens: Vec<u32> = line
            .split(' ')
            .map(|t| t.parse().expect("decimal page index"))
            .collect();
        assert_eq!(tokens.len(), 64);
        assert!(tokens.iter().all(|&p| p < 5));
    }

    #[test]
    fn single_request_has_no_separator() {
        let mut rng = StdRng::seed_from_u64(2);
        let line = render_sequence(&mut rng, 1, 16);
        assert!(!line.contains(' '));
        assert!(line.parse::<u32>().expect("decimal page index") < 16);
    }

    #[test]
    fn identical_seeds_render_identically() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            render_sequence(&mut a, 32, 16),
            render_sequence(&mut b, 32, 16)
        );
    }

    #[test]
    #[should_panic(expected = "num_pages must be > 0")]
    fn rejects_zero_pages() {
        let mut rng = StdRng::seed_from_u64(3);
        let _ = render_sequence(&mut rng, 4, 0);
    }
}
