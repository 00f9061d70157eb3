//! Uniform sampling with replacement.
//!
//! Draws come from `rand::rng()`, a thread-local generator, so concurrent
//! callers never share state. It is not meant for secrets: the output is
//! suitable for fixtures and placeholder tokens, not for passwords or keys.

use log::trace;
use rand::Rng;

use crate::error::PuntError;

/// Builds a string of `length` characters, each picked independently and
/// uniformly from `symbols`. Non-positive lengths and empty symbol sets give
/// an empty string.
pub fn generate(length: i64, symbols: &[char]) -> String {
    generate_with(&mut rand::rng(), length, symbols)
}

/// Same as [`generate`] but rejects an absent symbol collection.
pub fn try_generate(length: i64, symbols: Option<&[char]>) -> Result<String, PuntError> {
    let symbols = symbols.ok_or(PuntError::MissingSymbols)?;
    Ok(generate(length, symbols))
}

/// [`generate`] over a caller-supplied RNG, with the same empty-result rules.
///
/// ```
/// use punt::generators::generate_with;
///
/// let mut rng = rand::rng();
/// assert_eq!(generate_with(&mut rng, 4, &['x']), "xxxx");
/// assert_eq!(generate_with(&mut rng, -4, &['x']), "");
/// ```
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: i64, symbols: &[char]) -> String {
    let length = usize::try_from(length).unwrap_or(0);
    if length == 0 || symbols.is_empty() {
        return String::new();
    }

    trace!("Drawing {} symbols from a pool of {}", length, symbols.len());
    (0..length)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[quickcheck]
    fn generates_requested_length(len: u8, symbols: Vec<char>) -> TestResult {
        if symbols.is_empty() {
            return TestResult::discard();
        }
        let result = generate(len as i64, &symbols);
        TestResult::from_bool(result.chars().count() == len as usize)
    }

    #[quickcheck]
    fn generates_only_given_symbols(len: u8, symbols: Vec<char>) -> bool {
        generate(len as i64, &symbols)
            .chars()
            .all(|c| symbols.contains(&c))
    }

    #[quickcheck]
    fn non_positive_length_is_empty(len: i64, symbols: Vec<char>) -> bool {
        let len = -len.saturating_abs();
        generate(len, &symbols).is_empty()
    }

    #[quickcheck]
    fn empty_symbols_is_empty(len: i64) -> bool {
        generate(len, &[]).is_empty()
    }

    #[test]
    fn absent_symbols_is_rejected() {
        let result = try_generate(10, None);
        assert!(matches!(result, Err(PuntError::MissingSymbols)));
    }

    #[test]
    fn present_symbols_generate() {
        let result = try_generate(10, Some(&['.'][..])).unwrap();
        assert_eq!(result, "..........");
    }

    #[test]
    fn present_but_empty_symbols_is_not_an_error() {
        assert_eq!(try_generate(10, Some(&[][..])).unwrap(), "");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let symbols: Vec<char> = ('a'..='z').collect();
        let a = generate_with(&mut StdRng::seed_from_u64(7), 32, &symbols);
        let b = generate_with(&mut StdRng::seed_from_u64(7), 32, &symbols);
        assert_eq!(a, b);
    }

    #[test]
    fn every_symbol_eventually_appears() {
        let symbols = ['0', '1', '2', '3'];
        let result = generate(4096, &symbols);
        assert!(symbols.iter().all(|c| result.contains(*c)));
    }

    #[test]
    fn duplicates_increase_weight() {
        let symbols = ['a', 'a', 'a', 'b'];
        let result = generate_with(&mut StdRng::seed_from_u64(42), 8000, &symbols);
        let a = result.chars().filter(|c| *c == 'a').count();
        // Expected 6000.
        assert!((5400..6600).contains(&a), "got {a} a's");
    }
}
