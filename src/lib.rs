//! Random strings built from numeral-system digits, alphabet letters,
//! punctuation and caller-supplied characters.
//!
//! Randomness comes from a thread-local, non-cryptographic generator. Do not
//! use the output for passwords, keys or other secrets.

pub mod cli;
pub mod error;
pub mod generators;
pub mod recipe;
pub mod symbols;

pub use error::PuntError;
pub use generators::category::{
    alnum, alnum_in, binary_digits, decimal_digits, digits, digits_in, duodecimal_digits,
    from_categories, graph, graph_in, hex_digits, letters, letters_in, letters_lower,
    letters_upper, octal_digits, personal, quaternary_digits, special, ternary_digits,
};
pub use generators::{PuntBuilder, StringGenerator, SymbolPool, generate, try_generate};
pub use recipe::Recipe;
pub use symbols::{Alphabet, Category, LetterCase, NumeralSystem};
