//! Named shortcuts over the assembler and the generator.
//!
//! The `*_in` forms take explicit selectors; the short names use English
//! letters and decimal digits.

use crate::generators::random;
use crate::symbols::{self, Alphabet, Category, LetterCase, NumeralSystem, SPECIAL};

pub fn digits_in(system: NumeralSystem, length: i64) -> String {
    random::generate(length, symbols::digits_of(system))
}

pub fn letters_in(alphabet: Alphabet, case: LetterCase, length: i64) -> String {
    random::generate(length, alphabet.letters_in(case))
}

pub fn alnum_in(alphabet: Alphabet, system: NumeralSystem, length: i64) -> String {
    let pool = symbols::union(&[alphabet.letters(), system.digits()]);
    random::generate(length, &pool)
}

pub fn graph_in(alphabet: Alphabet, system: NumeralSystem, length: i64) -> String {
    let pool = symbols::union(&[alphabet.letters(), system.digits(), SPECIAL]);
    random::generate(length, &pool)
}

pub fn from_categories(categories: &[Category], length: i64) -> String {
    random::generate(length, &symbols::assemble(categories))
}

/// Decimal digits.
pub fn digits(length: i64) -> String {
    digits_in(NumeralSystem::Decimal, length)
}

pub fn binary_digits(length: i64) -> String {
    digits_in(NumeralSystem::Binary, length)
}

pub fn ternary_digits(length: i64) -> String {
    digits_in(NumeralSystem::Ternary, length)
}

pub fn quaternary_digits(length: i64) -> String {
    digits_in(NumeralSystem::Quaternary, length)
}

pub fn octal_digits(length: i64) -> String {
    digits_in(NumeralSystem::Octal, length)
}

pub fn decimal_digits(length: i64) -> String {
    digits_in(NumeralSystem::Decimal, length)
}

pub fn duodecimal_digits(length: i64) -> String {
    digits_in(NumeralSystem::Duodecimal, length)
}

pub fn hex_digits(length: i64) -> String {
    digits_in(NumeralSystem::Hexadecimal, length)
}

pub fn letters_lower(length: i64) -> String {
    letters_in(Alphabet::English, LetterCase::Lower, length)
}

pub fn letters_upper(length: i64) -> String {
    letters_in(Alphabet::English, LetterCase::Upper, length)
}

pub fn letters(length: i64) -> String {
    letters_in(Alphabet::English, LetterCase::Both, length)
}

pub fn alnum(length: i64) -> String {
    alnum_in(Alphabet::English, NumeralSystem::Decimal, length)
}

pub fn special(length: i64) -> String {
    random::generate(length, SPECIAL)
}

/// Letters, decimal digits and punctuation.
pub fn graph(length: i64) -> String {
    graph_in(Alphabet::English, NumeralSystem::Decimal, length)
}

pub fn personal(length: i64, symbols: &[char]) -> String {
    random::generate(length, symbols)
}
