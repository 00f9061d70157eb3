use std::collections::BTreeSet;

use log::debug;

use crate::generators::random;
use crate::generators::traits::StringGenerator;
use crate::symbols::{Alphabet, Category, LetterCase, NumeralSystem, SPECIAL};

/// Fluent accumulator of symbol categories.
///
/// Characters collect into a set, so selecting overlapping categories never
/// skews the draw. `build` can be called any number of times and leaves the
/// selection in place; start a new builder to reset it.
///
/// ```
/// use punt::PuntBuilder;
///
/// let token = PuntBuilder::new().hexadecimal().personal(['-']).build(12);
/// assert_eq!(token.chars().count(), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuntBuilder {
    symbols: BTreeSet<char>,
}

impl PuntBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &BTreeSet<char> {
        &self.symbols
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Decimal digits.
    pub fn digits(&mut self) -> &mut Self {
        self.digits_of(NumeralSystem::default())
    }

    pub fn digits_of(&mut self, system: NumeralSystem) -> &mut Self {
        self.personal(system.digits().iter().copied())
    }

    pub fn binary(&mut self) -> &mut Self {
        self.digits_of(NumeralSystem::Binary)
    }

    pub fn ternary(&mut self) -> &mut Self {
        self.digits_of(NumeralSystem::Ternary)
    }

    pub fn quaternary(&mut self) -> &mut Self {
        self.digits_of(NumeralSystem::Quaternary)
    }

    pub fn octal(&mut self) -> &mut Self {
        self.digits_of(NumeralSystem::Octal)
    }

    pub fn decimal(&mut self) -> &mut Self {
        self.digits_of(NumeralSystem::Decimal)
    }

    pub fn duodecimal(&mut self) -> &mut Self {
        self.digits_of(NumeralSystem::Duodecimal)
    }

    pub fn hexadecimal(&mut self) -> &mut Self {
        self.digits_of(NumeralSystem::Hexadecimal)
    }

    /// Upper and lower case English letters.
    pub fn alpha(&mut self) -> &mut Self {
        self.alpha_of(Alphabet::default())
    }

    pub fn alpha_of(&mut self, alphabet: Alphabet) -> &mut Self {
        self.personal(alphabet.letters().iter().copied())
    }

    pub fn lower(&mut self) -> &mut Self {
        self.lower_of(Alphabet::default())
    }

    pub fn lower_of(&mut self, alphabet: Alphabet) -> &mut Self {
        self.personal(alphabet.letters_in(LetterCase::Lower).iter().copied())
    }

    pub fn upper(&mut self) -> &mut Self {
        self.upper_of(Alphabet::default())
    }

    pub fn upper_of(&mut self, alphabet: Alphabet) -> &mut Self {
        self.personal(alphabet.letters_in(LetterCase::Upper).iter().copied())
    }

    pub fn special(&mut self) -> &mut Self {
        self.personal(SPECIAL.iter().copied())
    }

    pub fn personal(&mut self, symbols: impl IntoIterator<Item = char>) -> &mut Self {
        self.symbols.extend(symbols);
        self
    }

    pub fn category(&mut self, category: &Category) -> &mut Self {
        let mut symbols = Vec::new();
        category.extend_into(&mut symbols);
        self.personal(symbols)
    }

    pub fn build(&self, length: i64) -> String {
        debug!(
            "Building string of length {} from {} selected symbols",
            length,
            self.symbols.len()
        );
        let symbols: Vec<char> = self.symbols.iter().copied().collect();
        random::generate(length, &symbols)
    }
}

impl StringGenerator for PuntBuilder {
    fn generate(&self, length: i64) -> String {
        self.build(length)
    }
}
