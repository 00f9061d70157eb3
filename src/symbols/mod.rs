//! Symbol tables and the assembler that flattens selected categories into one
//! candidate collection.

pub mod alphabet;
pub mod numeral;

pub use alphabet::{Alphabet, LetterCase};
pub use numeral::NumeralSystem;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PuntError;

/// Printable ASCII punctuation.
pub const SPECIAL: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// One named source of candidate characters.
/// Serialises to: {"type": "letters", "alphabet": "russian", "case": "lower"}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Category {
    Digits {
        #[serde(default)]
        system: NumeralSystem,
    },
    Letters {
        #[serde(default)]
        alphabet: Alphabet,
        #[serde(default)]
        case: LetterCase,
    },
    Special,
    Personal {
        symbols: String,
    },
}

impl Category {
    pub fn digits(system: NumeralSystem) -> Self {
        Category::Digits { system }
    }

    pub fn letters(alphabet: Alphabet, case: LetterCase) -> Self {
        Category::Letters { alphabet, case }
    }

    pub fn personal(symbols: impl IntoIterator<Item = char>) -> Self {
        Category::Personal {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Appends this category's characters to `out`, keeping any duplicates.
    pub fn extend_into(&self, out: &mut Vec<char>) {
        match self {
            Category::Digits { system } => out.extend_from_slice(digits_of(*system)),
            Category::Letters { alphabet, case } => {
                out.extend_from_slice(alphabet.letters_in(*case))
            }
            Category::Special => out.extend_from_slice(SPECIAL),
            Category::Personal { symbols } => out.extend(symbols.chars()),
        }
    }
}

pub fn digits_of(system: NumeralSystem) -> &'static [char] {
    system.digits()
}

/// Letters of `alphabet` restricted to `case`. An absent alphabet is rejected.
pub fn letters_of(
    alphabet: Option<Alphabet>,
    case: LetterCase,
) -> Result<&'static [char], PuntError> {
    let alphabet = alphabet
        .ok_or_else(|| PuntError::InvalidArgument("an alphabet must be supplied".to_string()))?;
    Ok(alphabet.letters_in(case))
}

/// Concatenates `sources` without removing duplicates; a character present in
/// several sources is drawn proportionally more often.
pub fn union(sources: &[&[char]]) -> Vec<char> {
    sources.concat()
}

pub fn assemble(categories: &[Category]) -> Vec<char> {
    let mut symbols = Vec::new();
    for category in categories {
        category.extend_into(&mut symbols);
    }
    debug!(
        "Assembled {} candidate symbols from {} categories",
        symbols.len(),
        categories.len()
    );
    symbols
}
