use clap::ValueEnum;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const ENGLISH_LOWER: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
const ENGLISH_UPPER: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const RUSSIAN_LOWER: &[char] = &[
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п', 'р',
    'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];
const RUSSIAN_UPPER: &[char] = &[
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

// Final sigma has no upper-case form and is left out.
const GREEK_LOWER: &[char] = &[
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ',
    'τ', 'υ', 'φ', 'χ', 'ψ', 'ω',
];
const GREEK_UPPER: &[char] = &[
    'Α', 'Β', 'Γ', 'Δ', 'Ε', 'Ζ', 'Η', 'Θ', 'Ι', 'Κ', 'Λ', 'Μ', 'Ν', 'Ξ', 'Ο', 'Π', 'Ρ', 'Σ',
    'Τ', 'Υ', 'Φ', 'Χ', 'Ψ', 'Ω',
];

static ENGLISH_BOTH: Lazy<Vec<char>> = Lazy::new(|| [ENGLISH_UPPER, ENGLISH_LOWER].concat());
static RUSSIAN_BOTH: Lazy<Vec<char>> = Lazy::new(|| [RUSSIAN_UPPER, RUSSIAN_LOWER].concat());
static GREEK_BOTH: Lazy<Vec<char>> = Lazy::new(|| [GREEK_UPPER, GREEK_LOWER].concat());

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    #[default]
    English,
    Russian,
    Greek,
}

/// Which half of an alphabet to draw from. `Both` is upper case followed by lower case.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    Lower,
    Upper,
    #[default]
    Both,
}

impl Alphabet {
    pub const ALL: [Alphabet; 3] = [Alphabet::English, Alphabet::Russian, Alphabet::Greek];

    pub fn lower(&self) -> &'static [char] {
        match self {
            Alphabet::English => ENGLISH_LOWER,
            Alphabet::Russian => RUSSIAN_LOWER,
            Alphabet::Greek => GREEK_LOWER,
        }
    }

    pub fn upper(&self) -> &'static [char] {
        match self {
            Alphabet::English => ENGLISH_UPPER,
            Alphabet::Russian => RUSSIAN_UPPER,
            Alphabet::Greek => GREEK_UPPER,
        }
    }

    pub fn letters(&self) -> &'static [char] {
        match self {
            Alphabet::English => ENGLISH_BOTH.as_slice(),
            Alphabet::Russian => RUSSIAN_BOTH.as_slice(),
            Alphabet::Greek => GREEK_BOTH.as_slice(),
        }
    }

    pub fn letters_in(&self, case: LetterCase) -> &'static [char] {
        match case {
            LetterCase::Lower => self.lower(),
            LetterCase::Upper => self.upper(),
            LetterCase::Both => self.letters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cases_are_consistent() {
        for alphabet in Alphabet::ALL {
            assert_eq!(alphabet.lower().len(), alphabet.upper().len(), "{alphabet:?}");
            assert!(alphabet.lower().iter().all(|c| c.is_lowercase()));
            assert!(alphabet.upper().iter().all(|c| c.is_uppercase()));
            let upper: Vec<char> = alphabet
                .lower()
                .iter()
                .flat_map(|c| c.to_uppercase())
                .collect();
            assert_eq!(upper, alphabet.upper(), "{alphabet:?}");
        }
    }

    #[test]
    fn both_is_upper_then_lower() {
        for alphabet in Alphabet::ALL {
            let expected = [alphabet.upper(), alphabet.lower()].concat();
            assert_eq!(alphabet.letters(), expected.as_slice());
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(Alphabet::English.letters().len(), 52);
        assert_eq!(Alphabet::Russian.letters().len(), 66);
        assert_eq!(Alphabet::Greek.letters().len(), 48);
    }

    #[test]
    fn letters_in_selects_case() {
        let alphabet = Alphabet::Russian;
        assert_eq!(alphabet.letters_in(LetterCase::Lower), alphabet.lower());
        assert_eq!(alphabet.letters_in(LetterCase::Upper), alphabet.upper());
        assert_eq!(alphabet.letters_in(LetterCase::Both), alphabet.letters());
    }
}
