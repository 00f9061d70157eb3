use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const BINARY: &[char] = &['0', '1'];
const TERNARY: &[char] = &['0', '1', '2'];
const QUATERNARY: &[char] = &['0', '1', '2', '3'];
const OCTAL: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7'];
const DECIMAL: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const DUODECIMAL: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B'];
const HEXADECIMAL: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Positional numeral system with a fixed digit table.
/// Serialises to its lower-case name, e.g. `"hexadecimal"`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    Binary,
    Ternary,
    Quaternary,
    Octal,
    #[default]
    Decimal,
    Duodecimal,
    Hexadecimal,
}

impl NumeralSystem {
    pub const ALL: [NumeralSystem; 7] = [
        NumeralSystem::Binary,
        NumeralSystem::Ternary,
        NumeralSystem::Quaternary,
        NumeralSystem::Octal,
        NumeralSystem::Decimal,
        NumeralSystem::Duodecimal,
        NumeralSystem::Hexadecimal,
    ];

    pub fn digits(&self) -> &'static [char] {
        match self {
            NumeralSystem::Binary => BINARY,
            NumeralSystem::Ternary => TERNARY,
            NumeralSystem::Quaternary => QUATERNARY,
            NumeralSystem::Octal => OCTAL,
            NumeralSystem::Decimal => DECIMAL,
            NumeralSystem::Duodecimal => DUODECIMAL,
            NumeralSystem::Hexadecimal => HEXADECIMAL,
        }
    }

    pub fn base(&self) -> usize {
        self.digits().len()
    }
}
