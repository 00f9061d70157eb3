use crate::generators::random;
use crate::generators::traits::StringGenerator;
use crate::symbols::{self, Category};

/// An owned candidate collection. Duplicates are kept and weigh the draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolPool {
    symbols: Vec<char>,
}

impl SymbolPool {
    pub fn new(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    pub fn from_categories(categories: &[Category]) -> Self {
        Self::new(symbols::assemble(categories))
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<&[&[char]]> for SymbolPool {
    fn from(sources: &[&[char]]) -> Self {
        Self::new(symbols::union(sources))
    }
}

impl StringGenerator for SymbolPool {
    fn generate(&self, length: i64) -> String {
        random::generate(length, &self.symbols)
    }
}
