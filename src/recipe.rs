use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::PuntError;
use crate::generators::{StringGenerator, SymbolPool};
use crate::symbols::Category;

fn default_length() -> i64 {
    16
}

fn default_count() -> usize {
    1
}

/// Symbol set and output shape described as data.
///
/// ```yaml
/// length: 24
/// count: 3
/// sources:
///   - type: letters
///     alphabet: russian
///     case: lower
///   - type: digits
///     system: octal
///   - type: personal
///     symbols: "_-"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    #[serde(default = "default_length")]
    pub length: i64,
    #[serde(default = "default_count")]
    pub count: usize,
    /// Sources are concatenated, so overlapping entries weigh their shared
    /// characters more heavily.
    #[serde(default)]
    pub sources: Vec<Category>,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            length: default_length(),
            count: default_count(),
            sources: Vec::new(),
        }
    }
}

impl Recipe {
    pub fn from_yaml(yaml_str: &str) -> Result<Self, PuntError> {
        serde_yaml::from_str(yaml_str).map_err(|e| PuntError::RecipeParse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PuntError> {
        let path = path.as_ref();
        debug!("Loading recipe from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn to_yaml(&self) -> Result<String, PuntError> {
        serde_yaml::to_string(self).map_err(|e| PuntError::RecipeParse(e.to_string()))
    }

    pub fn pool(&self) -> SymbolPool {
        SymbolPool::from_categories(&self.sources)
    }

    /// Generates `count` strings of `length` characters.
    pub fn generate(&self) -> Vec<String> {
        let pool = self.pool();
        if pool.is_empty() {
            warn!("Recipe selects no symbols; every sample will be empty");
        }
        (0..self.count).map(|_| pool.generate(self.length)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{Alphabet, LetterCase, NumeralSystem};
    use std::io::Write;

    #[test]
    fn parses_full_recipe() {
        let recipe = Recipe::from_yaml(
            r#"
length: 24
count: 3
sources:
  - type: letters
    alphabet: russian
    case: lower
  - type: digits
    system: octal
  - type: special
  - type: personal
    symbols: "_-"
"#,
        )
        .unwrap();

        assert_eq!(recipe.length, 24);
        assert_eq!(recipe.count, 3);
        assert_eq!(
            recipe.sources,
            vec![
                Category::letters(Alphabet::Russian, LetterCase::Lower),
                Category::digits(NumeralSystem::Octal),
                Category::Special,
                Category::personal("_-".chars()),
            ]
        );
    }

    #[test]
    fn defaults_apply() {
        let recipe = Recipe::from_yaml("sources:\n  - type: digits").unwrap();
        assert_eq!(recipe.length, 16);
        assert_eq!(recipe.count, 1);
        assert_eq!(recipe.sources, vec![Category::digits(NumeralSystem::Decimal)]);
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let result = Recipe::from_yaml("sources:\n  - type: emoji");
        assert!(matches!(result, Err(PuntError::RecipeParse(_))));
    }

    #[test]
    fn generates_count_samples() {
        let recipe = Recipe {
            length: 12,
            count: 4,
            sources: vec![Category::digits(NumeralSystem::Hexadecimal)],
        };
        let samples = recipe.generate();
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|s| s.len() == 12));
        assert!(
            samples
                .iter()
                .all(|s| s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()))
        );
    }

    #[test]
    fn empty_sources_generate_empty_strings() {
        let samples = Recipe::default().generate();
        assert_eq!(samples, vec![String::new()]);
    }

    #[test]
    fn overlapping_sources_are_concatenated() {
        let recipe = Recipe {
            sources: vec![
                Category::letters(Alphabet::English, LetterCase::Lower),
                Category::personal("abc".chars()),
            ],
            ..Recipe::default()
        };
        assert_eq!(recipe.pool().len(), 29);
    }

    #[test]
    fn round_trips_through_yaml() {
        let recipe = Recipe {
            length: 8,
            count: 2,
            sources: vec![Category::Special],
        };
        let yaml = recipe.to_yaml().unwrap();
        assert_eq!(Recipe::from_yaml(&yaml).unwrap(), recipe);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "length: 5\nsources:\n  - type: digits\n    system: binary").unwrap();

        let recipe = Recipe::load(file.path()).unwrap();
        assert_eq!(recipe.length, 5);
        assert_eq!(recipe.sources, vec![Category::digits(NumeralSystem::Binary)]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = Recipe::load("/nonexistent/punt-recipe.yaml");
        assert!(matches!(result, Err(PuntError::Io(_))));
    }
}
