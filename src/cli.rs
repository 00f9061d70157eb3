use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use crate::error::PuntError;
use crate::generators::{StringGenerator, SymbolPool, try_generate};
use crate::recipe::Recipe;
use crate::symbols::{self, Alphabet, Category, LetterCase, NumeralSystem, SPECIAL};

const DEFAULT_LENGTH: i64 = 16;
const DEFAULT_COUNT: usize = 1;

#[derive(Debug, Parser)]
#[command(name = "punt", version, about = "Print random strings drawn from symbol sets")]
pub struct Cli {
    /// Characters per sample. Falls back to PUNT_LENGTH, then 16.
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Number of samples to print. Defaults to 1, or to the recipe's count.
    #[arg(short, long)]
    pub count: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Digits of a numeral system.
    Digits {
        #[arg(short, long, value_enum, default_value_t = NumeralSystem::Decimal)]
        system: NumeralSystem,
    },
    /// Letters of an alphabet.
    Letters {
        #[arg(short, long, value_enum, default_value_t = Alphabet::English)]
        alphabet: Alphabet,
        #[arg(long, value_enum, default_value_t = LetterCase::Both)]
        case: LetterCase,
    },
    /// Letters and digits.
    Alnum {
        #[arg(short, long, value_enum, default_value_t = Alphabet::English)]
        alphabet: Alphabet,
        #[arg(short, long, value_enum, default_value_t = NumeralSystem::Decimal)]
        system: NumeralSystem,
    },
    /// Punctuation only.
    Special,
    /// Letters, digits and punctuation.
    Graph {
        #[arg(short, long, value_enum, default_value_t = Alphabet::English)]
        alphabet: Alphabet,
        #[arg(short, long, value_enum, default_value_t = NumeralSystem::Decimal)]
        system: NumeralSystem,
    },
    /// Characters given on the command line.
    Personal {
        #[arg(short = 'S', long)]
        symbols: Option<String>,
    },
    /// Symbol set, length and count read from a YAML file.
    Recipe { path: PathBuf },
}

fn env_length() -> Option<i64> {
    env::var("PUNT_LENGTH").ok()?.parse().ok()
}

impl Cli {
    pub fn resolved_length(&self) -> i64 {
        self.length.or_else(env_length).unwrap_or(DEFAULT_LENGTH)
    }

    pub fn resolved_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }
}

pub fn sample(generator: &dyn StringGenerator, length: i64, count: usize) -> Vec<String> {
    (0..count).map(|_| generator.generate(length)).collect()
}

/// Produces the samples the invocation asks for.
pub fn run(cli: &Cli) -> Result<Vec<String>, PuntError> {
    let length = cli.resolved_length();
    let count = cli.resolved_count();
    debug!("Running {:?} with length {} and count {}", cli.command, length, count);

    let pool = match &cli.command {
        Command::Recipe { path } => {
            let mut recipe = Recipe::load(path)?;
            if let Some(length) = cli.length {
                recipe.length = length;
            }
            if let Some(count) = cli.count {
                recipe.count = count;
            }
            return Ok(recipe.generate());
        }
        Command::Personal { symbols } => {
            let symbols: Option<Vec<char>> = symbols.as_ref().map(|s| s.chars().collect());
            return (0..count)
                .map(|_| try_generate(length, symbols.as_deref()))
                .collect();
        }
        Command::Digits { system } => SymbolPool::from_categories(&[Category::digits(*system)]),
        Command::Letters { alphabet, case } => {
            SymbolPool::from_categories(&[Category::letters(*alphabet, *case)])
        }
        Command::Alnum { alphabet, system } => {
            SymbolPool::new(symbols::union(&[alphabet.letters(), system.digits()]))
        }
        Command::Special => SymbolPool::new(SPECIAL.to_vec()),
        Command::Graph { alphabet, system } => SymbolPool::new(symbols::union(&[
            alphabet.letters(),
            system.digits(),
            SPECIAL,
        ])),
    };

    Ok(sample(&pool, length, count))
}
