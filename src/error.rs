use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuntError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No symbols supplied to generate from")]
    MissingSymbols,

    #[error("Recipe parse error: {0}")]
    RecipeParse(String),

    #[error("Recipe could not be read: {0}")]
    Io(#[from] std::io::Error),
}
