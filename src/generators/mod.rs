pub mod builder;
pub mod category;
pub mod pool;
pub mod random;
pub mod traits;

pub use builder::PuntBuilder;
pub use pool::SymbolPool;
pub use random::{generate, generate_with, try_generate};
pub use traits::StringGenerator;

#[cfg(test)]
pub use traits::MockStringGenerator;
