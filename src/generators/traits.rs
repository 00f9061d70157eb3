#[cfg_attr(test, mockall::automock)]
pub trait StringGenerator: Send + Sync {
    /// Produces `length` random characters, or an empty string when nothing
    /// can be drawn.
    fn generate(&self, length: i64) -> String;
}
