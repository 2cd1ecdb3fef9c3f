/// Misconfiguration detected while constructing a picker.
///
/// These are caller bugs: a picker built from an invalid configuration cannot keep a single
/// item centered, so construction fails instead of rendering a broken picker.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("visible count must be an odd number to have a centered selection (got {0})")]
    VisibleCountNotOdd(usize),
    #[error(
        "items must be unique in value mode (index {first} equals index {second}); use the index-based picker for duplicate items"
    )]
    DuplicateItems { first: usize, second: usize },
}
