// Typed errors for the bag-of-words pipeline.
//
// Library functions return these so callers (and tests) can match on the
// failure. The binary wraps them in anyhow at the edges.

use std::path::PathBuf;

/// Everything that can go wrong while building or comparing a bag-of-words model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input document could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Vectors and vocabulary handed to the distinguisher are not aligned.
    #[error(
        "length mismatch: vocabulary has {vocabulary} tokens but vectors have {first} and {second} entries"
    )]
    LengthMismatch {
        vocabulary: usize,
        first: usize,
        second: usize,
    },

    /// Two input files map to the same document label.
    #[error("duplicate document label `{0}`")]
    DuplicateLabel(String),

    /// A presence vector holds something other than 0 or 1.
    #[error("presence vector entry {index} is {value}, expected 0 or 1")]
    NonBinary { index: usize, value: u8 },

    /// A comparison named a document that is not in the corpus.
    #[error("no document labelled `{0}` in the corpus")]
    UnknownDocument(String),

    /// A document was asked to be compared with itself.
    #[error("cannot compare document `{0}` with itself")]
    SelfComparison(String),

    /// Two labels differ only by case, so their report keys would coincide.
    #[error("labels `{first}` and `{second}` differ only by case and cannot be told apart in the report")]
    AmbiguousLabels { first: String, second: String },

    /// Comparison needs two documents but the corpus has fewer.
    #[error("need at least 2 documents to compare, got {0}")]
    TooFewDocuments(usize),

    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value `{value}` for {var}")]
    InvalidConfig { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
