// wordbag: bag-of-words presence vectors for a small text corpus
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: load and clean documents, build the vocabulary, encode each
// document, then compare two of them.

pub mod config;
pub mod corpus;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;

pub use error::{Error, Result};
