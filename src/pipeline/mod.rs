// Pipelines that chain corpus loading, vocabulary, vectors and comparison.

pub mod analysis;
