// Bag-of-words analysis pipeline: load -> clean -> vocabulary -> vectors -> compare.
//
// Inputs are passed in explicitly; nothing here reads globals or the
// environment. Every stage produces a fresh value from the previous one.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::model::distinguish::{check_distinct_keys, Distinguishers};
use crate::model::vector::{vectorize, DocumentVector};
use crate::model::vocabulary::Vocabulary;

/// A document's presence vector, tagged with its label.
#[derive(Debug, Clone, Serialize)]
pub struct LabelledVector {
    pub label: String,
    /// Number of vocabulary tokens present in the document
    pub present: usize,
    pub vector: DocumentVector,
}

/// Everything one run of the pipeline produces.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub corpus: Corpus,
    pub vocabulary: Vocabulary,
    pub vectors: Vec<LabelledVector>,
    pub distinguishers: Distinguishers,
}

impl Analysis {
    pub fn vector(&self, label: &str) -> Option<&DocumentVector> {
        self.vectors
            .iter()
            .find(|v| v.label == label)
            .map(|v| &v.vector)
    }
}

/// Run the full pipeline over the given files.
///
/// `pair` names the two documents to compare by label. With `None`, the
/// first two files in input order are compared.
pub fn run<P: AsRef<Path>>(paths: &[P], pair: Option<(&str, &str)>) -> Result<Analysis> {
    let corpus = Corpus::from_files(paths)?;
    analyze(corpus, pair)
}

/// Build the model over an already-loaded corpus and compare two documents.
pub fn analyze(corpus: Corpus, pair: Option<(&str, &str)>) -> Result<Analysis> {
    let (first, second) = select_pair(&corpus, pair)?;
    let vocabulary = Vocabulary::build(&corpus);
    let vectors = vectorize_corpus(&corpus, &vocabulary);

    let lookup = |label: &str| {
        vectors
            .iter()
            .find(|v| v.label == label)
            .map(|v| &v.vector)
            .ok_or_else(|| Error::UnknownDocument(label.to_string()))
    };
    let distinguishers =
        Distinguishers::compare((first, lookup(first)?), (second, lookup(second)?), &vocabulary)?;

    info!(
        documents = corpus.len(),
        vocabulary = vocabulary.len(),
        first,
        second,
        "Analysis complete"
    );

    Ok(Analysis {
        corpus,
        vocabulary,
        vectors,
        distinguishers,
    })
}

/// Encode every document in the corpus against the shared vocabulary.
pub fn vectorize_corpus(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<LabelledVector> {
    let vectors: Vec<LabelledVector> = corpus
        .documents()
        .iter()
        .map(|doc| {
            let vector = vectorize(&doc.text, vocabulary);
            LabelledVector {
                label: doc.label.clone(),
                present: vector.ones(),
                vector,
            }
        })
        .collect();
    info!(documents = vectors.len(), "Built document vectors");
    vectors
}

/// Resolve which two documents to compare.
fn select_pair<'a>(
    corpus: &'a Corpus,
    pair: Option<(&'a str, &'a str)>,
) -> Result<(&'a str, &'a str)> {
    let (first, second) = match pair {
        Some((first, second)) => {
            for label in [first, second] {
                if corpus.get(label).is_none() {
                    return Err(Error::UnknownDocument(label.to_string()));
                }
            }
            (first, second)
        }
        None => {
            let mut labels = corpus.labels();
            match (labels.next(), labels.next()) {
                (Some(first), Some(second)) => (first, second),
                _ => return Err(Error::TooFewDocuments(corpus.len())),
            }
        }
    };
    check_distinct_keys(first, second)?;
    Ok((first, second))
}
