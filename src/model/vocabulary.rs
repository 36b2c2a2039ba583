// Corpus vocabulary: every distinct whitespace token, sorted.
//
// The token set is collected into a BTreeSet, so deduplication and ordering
// do not depend on which document is visited first.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::info;

use crate::corpus::tokenize::tokenize;
use crate::corpus::Corpus;

/// Sorted, deduplicated tokens across a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Vocabulary {
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Collect the distinct tokens of every document, ascending by code point.
    pub fn build(corpus: &Corpus) -> Self {
        let texts = corpus.documents().iter().map(|d| d.text.as_str());
        let vocab = Self::from_texts(texts);
        info!(
            documents = corpus.len(),
            tokens = vocab.len(),
            "Built vocabulary"
        );
        vocab
    }

    /// Same as [`Vocabulary::build`] over bare texts.
    pub fn from_texts<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let unique: BTreeSet<&str> = texts
            .into_iter()
            .flat_map(|text| tokenize(text))
            .collect();
        Self {
            tokens: unique.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Index of a token, if it is in the vocabulary.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens.binary_search_by(|t| t.as_str().cmp(token)).ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sorted_unique() {
        let corpus = Corpus::from_texts([("d1", "a b b"), ("d2", "b c")]).unwrap();
        let vocab = Vocabulary::build(&corpus);
        assert_eq!(vocab.tokens(), &["a", "b", "c"]);
    }

    #[test]
    fn test_order_independent() {
        let fwd = Corpus::from_texts([("d1", "the cat sat"), ("d2", "a dog sat")]).unwrap();
        let rev = Corpus::from_texts([("d2", "a dog sat"), ("d1", "the cat sat")]).unwrap();
        assert_eq!(Vocabulary::build(&fwd), Vocabulary::build(&rev));
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = Vocabulary::build(&Corpus::default());
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
    }

    #[test]
    fn test_whitespace_runs_make_no_empty_tokens() {
        let vocab = Vocabulary::from_texts(["  x\t\ty \n z  ", ""]);
        assert_eq!(vocab.tokens(), &["x", "y", "z"]);
    }

    #[test]
    fn test_information_separators_delimit_tokens() {
        let vocab = Vocabulary::from_texts(["alice\u{1e}gatsby\u{1c}the"]);
        assert_eq!(vocab.tokens(), &["alice", "gatsby", "the"]);
    }

    #[test]
    fn test_code_point_order() {
        // Uppercase sorts before lowercase; digits before both.
        let vocab = Vocabulary::from_texts(["b A a 9"]);
        assert_eq!(vocab.tokens(), &["9", "A", "a", "b"]);
    }

    #[test]
    fn test_position_lookup() {
        let vocab = Vocabulary::from_texts(["alice gatsby the"]);
        assert_eq!(vocab.position("gatsby"), Some(1));
        assert_eq!(vocab.position("daisy"), None);
        assert_eq!(vocab.get(2), Some("the"));
        assert_eq!(vocab.get(3), None);
    }
}
