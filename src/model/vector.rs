// Binary presence vectors over a vocabulary.

use std::collections::HashSet;

use serde::Serialize;

use super::vocabulary::Vocabulary;
use crate::corpus::tokenize::tokenize;
use crate::error::{Error, Result};

/// One 0/1 entry per vocabulary token, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocumentVector {
    bits: Vec<u8>,
}

impl DocumentVector {
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    /// Number of vocabulary tokens present in the document.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

impl TryFrom<Vec<u8>> for DocumentVector {
    type Error = Error;

    /// Wrap precomputed bits, rejecting anything other than 0 or 1.
    fn try_from(bits: Vec<u8>) -> Result<Self> {
        if let Some((index, &value)) = bits.iter().enumerate().find(|(_, b)| **b > 1) {
            return Err(Error::NonBinary { index, value });
        }
        Ok(Self { bits })
    }
}

/// Encode a normalized document against a vocabulary.
///
/// Entry `i` is 1 when vocabulary token `i` occurs in the document at least
/// once (exact token match), 0 otherwise. The result is always as long as
/// the vocabulary.
pub fn vectorize(document: &str, vocabulary: &Vocabulary) -> DocumentVector {
    let words: HashSet<&str> = tokenize(document).collect();
    let bits = vocabulary
        .iter()
        .map(|token| u8::from(words.contains(token)))
        .collect();
    DocumentVector { bits }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_not_count() {
        let vocab = Vocabulary::from_texts(["a b c"]);
        let v = vectorize("a b b", &vocab);
        assert_eq!(v.bits(), &[1, 1, 0]);
        assert_eq!(v.ones(), 2);
    }

    #[test]
    fn test_exact_token_match_only() {
        // "the" is a substring of "there" but not a token of the document.
        let vocab = Vocabulary::from_texts(["the there"]);
        let v = vectorize("there", &vocab);
        assert_eq!(v.bits(), &[0, 1]);
    }

    #[test]
    fn test_information_separator_splits_document() {
        let vocab = Vocabulary::from_texts(["a b c"]);
        assert_eq!(vectorize("a\u{1f}c", &vocab).bits(), &[1, 0, 1]);
    }

    #[test]
    fn test_try_from_rejects_non_binary() {
        let err = DocumentVector::try_from(vec![0, 1, 2, 1]).unwrap_err();
        assert!(matches!(err, Error::NonBinary { index: 2, value: 2 }));

        let v = DocumentVector::try_from(vec![1, 0, 1]).unwrap();
        assert_eq!(v.ones(), 2);
        assert!(DocumentVector::try_from(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let v = vectorize("anything at all", &Vocabulary::default());
        assert!(v.is_empty());
    }

    #[test]
    fn test_length_matches_vocabulary() {
        let vocab = Vocabulary::from_texts(["one two three four five"]);
        for doc in ["", "one", "five four", "six seven"] {
            assert_eq!(vectorize(doc, &vocab).len(), vocab.len());
        }
    }
}
