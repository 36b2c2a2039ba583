// Distinguishing tokens: what one document has that the other lacks.
//
// Both vectors must be encoded against the same vocabulary. A position lands
// in at most one of the two lists: first-only when the first bit is set and
// the second is clear, second-only for the reverse, neither otherwise.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::info;

use super::vector::DocumentVector;
use super::vocabulary::Vocabulary;
use crate::error::{Error, Result};

/// Tokens present in one document and absent from the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distinction {
    /// Report key, e.g. `IN_GATSBY_not_in_alice`
    pub key: String,
    /// Tokens in vocabulary (alphabetical) order
    pub tokens: Vec<String>,
}

/// The two directions of a pairwise comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distinguishers {
    pub first_only: Distinction,
    pub second_only: Distinction,
}

impl Distinguishers {
    /// Compare two labelled vectors over their shared vocabulary.
    pub fn compare(
        first: (&str, &DocumentVector),
        second: (&str, &DocumentVector),
        vocabulary: &Vocabulary,
    ) -> Result<Self> {
        check_distinct_keys(first.0, second.0)?;
        let (first_tokens, second_tokens) =
            find_distinguishing_tokens(first.1, second.1, vocabulary)?;

        info!(
            first = first.0,
            second = second.0,
            first_only = first_tokens.len(),
            second_only = second_tokens.len(),
            "Computed distinguishing tokens"
        );

        Ok(Self {
            first_only: Distinction {
                key: distinction_key(first.0, second.0),
                tokens: first_tokens,
            },
            second_only: Distinction {
                key: distinction_key(second.0, first.0),
                tokens: second_tokens,
            },
        })
    }

    /// Both directions, first document's first.
    pub fn iter(&self) -> impl Iterator<Item = &Distinction> {
        [&self.first_only, &self.second_only].into_iter()
    }
}

impl Serialize for Distinguishers {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        for d in self.iter() {
            map.serialize_entry(&d.key, &d.tokens)?;
        }
        map.end()
    }
}

/// Report key for "in `present`, not in `absent`".
pub fn distinction_key(present: &str, absent: &str) -> String {
    format!(
        "IN_{}_not_in_{}",
        present.to_uppercase(),
        absent.to_lowercase()
    )
}

/// Reject label pairs whose two report keys would be the same string.
///
/// Keys upper-case one label and lower-case the other, so labels equal up
/// to case (`Alice` / `alice`) would collapse into a single key.
pub fn check_distinct_keys(first: &str, second: &str) -> Result<()> {
    if first == second {
        return Err(Error::SelfComparison(first.to_string()));
    }
    if distinction_key(first, second) == distinction_key(second, first) {
        return Err(Error::AmbiguousLabels {
            first: first.to_string(),
            second: second.to_string(),
        });
    }
    Ok(())
}

/// Split the vocabulary into first-only and second-only tokens.
///
/// Fails with [`Error::LengthMismatch`] unless both vectors are exactly as
/// long as the vocabulary.
pub fn find_distinguishing_tokens(
    first: &DocumentVector,
    second: &DocumentVector,
    vocabulary: &Vocabulary,
) -> Result<(Vec<String>, Vec<String>)> {
    if first.len() != vocabulary.len() || second.len() != vocabulary.len() {
        return Err(Error::LengthMismatch {
            vocabulary: vocabulary.len(),
            first: first.len(),
            second: second.len(),
        });
    }

    let mut first_only = Vec::new();
    let mut second_only = Vec::new();
    for (i, token) in vocabulary.iter().enumerate() {
        match (first.bits()[i], second.bits()[i]) {
            (1, 0) => first_only.push(token.to_string()),
            (0, 1) => second_only.push(token.to_string()),
            _ => {}
        }
    }
    Ok((first_only, second_only))
}
