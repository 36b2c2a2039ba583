// Corpus construction — load, clean and label input documents.

pub mod loader;
pub mod normalize;
pub mod tokenize;

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};

/// One cleaned document and the label it is known by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub label: String,
    /// Whitespace-joined, lowercase, punctuation-free text
    pub text: String,
}

/// Labelled, normalized documents in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Load every file, normalize its text and label it by file name.
    ///
    /// Fails on the first unreadable file; nothing is returned for the
    /// files that did load.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut corpus = Corpus::default();
        for path in paths {
            let path = path.as_ref();
            let raw = loader::load_text_from_file(path)?;
            let label = loader::label_for(path);
            info!(label = %label, path = %path.display(), "Loaded document");
            corpus.push(label, normalize::normalize(&raw))?;
        }
        Ok(corpus)
    }

    /// Build a corpus from already-normalized `(label, text)` pairs.
    pub fn from_texts<L, T, I>(texts: I) -> Result<Self>
    where
        L: Into<String>,
        T: Into<String>,
        I: IntoIterator<Item = (L, T)>,
    {
        let mut corpus = Corpus::default();
        for (label, text) in texts {
            corpus.push(label.into(), text.into())?;
        }
        Ok(corpus)
    }

    fn push(&mut self, label: String, text: String) -> Result<()> {
        if self.get(&label).is_some() {
            return Err(Error::DuplicateLabel(label));
        }
        self.documents.push(Document { label, text });
        Ok(())
    }

    /// Text of the document with this label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.documents
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.text.as_str())
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
