// Terminal output for the bag-of-words report.
//
// The `format_*` helpers build plain lines so they can be tested; the
// `display_*` functions add color and print to stdout.

use colored::Colorize;

use super::truncate_chars;
use crate::corpus::Document;
use crate::model::distinguish::{Distinction, Distinguishers};
use crate::model::vector::DocumentVector;
use crate::model::vocabulary::Vocabulary;

/// Preview of one cleaned document: its label and leading text.
pub fn format_document_preview(doc: &Document, preview_chars: usize) -> String {
    format!(
        "after cleaning {}:\n{}...MORE TEXT...",
        doc.label,
        truncate_chars(&doc.text, preview_chars)
    )
}

/// Summary of one distinguisher list: key, count and leading examples.
pub fn format_distinction(distinction: &Distinction, example_count: usize) -> String {
    let examples: Vec<&str> = distinction
        .tokens
        .iter()
        .take(example_count)
        .map(String::as_str)
        .collect();
    format!(
        "tokens {} -> count = {};\nselected examples = [{}]",
        distinction.key,
        distinction.tokens.len(),
        examples.join(", ")
    )
}

/// Print the cleaned-text preview of every document.
pub fn display_document_previews(documents: &[Document], preview_chars: usize) {
    println!("\n{}", format!("=== Corpus ({} documents) ===", documents.len()).bold());
    println!();
    for doc in documents {
        println!("{}\n", format_document_preview(doc, preview_chars));
    }
}

/// Print both directions of a comparison.
pub fn display_distinguishers(distinguishers: &Distinguishers, example_count: usize) {
    println!("{}", "=== Distinguishing tokens ===".bold());
    println!();
    for distinction in distinguishers.iter() {
        println!("{}\n", format_distinction(distinction, example_count));
    }
}

/// Print the vocabulary, one token per line.
pub fn display_vocabulary(vocabulary: &Vocabulary) {
    println!(
        "{}",
        format!("=== Vocabulary ({} tokens) ===", vocabulary.len()).bold()
    );
    for token in vocabulary.iter() {
        println!("  {token}");
    }
}

/// Print a document's presence vector as the tokens it contains.
pub fn display_vector(label: &str, vector: &DocumentVector, vocabulary: &Vocabulary) {
    println!("{}", format!("=== Vector for {label} ===").bold());
    println!(
        "  {} of {} vocabulary tokens present",
        vector.ones(),
        vector.len()
    );
    let present: Vec<&str> = vocabulary
        .iter()
        .zip(vector.bits())
        .filter(|(_, bit)| **bit == 1)
        .map(|(token, _)| token)
        .collect();
    if present.is_empty() {
        println!("  {}", "(no tokens)".dimmed());
    } else {
        println!("  {}", present.join(" ").dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates() {
        let doc = Document {
            label: "alice".to_string(),
            text: "x".repeat(100),
        };
        let out = format_document_preview(&doc, 80);
        assert_eq!(
            out,
            format!("after cleaning alice:\n{}...MORE TEXT...", "x".repeat(80))
        );
    }

    #[test]
    fn test_distinction_limits_examples() {
        let d = Distinction {
            key: "IN_A_not_in_b".to_string(),
            tokens: ["a", "b", "c", "d", "e", "f", "g"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };
        assert_eq!(
            format_distinction(&d, 5),
            "tokens IN_A_not_in_b -> count = 7;\nselected examples = [a, b, c, d, e]"
        );
    }

    #[test]
    fn test_distinction_empty() {
        let d = Distinction {
            key: "IN_A_not_in_b".to_string(),
            tokens: vec![],
        };
        assert_eq!(
            format_distinction(&d, 5),
            "tokens IN_A_not_in_b -> count = 0;\nselected examples = []"
        );
    }
}
