//! Property-Based Tests for Rich-Text Extraction
//!
//! Properties:
//! - Content that is not JSON comes back unchanged
//! - A non-empty text leaf renders to exactly its text
//! - Paragraph siblings are separated by a blank line, inline runs are not

use context11_core::{extract_text, RichTextNode};
use proptest::prelude::*;

// ============================================================================
// GENERATORS
// ============================================================================

/// Words without surrounding whitespace, so container trimming is a no-op.
fn arb_word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .,!?-]{0,20}[A-Za-z0-9]"
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 1..6)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_invalid_json_is_identity(input in any::<String>()) {
        prop_assume!(serde_json::from_str::<serde_json::Value>(&input).is_err());
        prop_assert_eq!(extract_text(&input), input);
    }

    #[test]
    fn prop_plain_prose_is_identity(input in "[A-Z][A-Za-z ,.]{0,80}") {
        prop_assert_eq!(extract_text(&input), input);
    }

    #[test]
    fn prop_text_leaf_renders_verbatim(text in ".+") {
        let serialized = serde_json::to_string(&RichTextNode::text(text.clone())).unwrap();
        prop_assert_eq!(extract_text(&serialized), text);
    }

    #[test]
    fn prop_doc_of_paragraphs_joins_with_blank_lines(words in arb_words()) {
        let doc = RichTextNode::doc(
            words
                .iter()
                .map(|w| RichTextNode::paragraph(vec![RichTextNode::text(w.clone())]))
                .collect(),
        );
        let serialized = serde_json::to_string(&doc).unwrap();
        prop_assert_eq!(extract_text(&serialized), words.join("\n\n"));
    }

    #[test]
    fn prop_non_paragraph_container_concatenates(words in arb_words()) {
        let heading = RichTextNode::container(
            "heading",
            words.iter().map(|w| RichTextNode::text(w.clone())).collect(),
        );
        let serialized = serde_json::to_string(&heading).unwrap();
        prop_assert_eq!(extract_text(&serialized), words.concat());
    }

    #[test]
    fn prop_extraction_never_panics(input in ".{0,200}") {
        let _ = extract_text(&input);
    }
}
