//! Rich-text (Tiptap JSON) document trees and plain-text extraction.
//!
//! Document content is stored remotely as a serialized node tree:
//!
//! ```json
//! {"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hi"}]}]}
//! ```
//!
//! [`extract_text`] flattens such a tree into readable text. It never fails:
//! content that is not JSON at all is returned untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Node type of a text leaf.
pub const NODE_TEXT: &str = "text";

/// Node type whose children are separated by a blank line.
pub const NODE_PARAGRAPH: &str = "paragraph";

const PARAGRAPH_SEPARATOR: &str = "\n\n";

// ============================================================================
// NODE TREE
// ============================================================================

/// A node of a rich-text document tree.
///
/// A node is either a text leaf (`type == "text"` with `text`) or a container
/// with ordered `content`. Attributes and marks carried by the editor format
/// are not modelled and are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<RichTextNode>>,
}

impl RichTextNode {
    /// Create a text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            node_type: Some(NODE_TEXT.to_string()),
            text: Some(text.into()),
            content: None,
        }
    }

    /// Create a container node of the given type.
    pub fn container(node_type: impl Into<String>, content: Vec<RichTextNode>) -> Self {
        Self {
            node_type: Some(node_type.into()),
            text: None,
            content: Some(content),
        }
    }

    /// Create a paragraph container.
    pub fn paragraph(content: Vec<RichTextNode>) -> Self {
        Self::container(NODE_PARAGRAPH, content)
    }

    /// Create a document root.
    pub fn doc(content: Vec<RichTextNode>) -> Self {
        Self::container("doc", content)
    }

    fn is_type(&self, node_type: &str) -> bool {
        self.node_type.as_deref() == Some(node_type)
    }

    /// Render this node and its descendants as plain text.
    ///
    /// Children of a paragraph are joined with a blank line, and so are two
    /// adjacent sibling paragraphs. Everything else inside a container is
    /// concatenated with no separator. Container output is trimmed; text
    /// leaves are returned verbatim.
    pub fn render(&self) -> String {
        if self.is_type(NODE_TEXT) {
            if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
                return text.to_string();
            }
        }

        let Some(children) = self.content.as_deref() else {
            return String::new();
        };

        let in_paragraph = self.is_type(NODE_PARAGRAPH);
        let mut rendered = String::new();
        let mut previous: Option<&RichTextNode> = None;

        for child in children {
            if let Some(prev) = previous {
                if in_paragraph || (prev.is_type(NODE_PARAGRAPH) && child.is_type(NODE_PARAGRAPH)) {
                    rendered.push_str(PARAGRAPH_SEPARATOR);
                }
            }
            rendered.push_str(&child.render());
            previous = Some(child);
        }

        rendered.trim().to_string()
    }
}

/// Lenient conversion from arbitrary JSON.
///
/// Values that are not objects become empty nodes, and fields with the wrong
/// JSON type are treated as absent, so odd shapes render as empty text
/// instead of failing the whole document.
impl From<&JsonValue> for RichTextNode {
    fn from(value: &JsonValue) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            node_type: object
                .get("type")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            text: object
                .get("text")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            content: object
                .get("content")
                .and_then(JsonValue::as_array)
                .map(|children| children.iter().map(RichTextNode::from).collect()),
        }
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Convert serialized rich-text content into plain text.
///
/// Returns the input unchanged when it is not valid JSON (legacy plain-text
/// documents).
pub fn extract_text(serialized: &str) -> String {
    match serde_json::from_str::<JsonValue>(serialized) {
        Ok(value) => RichTextNode::from(&value).render(),
        Err(_) => serialized.to_string(),
    }
}
