//! Plain-text rendering of tool results.

use super::tools::ToolName;
use context11_core::{extract_text, Document, Folder, FolderDocuments, SearchResult};

pub const NO_SEARCH_RESULTS: &str = "No results found for your search query.";
pub const NO_FOLDERS: &str = "No folders found in the workspace.";

pub fn search_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_SEARCH_RESULTS.to_string();
    }

    let formatted = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}. **{}** (score: {:.2})\n   ID: {}\n   {}",
                i + 1,
                r.title,
                round_half_up_2dp(r.score),
                r.document_id,
                r.preview
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Found {} result(s):\n\n{}", results.len(), formatted)
}

/// Ties at the second decimal round away from zero, where `{:.2}` alone
/// would round them to even.
fn round_half_up_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `get_document` view: last update only.
pub fn document_overview(doc: &Document) -> String {
    format!(
        "# {}\n\nFolder: {}\nLast updated: {}\n\n---\n\n{}",
        doc.title,
        doc.folder_name,
        doc.updated_at,
        extract_text(&doc.content)
    )
}

/// `read_document` view: both timestamps.
pub fn document_detail(doc: &Document) -> String {
    format!(
        "# {}\n\nFolder: {}\nCreated: {}\nUpdated: {}\n\n---\n\n{}",
        doc.title,
        doc.folder_name,
        doc.created_at,
        doc.updated_at,
        extract_text(&doc.content)
    )
}

pub fn updated_document(doc: &Document) -> String {
    format!(
        "Document updated successfully!\n\n# {}\n\nFolder: {}\nUpdated: {}\n\n---\n\n{}",
        doc.title,
        doc.folder_name,
        doc.updated_at,
        extract_text(&doc.content)
    )
}

pub fn folders(folders: &[Folder]) -> String {
    if folders.is_empty() {
        return NO_FOLDERS.to_string();
    }

    let formatted = folders
        .iter()
        .map(|f| {
            let mut entry = format!(
                "- **{}** (ID: {})\n  Documents: {}, Subfolders: {}",
                f.name, f.id, f.document_count, f.child_folder_count
            );
            // An empty parent id counts as none.
            if let Some(parent) = f.parent_id.as_deref().filter(|p| !p.is_empty()) {
                entry.push_str(&format!("\n  Parent: {}", parent));
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Found {} folder(s):\n\n{}", folders.len(), formatted)
}

pub fn folder_documents(listing: &FolderDocuments) -> String {
    if listing.documents.is_empty() {
        return format!("No documents found in folder \"{}\".", listing.folder.name);
    }

    let formatted = listing
        .documents
        .iter()
        .map(|d| {
            format!(
                "- **{}** (ID: {})\n  Created: {}\n  Updated: {}",
                d.title, d.id, d.created_at, d.updated_at
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Folder: {}\n\nFound {} document(s):\n\n{}",
        listing.folder.name,
        listing.documents.len(),
        formatted
    )
}

/// `Error <activity>: <message>`.
pub fn tool_failure(tool: ToolName, message: &str) -> String {
    format!("Error {}: {}", tool.activity(), message)
}

/// Local validation failures carry no activity.
pub fn validation_failure(message: &str) -> String {
    format!("Error: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use context11_core::{FolderDocument, FolderRef};

    fn doc() -> Document {
        Document {
            id: "d1".to_string(),
            title: "Guide".to_string(),
            content: r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"A"}]},{"type":"paragraph","content":[{"type":"text","text":"B"}]}]}"#.to_string(),
            folder_id: "f1".to_string(),
            folder_name: "Eng".to_string(),
            created_at: "c".to_string(),
            updated_at: "u".to_string(),
        }
    }

    #[test]
    fn test_search_results() {
        let results = vec![
            SearchResult {
                score: 0.876,
                document_id: "d1".to_string(),
                folder_id: "f1".to_string(),
                title: "One".to_string(),
                preview: "first".to_string(),
                chunk_index: 0,
            },
            SearchResult {
                score: 0.5,
                document_id: "d2".to_string(),
                folder_id: "f1".to_string(),
                title: "Two".to_string(),
                preview: "second".to_string(),
                chunk_index: 3,
            },
        ];
        assert_eq!(
            search_results(&results),
            "Found 2 result(s):\n\n1. **One** (score: 0.88)\n   ID: d1\n   first\n\n2. **Two** (score: 0.50)\n   ID: d2\n   second"
        );
    }

    #[test]
    fn test_search_score_ties_round_up() {
        let result = |score: f64| SearchResult {
            score,
            document_id: "d1".to_string(),
            folder_id: "f1".to_string(),
            title: "One".to_string(),
            preview: "first".to_string(),
            chunk_index: 0,
        };

        for (score, shown) in [(0.125, "0.13"), (0.625, "0.63"), (0.375, "0.38")] {
            let text = search_results(&[result(score)]);
            assert!(
                text.contains(&format!("(score: {})", shown)),
                "{} should show as {}: {}",
                score,
                shown,
                text
            );
        }
    }

    #[test]
    fn test_empty_search_results() {
        assert_eq!(search_results(&[]), "No results found for your search query.");
    }

    #[test]
    fn test_document_views() {
        assert_eq!(
            document_overview(&doc()),
            "# Guide\n\nFolder: Eng\nLast updated: u\n\n---\n\nA\n\nB"
        );
        assert_eq!(
            document_detail(&doc()),
            "# Guide\n\nFolder: Eng\nCreated: c\nUpdated: u\n\n---\n\nA\n\nB"
        );
        assert_eq!(
            updated_document(&doc()),
            "Document updated successfully!\n\n# Guide\n\nFolder: Eng\nUpdated: u\n\n---\n\nA\n\nB"
        );
    }

    #[test]
    fn test_plain_content_is_shown_verbatim() {
        let mut d = doc();
        d.content = "just text".to_string();
        assert!(document_overview(&d).ends_with("---\n\njust text"));
    }

    #[test]
    fn test_folders_with_and_without_parent() {
        let list = vec![
            Folder {
                id: "f1".to_string(),
                name: "Root".to_string(),
                parent_id: None,
                document_count: 2,
                child_folder_count: 1,
            },
            Folder {
                id: "f2".to_string(),
                name: "Child".to_string(),
                parent_id: Some("f1".to_string()),
                document_count: 0,
                child_folder_count: 0,
            },
        ];
        assert_eq!(
            folders(&list),
            "Found 2 folder(s):\n\n- **Root** (ID: f1)\n  Documents: 2, Subfolders: 1\n\n- **Child** (ID: f2)\n  Documents: 0, Subfolders: 0\n  Parent: f1"
        );
        assert_eq!(folders(&[]), "No folders found in the workspace.");
    }

    #[test]
    fn test_folder_documents() {
        let mut listing = FolderDocuments {
            folder: FolderRef {
                id: "f1".to_string(),
                name: "Eng".to_string(),
            },
            documents: vec![FolderDocument {
                id: "d1".to_string(),
                title: "Guide".to_string(),
                created_at: "c".to_string(),
                updated_at: "u".to_string(),
            }],
        };
        assert_eq!(
            folder_documents(&listing),
            "Folder: Eng\n\nFound 1 document(s):\n\n- **Guide** (ID: d1)\n  Created: c\n  Updated: u"
        );

        listing.documents.clear();
        assert_eq!(folder_documents(&listing), "No documents found in folder \"Eng\".");
    }

    #[test]
    fn test_failure_lines() {
        assert_eq!(
            tool_failure(ToolName::SearchContext, "API error (500): boom"),
            "Error searching knowledge base: API error (500): boom"
        );
        assert_eq!(
            tool_failure(ToolName::UpdateDocument, "x"),
            "Error updating document: x"
        );
        assert_eq!(validation_failure("bad"), "Error: bad");
    }
}
