//! Context11 Core - Knowledge Base Types
//!
//! Pure data structures for the remote knowledge base (search results,
//! documents, folders) plus the rich-text to plain-text extractor.
//! No I/O lives in this crate.

pub mod entities;
pub mod rich_text;

pub use entities::{
    Document, DocumentPatch, Folder, FolderDocument, FolderDocuments, FolderList, FolderRef,
    SearchRequest, SearchResponse, SearchResult,
};
pub use rich_text::{extract_text, RichTextNode, NODE_PARAGRAPH, NODE_TEXT};
