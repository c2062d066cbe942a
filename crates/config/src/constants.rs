//! Centralized constants for the yamldump workspace.

/// File name of the document read from the program directory.
pub const DEFAULT_DOCUMENT_NAME: &str = "test.yaml";

/// Separator between items of a rendered sequence or mapping.
pub const RENDER_ITEM_SEPARATOR: &str = ", ";
