//! Page types: source kinds, routing, and the known pages snapshot.

mod kind;
mod route;
mod scan;
mod store;

pub use kind::{MARKDOWN_EXTENSIONS, is_markdown_file};
pub use route::DocPage;
pub use scan::scan_docs;
pub use store::KnownPages;
