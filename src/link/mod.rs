//! Link model - parsed link references and their containing documents

mod document;
mod reference;

pub use document::DocumentRef;
pub use reference::{LinkKind, LinkRef, IMAGE_EXTENSIONS, MARKDOWN_EXTENSIONS};
