//! Search-engine metadata for localized pages.
//!
//! - `head`: the document-head handle the emitter writes through
//! - `schema`: schema.org structured-data builders
//! - `emitter`: canonical, meta, hreflang and JSON-LD emission

mod emitter;
mod head;
pub mod schema;

pub use emitter::{PageContent, PageKind, SeoEmitter, X_DEFAULT};
pub use head::{DocumentHead, HeadElement, MemoryHead, MetaAttribute};
pub use schema::SiteInfo;
