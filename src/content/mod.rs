//! Content types and the generation engine.

pub mod caption;
pub mod forge;
pub mod hashtags;
pub mod hooks;
pub mod templates;
pub mod types;

pub use forge::{ContentForge, ExportFormat, PostType};
pub use templates::TemplateKind;
pub use types::{ContentPiece, ContentType, Slide, SlideKind};
