//! Brand profiles and the in-memory brand registry.

pub mod profile;
pub mod registry;

pub use profile::{BrandProfile, BrandVoice, Industry};
pub use registry::BrandRegistry;
