//! Instagram content generation service for multi-brand marketing.
//!
//! This library generates carousel posts, captions, hashtag sets, and
//! content calendars from curated template banks. Generation is topic- and
//! brand-parameterized: a hook bank per industry, carousel slide structures
//! per template kind, CTA and hashtag banks, all selected pseudo-randomly
//! and substituted with topic-derived variables.
//!
//! # Flow
//!
//! ```text
//! HTTP request → brand/industry resolution → template selection
//!              → substitution → scoring → JSON response
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`brand`]: Brand profiles and the in-memory registry
//! - [`content`]: Content types and the generation engine
//! - [`engagement`]: Engagement scoring and performance analysis
//! - [`calendar`]: Content calendar planning
//! - [`api`]: HTTP API routes and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod brand;
pub mod calendar;
pub mod config;
pub mod content;
pub mod engagement;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use content::ContentForge;
pub use error::{ForgeError, Result};
