//! api-starter library
//!
//! Generates the boilerplate for a Laravel REST resource from one model name.
//!
//! ```no_run
//! use api_starter::{GenerationRequest, ScaffoldConfig, ScaffoldGenerator};
//! use std::path::Path;
//!
//! # fn main() -> api_starter::Result<()> {
//! let root = Path::new(".");
//! let config = ScaffoldConfig::load(root, None)?;
//! let report = ScaffoldGenerator::new(config, root)
//!     .generate(&GenerationRequest::new("Order").with_routes(true))?;
//!
//! for (kind, path) in &report.artifacts {
//!     println!("{kind}: {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod stubs;

pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use scaffold::{
    ComponentKind, GenerationReport, GenerationRequest, KindSelection, NameVariantSet,
    OutputLayout, RouteOutcome, ScaffoldGenerator,
};
pub use stubs::{StubRenderer, StubResolver};
