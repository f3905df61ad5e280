//! Scaffold generation for Laravel API resources
//!
//! Turns a single model identifier into the set of files an API resource
//! needs: model, migration, controller, form request, JSON resource, service
//! and seeder, plus an optional route declaration.

pub mod component;
pub mod generator;
pub mod naming;
pub mod routes;

pub use component::{ComponentKind, ComponentSpec, NamespaceSource, OutputLayout};
pub use generator::{
    GenerationReport, GenerationRequest, KindSelection, RenderedArtifact, ScaffoldGenerator,
    TIMESTAMP_FORMAT,
};
pub use naming::NameVariantSet;
pub use routes::{register_route, route_declaration, route_line, RouteOutcome};
