//! Default stubs compiled into the binary

use super::resolver::StubResolver;
use crate::error::Result;

/// Every bundled stub as `(logical name, contents)`
pub const BUNDLED_STUBS: &[(&str, &str)] = &[
    ("models/model.stub", include_str!("../../stubs/models/model.stub")),
    (
        "migrations/create_table.stub",
        include_str!("../../stubs/migrations/create_table.stub"),
    ),
    (
        "controllers/api_controller.stub",
        include_str!("../../stubs/controllers/api_controller.stub"),
    ),
    (
        "requests/form_request.stub",
        include_str!("../../stubs/requests/form_request.stub"),
    ),
    (
        "resources/api_resource.stub",
        include_str!("../../stubs/resources/api_resource.stub"),
    ),
    ("services/service.stub", include_str!("../../stubs/services/service.stub")),
    ("seeders/seeder.stub", include_str!("../../stubs/seeders/seeder.stub")),
];

/// Look up a bundled stub by logical name
#[must_use]
pub fn bundled_stub(name: &str) -> Option<&'static str> {
    BUNDLED_STUBS
        .iter()
        .find(|(stub, _)| *stub == name)
        .map(|(_, contents)| *contents)
}

/// Resolver backed by [`BUNDLED_STUBS`]; always last in the chain
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledResolver;

impl StubResolver for BundledResolver {
    fn describe(&self) -> String {
        "bundled defaults".to_string()
    }

    fn resolve(&self, name: &str) -> Result<Option<String>> {
        Ok(bundled_stub(name).map(str::to_string))
    }
}
