//! Component kinds and their generation specs
//!
//! Each [`ComponentKind`] carries a static [`ComponentSpec`]: which stub to
//! render, where the result goes in each [`OutputLayout`], and which
//! namespace and class name it gets. Output paths are themselves templates
//! rendered with the same `{{ KEY }}` substitution as stubs.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::naming::NameVariantSet;
use crate::config::NamespaceSettings;
use crate::stubs::{substitute, Tokens};

/// Namespace Laravel uses for database seeders
const SEEDER_NAMESPACE: &str = r"Database\Seeders";

/// A generatable artifact kind
///
/// Variants are declared in generation order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Eloquent model
    Model,
    /// Create-table migration
    Migration,
    /// API resource controller
    Controller,
    /// Form request with validation rules
    Request,
    /// JSON API resource
    Resource,
    /// Service class holding business logic
    Service,
    /// Database seeder
    Seeder,
}

/// Where a component's namespace comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceSource {
    /// `model_namespace`
    Model,
    /// `controller_namespace`
    Controller,
    /// `request_namespace`
    Request,
    /// `resource_namespace`
    Resource,
    /// `service_namespace`
    Service,
    /// Fixed namespace not covered by configuration
    Fixed(&'static str),
    /// The generated file has no namespace
    None,
}

/// Output directory convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// Paths inside a Laravel project (`app/Models`, `database/migrations`, ...)
    #[default]
    Framework,
    /// Flat per-kind directories (`models/`, `migrations/`, ...)
    Standalone,
}

/// Static generation record for one component kind
#[derive(Debug, Clone, Copy)]
pub struct ComponentSpec {
    /// Logical stub name
    pub stub: &'static str,
    /// Output path template in the framework layout
    pub framework_path: &'static str,
    /// Output path template in the standalone layout
    pub standalone_path: &'static str,
    /// Namespace the class is placed in
    pub namespace: NamespaceSource,
    /// Suffix appended to the studly model name to form the class name
    pub class_suffix: &'static str,
}

const MODEL: ComponentSpec = ComponentSpec {
    stub: "models/model.stub",
    framework_path: "app/Models/{{ CLASS_NAME }}.php",
    standalone_path: "models/{{ CLASS_NAME }}.php",
    namespace: NamespaceSource::Model,
    class_suffix: "",
};

const MIGRATION: ComponentSpec = ComponentSpec {
    stub: "migrations/create_table.stub",
    framework_path: "database/migrations/{{ TIMESTAMP }}_create_{{ TABLE_NAME }}_table.php",
    standalone_path: "migrations/{{ TIMESTAMP }}_create_{{ TABLE_NAME }}_table.php",
    namespace: NamespaceSource::None,
    class_suffix: "",
};

const CONTROLLER: ComponentSpec = ComponentSpec {
    stub: "controllers/api_controller.stub",
    framework_path: "app/Http/Controllers/Api/{{ CLASS_NAME }}.php",
    standalone_path: "controllers/{{ CLASS_NAME }}.php",
    namespace: NamespaceSource::Controller,
    class_suffix: "Controller",
};

const REQUEST: ComponentSpec = ComponentSpec {
    stub: "requests/form_request.stub",
    framework_path: "app/Http/Requests/{{ CLASS_NAME }}.php",
    standalone_path: "requests/{{ CLASS_NAME }}.php",
    namespace: NamespaceSource::Request,
    class_suffix: "Request",
};

const RESOURCE: ComponentSpec = ComponentSpec {
    stub: "resources/api_resource.stub",
    framework_path: "app/Http/Resources/{{ CLASS_NAME }}.php",
    standalone_path: "resources/{{ CLASS_NAME }}.php",
    namespace: NamespaceSource::Resource,
    class_suffix: "Resource",
};

const SERVICE: ComponentSpec = ComponentSpec {
    stub: "services/service.stub",
    framework_path: "app/Services/{{ CLASS_NAME }}.php",
    standalone_path: "services/{{ CLASS_NAME }}.php",
    namespace: NamespaceSource::Service,
    class_suffix: "Service",
};

const SEEDER: ComponentSpec = ComponentSpec {
    stub: "seeders/seeder.stub",
    framework_path: "database/seeders/{{ TIMESTAMP }}_{{ CLASS_NAME }}.php",
    standalone_path: "seeders/{{ TIMESTAMP }}_{{ CLASS_NAME }}.php",
    namespace: NamespaceSource::Fixed(SEEDER_NAMESPACE),
    class_suffix: "Seeder",
};

impl ComponentKind {
    /// Every kind, in generation order
    pub const ALL: [Self; 7] = [
        Self::Model,
        Self::Migration,
        Self::Controller,
        Self::Request,
        Self::Resource,
        Self::Service,
        Self::Seeder,
    ];

    /// Static spec for this kind
    #[must_use]
    pub const fn spec(self) -> &'static ComponentSpec {
        match self {
            Self::Model => &MODEL,
            Self::Migration => &MIGRATION,
            Self::Controller => &CONTROLLER,
            Self::Request => &REQUEST,
            Self::Resource => &RESOURCE,
            Self::Service => &SERVICE,
            Self::Seeder => &SEEDER,
        }
    }

    /// Lowercase name used in output and JSON
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Migration => "migration",
            Self::Controller => "controller",
            Self::Request => "request",
            Self::Resource => "resource",
            Self::Service => "service",
            Self::Seeder => "seeder",
        }
    }

    /// Class name of the generated file
    ///
    /// Migrations are named after the table (`CreateOrdersTable`); every other
    /// kind appends its suffix to the model name.
    #[must_use]
    pub fn class_name(self, names: &NameVariantSet) -> String {
        match self {
            Self::Migration => format!("Create{}Table", names.plural),
            _ => format!("{}{}", names.studly, self.spec().class_suffix),
        }
    }

    /// Namespace of the generated class, if it has one
    #[must_use]
    pub fn namespace(self, namespaces: &NamespaceSettings) -> Option<String> {
        match self.spec().namespace {
            NamespaceSource::Model => Some(namespaces.model_namespace.clone()),
            NamespaceSource::Controller => Some(namespaces.controller_namespace.clone()),
            NamespaceSource::Request => Some(namespaces.request_namespace.clone()),
            NamespaceSource::Resource => Some(namespaces.resource_namespace.clone()),
            NamespaceSource::Service => Some(namespaces.service_namespace.clone()),
            NamespaceSource::Fixed(namespace) => Some(namespace.to_string()),
            NamespaceSource::None => None,
        }
    }

    /// Full token set for rendering this kind's stub and output path
    #[must_use]
    pub fn tokens(
        self,
        names: &NameVariantSet,
        namespaces: &NamespaceSettings,
        timestamp: &str,
    ) -> Tokens {
        let mut tokens = base_tokens(names, namespaces, timestamp);
        tokens.insert("CLASS_NAME".to_string(), self.class_name(names));
        if let Some(namespace) = self.namespace(namespaces) {
            tokens.insert("NAMESPACE".to_string(), namespace);
        }
        tokens
    }

    /// Relative output path for this kind in `layout`
    #[must_use]
    pub fn output_path(self, layout: OutputLayout, tokens: &Tokens) -> PathBuf {
        let template = match layout {
            OutputLayout::Framework => self.spec().framework_path,
            OutputLayout::Standalone => self.spec().standalone_path,
        };
        PathBuf::from(substitute(template, tokens))
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokens shared by every kind
fn base_tokens(names: &NameVariantSet, namespaces: &NamespaceSettings, timestamp: &str) -> Tokens {
    [
        ("MODEL_NAME", names.studly.clone()),
        ("MODEL_VARIABLE", names.camel.clone()),
        ("PLURAL_NAME", names.plural.clone()),
        ("PLURAL_VARIABLE", names.plural_camel.clone()),
        ("SNAKE_NAME", names.snake.clone()),
        ("KEBAB_NAME", names.kebab.clone()),
        ("TABLE_NAME", names.table.clone()),
        ("ROUTE_NAME", names.route_name()),
        ("MODEL_NAMESPACE", namespaces.model_namespace.clone()),
        ("CONTROLLER_NAMESPACE", namespaces.controller_namespace.clone()),
        ("REQUEST_NAMESPACE", namespaces.request_namespace.clone()),
        ("RESOURCE_NAMESPACE", namespaces.resource_namespace.clone()),
        ("SERVICE_NAMESPACE", namespaces.service_namespace.clone()),
        ("TIMESTAMP", timestamp.to_string()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}
