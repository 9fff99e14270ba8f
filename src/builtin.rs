//! Bundles compiled into the crate.

use crate::{
    bundle::Bundle,
    error::{Error, Result},
    loader::EmbeddedLoader,
};

/// Name of the DDD entity bundle, selectable as `builtin:ddd-entity`.
pub const DDD_ENTITY: &str = "ddd-entity";

const DDD_ENTITY_FILES: &[(&str, &str)] = &[
    ("stencil.yaml", include_str!("../templates/ddd_entity/stencil.yaml")),
    ("entity.py.stencil", include_str!("../templates/ddd_entity/entity.py.stencil")),
    ("property.stencil", include_str!("../templates/ddd_entity/property.stencil")),
    ("method.stencil", include_str!("../templates/ddd_entity/method.stencil")),
    (
        "factory_validation.stencil",
        include_str!("../templates/ddd_entity/factory_validation.stencil"),
    ),
    (
        "invariant_validation.stencil",
        include_str!("../templates/ddd_entity/invariant_validation.stencil"),
    ),
];

/// Names accepted by [`load`].
pub fn names() -> &'static [&'static str] {
    &[DDD_ENTITY]
}

/// Loads a built-in bundle by name.
pub fn load(name: &str) -> Result<Bundle> {
    match name {
        DDD_ENTITY => ddd_entity(),
        other => Err(Error::UnknownBuiltin(other.to_string())),
    }
}

/// Python entity with identity, a validating factory, invariant checks and
/// domain-event registration.
///
/// Root placeholders: `entity_name`, `entity_docstring`, `base_module`,
/// `events_module`. Blocks: `properties` (`property_name`, `property_type`),
/// `methods` (`method_name`, `method_params`, `return_type`, `method_docstring`,
/// `method_body`), `factory_validations` and `invariant_validations`
/// (`condition`, `message`).
pub fn ddd_entity() -> Result<Bundle> {
    Bundle::from_loader(&EmbeddedLoader::new(DDD_ENTITY_FILES))
}
