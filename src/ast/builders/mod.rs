//! Built-in builders, grouped by grammar area.
//!
//! Each builder is a flat translation table: one match arm per kind, one line
//! per property. Helpers shared between groups live here.

use super::builder::{Builder, Fragment};
use super::nodes::OperationType;
use crate::errors::BuildError;

mod executable;
mod extensions;
mod type_system;
mod types;
mod values;

pub use executable::ExecutableBuilder;
pub use extensions::TypeExtensionBuilder;
pub use type_system::TypeSystemBuilder;
pub use types::TypeReferenceBuilder;
pub use values::ValueBuilder;

/// Every built-in builder; together they cover each kind exactly once.
pub fn standard_builders() -> Vec<Box<dyn Builder>> {
    vec![
        Box::new(ExecutableBuilder),
        Box::new(ValueBuilder),
        Box::new(TypeReferenceBuilder),
        Box::new(TypeSystemBuilder),
        Box::new(TypeExtensionBuilder),
    ]
}

/// Reads the `operation` scalar used by operation and root type definitions.
fn operation_type(fragment: &Fragment<'_>) -> Result<OperationType, BuildError> {
    let tag = fragment.require_str("operation")?;
    OperationType::from_tag(tag)
        .ok_or_else(|| BuildError::invalid(fragment.kind(), "operation", "query, mutation or subscription"))
}

/// Rejects kinds a builder was handed without claiming them.
fn unsupported(builder: &dyn Builder, fragment: &Fragment<'_>) -> BuildError {
    tracing::debug!(builder = builder.name(), kind = %fragment.kind(), "builder called with unsupported kind");
    BuildError::UnknownNodeKind {
        kind: fragment.kind().as_str().to_string(),
    }
}
