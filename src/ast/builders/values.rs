//! Literal values, input objects and directives.

use serde_json::Value;

use super::unsupported;
use crate::ast::builder::{BuildContext, Builder, Fragment};
use crate::ast::nodes::*;
use crate::ast::{Node, NodeKind};
use crate::errors::BuildError;

pub struct ValueBuilder;

impl Builder for ValueBuilder {
    fn name(&self) -> &'static str {
        "values"
    }

    fn supports_kind(&self, kind: NodeKind) -> bool {
        matches!(
            kind,
            NodeKind::IntValue
                | NodeKind::FloatValue
                | NodeKind::StringValue
                | NodeKind::BooleanValue
                | NodeKind::NullValue
                | NodeKind::EnumValue
                | NodeKind::ListValue
                | NodeKind::ObjectValue
                | NodeKind::ObjectField
                | NodeKind::Directive
        )
    }

    fn build(&self, f: &Fragment<'_>, cx: &BuildContext<'_>) -> Result<Node, BuildError> {
        let node: Node = match f.kind() {
            NodeKind::IntValue => IntValueNode {
                value: numeric_literal(f)?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::FloatValue => FloatValueNode {
                value: numeric_literal(f)?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::StringValue => StringValueNode {
                value: f.require_str("value")?.to_string(),
                block: f.get_bool_or("block", false)?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::BooleanValue => BooleanValueNode {
                value: f.require_bool("value")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::NullValue => NullValueNode {
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::EnumValue => EnumValueNode {
                value: f.require_str("value")?.to_string(),
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::ListValue => ListValueNode {
                values: cx.build_many(f, "values")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::ObjectValue => ObjectValueNode {
                fields: cx.build_many_typed(f, "fields")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::ObjectField => ObjectFieldNode {
                name: cx.require_typed(f, "name")?,
                value: cx.require_boxed(f, "value")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::Directive => DirectiveNode {
                name: cx.require_typed(f, "name")?,
                arguments: cx.build_many_typed(f, "arguments")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            _ => return Err(unsupported(self, f)),
        };
        Ok(node)
    }
}

/// Numeric literals keep their source spelling; some lexers hand them over as
/// JSON numbers, which are rendered back to text.
fn numeric_literal(f: &Fragment<'_>) -> Result<String, BuildError> {
    match f.get_one("value") {
        None => Err(BuildError::missing(f.kind(), "value")),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(_) => Err(BuildError::invalid(f.kind(), "value", "numeric literal")),
    }
}
