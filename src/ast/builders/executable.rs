//! Documents, operations, selections and fragments.

use super::{operation_type, unsupported};
use crate::ast::builder::{BuildContext, Builder, Fragment};
use crate::ast::nodes::*;
use crate::ast::{Node, NodeKind};
use crate::errors::BuildError;

pub struct ExecutableBuilder;

impl Builder for ExecutableBuilder {
    fn name(&self) -> &'static str {
        "executable"
    }

    fn supports_kind(&self, kind: NodeKind) -> bool {
        matches!(
            kind,
            NodeKind::Name
                | NodeKind::Document
                | NodeKind::OperationDefinition
                | NodeKind::VariableDefinition
                | NodeKind::Variable
                | NodeKind::SelectionSet
                | NodeKind::Field
                | NodeKind::Argument
                | NodeKind::FragmentSpread
                | NodeKind::InlineFragment
                | NodeKind::FragmentDefinition
        )
    }

    fn build(&self, f: &Fragment<'_>, cx: &BuildContext<'_>) -> Result<Node, BuildError> {
        let node: Node = match f.kind() {
            NodeKind::Name => NameNode {
                value: f.require_str("value")?.to_string(),
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::Document => DocumentNode {
                definitions: cx.build_many(f, "definitions")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::OperationDefinition => OperationDefinitionNode {
                operation: operation_type(f)?,
                name: cx.build_typed(f, "name")?,
                variable_definitions: cx.build_many_typed(f, "variableDefinitions")?,
                directives: cx.build_many_typed(f, "directives")?,
                selection_set: cx.require_typed(f, "selectionSet")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::VariableDefinition => VariableDefinitionNode {
                variable: cx.require_typed(f, "variable")?,
                ty: cx.require_boxed(f, "type")?,
                default_value: cx.build_boxed(f, "defaultValue")?,
                directives: cx.build_many_typed(f, "directives")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::Variable => VariableNode {
                name: cx.require_typed(f, "name")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::SelectionSet => SelectionSetNode {
                selections: cx.build_many(f, "selections")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::Field => FieldNode {
                alias: cx.build_typed(f, "alias")?,
                name: cx.require_typed(f, "name")?,
                arguments: cx.build_many_typed(f, "arguments")?,
                directives: cx.build_many_typed(f, "directives")?,
                selection_set: cx.build_typed(f, "selectionSet")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::Argument => ArgumentNode {
                name: cx.require_typed(f, "name")?,
                value: cx.require_boxed(f, "value")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::FragmentSpread => FragmentSpreadNode {
                name: cx.require_typed(f, "name")?,
                directives: cx.build_many_typed(f, "directives")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::InlineFragment => InlineFragmentNode {
                type_condition: cx.build_typed(f, "typeCondition")?,
                directives: cx.build_many_typed(f, "directives")?,
                selection_set: cx.require_typed(f, "selectionSet")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            NodeKind::FragmentDefinition => FragmentDefinitionNode {
                name: cx.require_typed(f, "name")?,
                variable_definitions: cx.build_many_typed(f, "variableDefinitions")?,
                type_condition: cx.require_typed(f, "typeCondition")?,
                directives: cx.build_many_typed(f, "directives")?,
                selection_set: cx.require_typed(f, "selectionSet")?,
                loc: cx.build_location(f)?,
            }
            .into(),
            _ => return Err(unsupported(self, f)),
        };
        Ok(node)
    }
}
