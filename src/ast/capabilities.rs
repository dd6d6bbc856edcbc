//! Structural capabilities shared across node kinds.
//!
//! Each trait covers one piece of grammar shape and is implemented only by
//! the nodes whose production has it.

use serde_json::Value;

use super::nodes::*;
use super::Node;

pub trait HasName {
    fn name(&self) -> &NameNode;

    fn name_value(&self) -> &str {
        &self.name().value
    }
}

pub trait HasDescription {
    fn description(&self) -> Option<&StringValueNode>;

    fn description_value(&self) -> Option<&str> {
        self.description().map(|d| d.value.as_str())
    }
}

pub trait HasDirectives {
    fn directives(&self) -> &[DirectiveNode];

    fn has_directives(&self) -> bool {
        !self.directives().is_empty()
    }

    fn directive(&self, name: &str) -> Option<&DirectiveNode> {
        self.directives().iter().find(|d| d.name.value == name)
    }
}

/// Output fields of object and interface types.
pub trait HasFields {
    fn fields(&self) -> &[FieldDefinitionNode];

    fn has_fields(&self) -> bool {
        !self.fields().is_empty()
    }

    fn field(&self, name: &str) -> Option<&FieldDefinitionNode> {
        self.fields().iter().find(|f| f.name.value == name)
    }

    /// Plain records for downstream tooling, in declaration order.
    fn fields_as_array(&self) -> Result<Vec<Value>, serde_json::Error> {
        self.fields().iter().map(serde_json::to_value).collect()
    }
}

/// Input fields of input object types.
pub trait HasInputFields {
    fn input_fields(&self) -> &[InputValueDefinitionNode];

    fn has_input_fields(&self) -> bool {
        !self.input_fields().is_empty()
    }

    fn input_field(&self, name: &str) -> Option<&InputValueDefinitionNode> {
        self.input_fields().iter().find(|f| f.name.value == name)
    }

    fn input_fields_as_array(&self) -> Result<Vec<Value>, serde_json::Error> {
        self.input_fields().iter().map(serde_json::to_value).collect()
    }
}

/// Named type references: union members or implemented interfaces.
pub trait HasTypes {
    fn types(&self) -> &[NamedTypeNode];

    fn type_names(&self) -> Vec<&str> {
        self.types().iter().map(|t| t.name.value.as_str()).collect()
    }
}

/// List and non-null wrappers around an inner type reference.
pub trait WrapsType {
    fn inner_type(&self) -> &Node;

    /// Follows nested wrappers down to the named type, if the chain ends in one.
    fn named_type(&self) -> Option<&NamedTypeNode> {
        let mut current = self.inner_type();
        loop {
            match current {
                Node::NamedType(named) => return Some(named),
                Node::ListType(list) => current = list.ty.as_ref(),
                Node::NonNullType(non_null) => current = non_null.ty.as_ref(),
                _ => return None,
            }
        }
    }
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

macro_rules! impl_has_name {
    ($($node:ty),+ $(,)?) => {
        $(impl HasName for $node {
            fn name(&self) -> &NameNode {
                &self.name
            }
        })+
    };
}

macro_rules! impl_has_description {
    ($($node:ty),+ $(,)?) => {
        $(impl HasDescription for $node {
            fn description(&self) -> Option<&StringValueNode> {
                self.description.as_ref()
            }
        })+
    };
}

macro_rules! impl_has_directives {
    ($($node:ty),+ $(,)?) => {
        $(impl HasDirectives for $node {
            fn directives(&self) -> &[DirectiveNode] {
                &self.directives
            }
        })+
    };
}

impl_has_name!(
    VariableNode,
    FieldNode,
    ArgumentNode,
    FragmentSpreadNode,
    FragmentDefinitionNode,
    ObjectFieldNode,
    DirectiveNode,
    NamedTypeNode,
    ScalarTypeDefinitionNode,
    ObjectTypeDefinitionNode,
    FieldDefinitionNode,
    InputValueDefinitionNode,
    InterfaceTypeDefinitionNode,
    UnionTypeDefinitionNode,
    EnumTypeDefinitionNode,
    EnumValueDefinitionNode,
    InputObjectTypeDefinitionNode,
    DirectiveDefinitionNode,
    ScalarTypeExtensionNode,
    ObjectTypeExtensionNode,
    InterfaceTypeExtensionNode,
    UnionTypeExtensionNode,
    EnumTypeExtensionNode,
    InputObjectTypeExtensionNode,
);

impl_has_description!(
    ScalarTypeDefinitionNode,
    ObjectTypeDefinitionNode,
    FieldDefinitionNode,
    InputValueDefinitionNode,
    InterfaceTypeDefinitionNode,
    UnionTypeDefinitionNode,
    EnumTypeDefinitionNode,
    EnumValueDefinitionNode,
    InputObjectTypeDefinitionNode,
    DirectiveDefinitionNode,
);

impl_has_directives!(
    OperationDefinitionNode,
    VariableDefinitionNode,
    FieldNode,
    FragmentSpreadNode,
    InlineFragmentNode,
    FragmentDefinitionNode,
    SchemaDefinitionNode,
    ScalarTypeDefinitionNode,
    ObjectTypeDefinitionNode,
    FieldDefinitionNode,
    InputValueDefinitionNode,
    InterfaceTypeDefinitionNode,
    UnionTypeDefinitionNode,
    EnumTypeDefinitionNode,
    EnumValueDefinitionNode,
    InputObjectTypeDefinitionNode,
    SchemaExtensionNode,
    ScalarTypeExtensionNode,
    ObjectTypeExtensionNode,
    InterfaceTypeExtensionNode,
    UnionTypeExtensionNode,
    EnumTypeExtensionNode,
    InputObjectTypeExtensionNode,
);

impl HasFields for ObjectTypeDefinitionNode {
    fn fields(&self) -> &[FieldDefinitionNode] {
        &self.fields
    }
}

impl HasFields for InterfaceTypeDefinitionNode {
    fn fields(&self) -> &[FieldDefinitionNode] {
        &self.fields
    }
}

impl HasFields for ObjectTypeExtensionNode {
    fn fields(&self) -> &[FieldDefinitionNode] {
        &self.fields
    }
}

impl HasFields for InterfaceTypeExtensionNode {
    fn fields(&self) -> &[FieldDefinitionNode] {
        &self.fields
    }
}

impl HasInputFields for InputObjectTypeDefinitionNode {
    fn input_fields(&self) -> &[InputValueDefinitionNode] {
        &self.fields
    }
}

impl HasInputFields for InputObjectTypeExtensionNode {
    fn input_fields(&self) -> &[InputValueDefinitionNode] {
        &self.fields
    }
}

impl HasTypes for UnionTypeDefinitionNode {
    fn types(&self) -> &[NamedTypeNode] {
        &self.types
    }
}

impl HasTypes for UnionTypeExtensionNode {
    fn types(&self) -> &[NamedTypeNode] {
        &self.types
    }
}

impl HasTypes for ObjectTypeDefinitionNode {
    fn types(&self) -> &[NamedTypeNode] {
        &self.interfaces
    }
}

impl HasTypes for ObjectTypeExtensionNode {
    fn types(&self) -> &[NamedTypeNode] {
        &self.interfaces
    }
}

impl WrapsType for ListTypeNode {
    fn inner_type(&self) -> &Node {
        &self.ty
    }
}

impl WrapsType for NonNullTypeNode {
    fn inner_type(&self) -> &Node {
        &self.ty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;

    fn field(name: &str, ty: &str) -> FieldDefinitionNode {
        FieldDefinitionNode {
            description: None,
            name: NameNode::new(name),
            arguments: vec![],
            ty: Box::new(NamedTypeNode::new(ty).into()),
            directives: vec![],
            loc: None,
        }
    }

    #[test]
    fn fields_are_looked_up_and_serialized_in_order() {
        let object = ObjectTypeDefinitionNode {
            description: None,
            name: NameNode::new("Address"),
            interfaces: vec![NamedTypeNode::new("Node")],
            directives: vec![],
            fields: vec![field("street", "String"), field("number", "Int")],
            loc: None,
        };

        assert!(object.has_fields());
        assert_eq!(object.field("number").map(|f| f.name_value()), Some("number"));
        assert!(object.field("zip").is_none());
        assert_eq!(object.type_names(), vec!["Node"]);

        let records = object.fields_as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["kind"], "FieldDefinition");
        assert_eq!(records[0]["name"]["value"], "street");
        assert_eq!(records[1]["type"]["name"]["value"], "Int");
    }

    #[test]
    fn named_type_unwraps_nested_wrappers() {
        let wrapped = NonNullTypeNode {
            ty: Box::new(
                ListTypeNode {
                    ty: Box::new(NamedTypeNode::new("Episode").into()),
                    loc: None,
                }
                .into(),
            ),
            loc: None,
        };
        assert_eq!(wrapped.inner_type().kind(), NodeKind::ListType);
        assert_eq!(wrapped.named_type().map(|n| n.name_value()), Some("Episode"));
    }

    #[test]
    fn missing_description_reads_as_none() {
        let scalar = ScalarTypeDefinitionNode {
            description: None,
            name: NameNode::new("Date"),
            directives: vec![],
            loc: None,
        };
        assert_eq!(scalar.description_value(), None);
        assert!(!scalar.has_directives());
    }
}
