//! Node structs, one per grammar production.
//!
//! Fields are public and read-only by convention: builders assemble them once
//! and the tree is never edited in place. Child slots that always hold one
//! particular kind are typed (`name: NameNode`); slots that accept several
//! kinds (values, type references, selections, definitions) hold a [`Node`].

use std::fmt;

use serde::Serialize;

use super::Node;
use crate::source::Location;

/// The three root operation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// EXECUTABLE DOCUMENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "Name")]
pub struct NameNode {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl NameNode {
    /// A hand-built name without a location.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            loc: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "Document")]
pub struct DocumentNode {
    pub definitions: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "OperationDefinition", rename_all = "camelCase")]
pub struct OperationDefinitionNode {
    pub operation: OperationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<NameNode>,
    pub variable_definitions: Vec<VariableDefinitionNode>,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: SelectionSetNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "VariableDefinition", rename_all = "camelCase")]
pub struct VariableDefinitionNode {
    pub variable: VariableNode,
    #[serde(rename = "type")]
    pub ty: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Box<Node>>,
    pub directives: Vec<DirectiveNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "Variable")]
pub struct VariableNode {
    pub name: NameNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "SelectionSet")]
pub struct SelectionSetNode {
    pub selections: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "Field", rename_all = "camelCase")]
pub struct FieldNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<NameNode>,
    pub name: NameNode,
    pub arguments: Vec<ArgumentNode>,
    pub directives: Vec<DirectiveNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<SelectionSetNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl FieldNode {
    /// Key the field's value is written under in a response.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).value.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "Argument")]
pub struct ArgumentNode {
    pub name: NameNode,
    pub value: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "FragmentSpread")]
pub struct FragmentSpreadNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "InlineFragment", rename_all = "camelCase")]
pub struct InlineFragmentNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_condition: Option<NamedTypeNode>,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: SelectionSetNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "FragmentDefinition", rename_all = "camelCase")]
pub struct FragmentDefinitionNode {
    pub name: NameNode,
    pub variable_definitions: Vec<VariableDefinitionNode>,
    pub type_condition: NamedTypeNode,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: SelectionSetNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

// ============================================================================
// VALUES
// ============================================================================

/// Integer literal, kept as written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "IntValue")]
pub struct IntValueNode {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// Float literal, kept as written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "FloatValue")]
pub struct FloatValueNode {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "StringValue")]
pub struct StringValueNode {
    pub value: String,
    /// Written as a `"""` block string.
    pub block: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "BooleanValue")]
pub struct BooleanValueNode {
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "NullValue")]
pub struct NullValueNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "EnumValue")]
pub struct EnumValueNode {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "ListValue")]
pub struct ListValueNode {
    pub values: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "ObjectValue")]
pub struct ObjectValueNode {
    pub fields: Vec<ObjectFieldNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "ObjectField")]
pub struct ObjectFieldNode {
    pub name: NameNode,
    pub value: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "Directive")]
pub struct DirectiveNode {
    pub name: NameNode,
    pub arguments: Vec<ArgumentNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

// ============================================================================
// TYPE REFERENCES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "NamedType")]
pub struct NamedTypeNode {
    pub name: NameNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl NamedTypeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: NameNode::new(name),
            loc: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "ListType")]
pub struct ListTypeNode {
    #[serde(rename = "type")]
    pub ty: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "NonNullType")]
pub struct NonNullTypeNode {
    #[serde(rename = "type")]
    pub ty: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

// ============================================================================
// TYPE SYSTEM DEFINITIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "SchemaDefinition", rename_all = "camelCase")]
pub struct SchemaDefinitionNode {
    pub directives: Vec<DirectiveNode>,
    pub operation_types: Vec<OperationTypeDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "OperationTypeDefinition")]
pub struct OperationTypeDefinitionNode {
    pub operation: OperationType,
    #[serde(rename = "type")]
    pub ty: NamedTypeNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "ScalarTypeDefinition")]
pub struct ScalarTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "ObjectTypeDefinition")]
pub struct ObjectTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub interfaces: Vec<NamedTypeNode>,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "FieldDefinition")]
pub struct FieldDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub arguments: Vec<InputValueDefinitionNode>,
    #[serde(rename = "type")]
    pub ty: Box<Node>,
    pub directives: Vec<DirectiveNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "InputValueDefinition", rename_all = "camelCase")]
pub struct InputValueDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    #[serde(rename = "type")]
    pub ty: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Box<Node>>,
    pub directives: Vec<DirectiveNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "InterfaceTypeDefinition")]
pub struct InterfaceTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "UnionTypeDefinition")]
pub struct UnionTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub types: Vec<NamedTypeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "EnumTypeDefinition")]
pub struct EnumTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub values: Vec<EnumValueDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "EnumValueDefinition")]
pub struct EnumValueDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "InputObjectTypeDefinition")]
pub struct InputObjectTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<InputValueDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "DirectiveDefinition")]
pub struct DirectiveDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub arguments: Vec<InputValueDefinitionNode>,
    /// Directive locations such as `FIELD` or `OBJECT`.
    pub locations: Vec<NameNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

// ============================================================================
// TYPE SYSTEM EXTENSIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "SchemaExtension", rename_all = "camelCase")]
pub struct SchemaExtensionNode {
    pub directives: Vec<DirectiveNode>,
    pub operation_types: Vec<OperationTypeDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "ScalarTypeExtension")]
pub struct ScalarTypeExtensionNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "ObjectTypeExtension")]
pub struct ObjectTypeExtensionNode {
    pub name: NameNode,
    pub interfaces: Vec<NamedTypeNode>,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "InterfaceTypeExtension")]
pub struct InterfaceTypeExtensionNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "UnionTypeExtension")]
pub struct UnionTypeExtensionNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub types: Vec<NamedTypeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "EnumTypeExtension")]
pub struct EnumTypeExtensionNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub values: Vec<EnumValueDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename = "InputObjectTypeExtension")]
pub struct InputObjectTypeExtensionNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<InputValueDefinitionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}
