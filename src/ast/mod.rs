//! Typed GraphQL abstract syntax tree.
//!
//! Every grammar production has one node struct (see [`nodes`]) and one
//! [`Node`] variant. The variant name doubles as the kind tag used by the
//! upstream parse tree, so `NodeKind::SelectionSet.as_str() == "SelectionSet"`.
//! Shared structure (names, directives, fields, ...) is exposed through the
//! small traits in [`capabilities`] rather than a common base type.
//!
//! Trees are assembled bottom-up by the [`Director`]; nothing here mutates a
//! node after construction.

use std::fmt;

use serde::Serialize;

use crate::source::Location;

pub mod builder;
pub mod builders;
pub mod capabilities;
pub mod director;
pub mod nodes;

pub use builder::{BuildContext, Builder, Fragment};
pub use capabilities::{
    HasDescription, HasDirectives, HasFields, HasInputFields, HasName, HasTypes, WrapsType,
};
pub use director::Director;
pub use nodes::*;

/// Node types that occupy exactly one [`NodeKind`].
///
/// Lets builders convert a freshly built [`Node`] back into the concrete
/// struct a typed child slot expects.
pub trait TypedNode: Sized {
    const KIND: NodeKind;

    fn from_node(node: Node) -> Result<Self, Node>;
}

macro_rules! node_kinds {
    ($($variant:ident($node:ident)),+ $(,)?) => {
        /// Kind tag of a node, one per grammar production.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($variant),+
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant)),+
                }
            }

            /// Resolves a parse-tree kind tag.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $(stringify!($variant) => Some(NodeKind::$variant),)+
                    _ => None,
                }
            }
        }

        /// Any typed AST node.
        ///
        /// Each node struct writes its own `kind` field when serialized.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Node {
            $($variant($node)),+
        }

        impl Node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$variant(_) => NodeKind::$variant),+
                }
            }

            /// Span in the originating document; `None` for hand-built nodes.
            pub fn location(&self) -> Option<&Location> {
                match self {
                    $(Node::$variant(node) => node.loc.as_ref()),+
                }
            }
        }

        $(
            impl From<$node> for Node {
                fn from(node: $node) -> Self {
                    Node::$variant(node)
                }
            }

            impl TypedNode for $node {
                const KIND: NodeKind = NodeKind::$variant;

                fn from_node(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

node_kinds! {
    Name(NameNode),
    Document(DocumentNode),
    OperationDefinition(OperationDefinitionNode),
    VariableDefinition(VariableDefinitionNode),
    Variable(VariableNode),
    SelectionSet(SelectionSetNode),
    Field(FieldNode),
    Argument(ArgumentNode),
    FragmentSpread(FragmentSpreadNode),
    InlineFragment(InlineFragmentNode),
    FragmentDefinition(FragmentDefinitionNode),
    IntValue(IntValueNode),
    FloatValue(FloatValueNode),
    StringValue(StringValueNode),
    BooleanValue(BooleanValueNode),
    NullValue(NullValueNode),
    EnumValue(EnumValueNode),
    ListValue(ListValueNode),
    ObjectValue(ObjectValueNode),
    ObjectField(ObjectFieldNode),
    Directive(DirectiveNode),
    NamedType(NamedTypeNode),
    ListType(ListTypeNode),
    NonNullType(NonNullTypeNode),
    SchemaDefinition(SchemaDefinitionNode),
    OperationTypeDefinition(OperationTypeDefinitionNode),
    ScalarTypeDefinition(ScalarTypeDefinitionNode),
    ObjectTypeDefinition(ObjectTypeDefinitionNode),
    FieldDefinition(FieldDefinitionNode),
    InputValueDefinition(InputValueDefinitionNode),
    InterfaceTypeDefinition(InterfaceTypeDefinitionNode),
    UnionTypeDefinition(UnionTypeDefinitionNode),
    EnumTypeDefinition(EnumTypeDefinitionNode),
    EnumValueDefinition(EnumValueDefinitionNode),
    InputObjectTypeDefinition(InputObjectTypeDefinitionNode),
    DirectiveDefinition(DirectiveDefinitionNode),
    SchemaExtension(SchemaExtensionNode),
    ScalarTypeExtension(ScalarTypeExtensionNode),
    ObjectTypeExtension(ObjectTypeExtensionNode),
    InterfaceTypeExtension(InterfaceTypeExtensionNode),
    UnionTypeExtension(UnionTypeExtensionNode),
    EnumTypeExtension(EnumTypeExtensionNode),
    InputObjectTypeExtension(InputObjectTypeExtensionNode),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Downcasts into a concrete node struct, handing the node back on mismatch.
    pub fn into_typed<T: TypedNode>(self) -> Result<T, Node> {
        T::from_node(self)
    }

    pub fn is_definition(&self) -> bool {
        matches!(
            self.kind(),
            NodeKind::OperationDefinition
                | NodeKind::FragmentDefinition
                | NodeKind::SchemaDefinition
                | NodeKind::ScalarTypeDefinition
                | NodeKind::ObjectTypeDefinition
                | NodeKind::InterfaceTypeDefinition
                | NodeKind::UnionTypeDefinition
                | NodeKind::EnumTypeDefinition
                | NodeKind::InputObjectTypeDefinition
                | NodeKind::DirectiveDefinition
                | NodeKind::SchemaExtension
                | NodeKind::ScalarTypeExtension
                | NodeKind::ObjectTypeExtension
                | NodeKind::InterfaceTypeExtension
                | NodeKind::UnionTypeExtension
                | NodeKind::EnumTypeExtension
                | NodeKind::InputObjectTypeExtension
        )
    }
}
