//! Fragment-to-AST construction through the standard registry.

mod common;

use common::*;
use graphql_front::ast::*;
use graphql_front::{BuildError, Location, NodeKind, SourceLocation};
use serde_json::json;

fn typed<T: TypedNode>(node: Node) -> T {
    let kind = node.kind();
    node.into_typed()
        .unwrap_or_else(|_| panic!("expected {}, got {kind}", T::KIND))
}

// ============================================================================
// EXECUTABLE DOCUMENTS
// ============================================================================

#[test]
fn builds_a_full_query_document() {
    let doc: DocumentNode = typed(build(&hero_document()).unwrap());
    assert_eq!(doc.definitions.len(), 1);

    let op: OperationDefinitionNode = typed(doc.definitions[0].clone());
    assert_eq!(op.operation, OperationType::Query);
    assert_eq!(op.name.as_ref().map(|n| n.value.as_str()), Some("Hero"));
    assert_eq!(op.variable_definitions.len(), 1);
    assert_eq!(op.variable_definitions[0].variable.name.value, "id");
    assert_eq!(op.variable_definitions[0].ty.kind(), NodeKind::NonNullType);

    let hero: FieldNode = typed(op.selection_set.selections[0].clone());
    assert_eq!(hero.response_key(), "hero");
    assert_eq!(hero.arguments[0].name.value, "id");
    assert_eq!(hero.arguments[0].value.kind(), NodeKind::Variable);

    let inner = hero.selection_set.expect("hero has a selection set");
    let name: FieldNode = typed(inner.selections[0].clone());
    assert_eq!(name.name.value, "name");
    assert!(name.selection_set.is_none());
}

#[test]
fn locations_map_back_to_the_document() {
    let doc: DocumentNode = typed(build(&hero_document()).unwrap());
    let op: OperationDefinitionNode = typed(doc.definitions[0].clone());
    let hero: FieldNode = typed(op.selection_set.selections[0].clone());

    let loc = hero.loc.as_ref().expect("hero is located");
    assert_eq!((loc.start(), loc.end()), (25, 53));
    assert_eq!(loc.start_location(), SourceLocation::new(2, 3));
    assert_eq!(loc.source().name(), "hero.graphql");

    // Nodes without `loc` metadata stay unlocated.
    assert!(op.name.as_ref().and_then(|n| n.loc.as_ref()).is_none());
}

#[test]
fn field_with_alias_and_directives() {
    let fragment = json!({
        "kind": "Field",
        "alias": name("villain"),
        "name": name("hero"),
        "directives": [directive("include"), directive("deprecated")],
    });
    let field: FieldNode = typed(build(&fragment).unwrap());
    assert_eq!(field.response_key(), "villain");
    assert!(field.has_directives());
    assert!(field.directive("deprecated").is_some());
    assert!(field.directive("skip").is_none());
}

#[test]
fn fragments_and_spreads() {
    let definition = json!({
        "kind": "FragmentDefinition",
        "name": name("HeroFields"),
        "typeCondition": named_type("Character"),
        "selectionSet": selection_set(vec![field("name", None)]),
    });
    let def: FragmentDefinitionNode = typed(build(&definition).unwrap());
    assert_eq!(def.name.value, "HeroFields");
    assert_eq!(def.type_condition.name.value, "Character");
    assert!(def.variable_definitions.is_empty());

    let inline = json!({
        "kind": "InlineFragment",
        "selectionSet": selection_set(vec![json!({
            "kind": "FragmentSpread",
            "name": name("HeroFields"),
        })]),
    });
    let inline: InlineFragmentNode = typed(build(&inline).unwrap());
    assert!(inline.type_condition.is_none());
    assert_eq!(inline.selection_set.selections[0].kind(), NodeKind::FragmentSpread);
}

#[test]
fn operation_types_parse_and_reject_unknown_tags() {
    for tag in ["query", "mutation", "subscription"] {
        let fragment = json!({
            "kind": "OperationDefinition",
            "operation": tag,
            "selectionSet": selection_set(vec![field("a", None)]),
        });
        let op: OperationDefinitionNode = typed(build(&fragment).unwrap());
        assert_eq!(op.operation.as_str(), tag);
        assert!(op.name.is_none());
    }

    let bad = json!({
        "kind": "OperationDefinition",
        "operation": "query-ish",
        "selectionSet": selection_set(vec![]),
    });
    assert!(matches!(
        build(&bad),
        Err(BuildError::InvalidPropertyValue {
            kind: NodeKind::OperationDefinition,
            property: "operation",
            ..
        })
    ));
}

// ============================================================================
// VALUES
// ============================================================================

#[test]
fn scalar_literals() {
    let int: IntValueNode = typed(build(&json!({ "kind": "IntValue", "value": "42" })).unwrap());
    assert_eq!(int.value, "42");

    let int: IntValueNode = typed(build(&json!({ "kind": "IntValue", "value": 7 })).unwrap());
    assert_eq!(int.value, "7");

    let float: FloatValueNode =
        typed(build(&json!({ "kind": "FloatValue", "value": "1.5e3" })).unwrap());
    assert_eq!(float.value, "1.5e3");

    let string: StringValueNode = typed(build(&string_value("hi")).unwrap());
    assert!(!string.block);

    let block: StringValueNode = typed(
        build(&json!({ "kind": "StringValue", "value": "doc", "block": true })).unwrap(),
    );
    assert!(block.block);

    let boolean: BooleanValueNode =
        typed(build(&json!({ "kind": "BooleanValue", "value": false })).unwrap());
    assert!(!boolean.value);

    let null = build(&json!({ "kind": "NullValue" })).unwrap();
    assert_eq!(null.kind(), NodeKind::NullValue);

    let color: EnumValueNode = typed(build(&json!({ "kind": "EnumValue", "value": "RED" })).unwrap());
    assert_eq!(color.value, "RED");
}

#[test]
fn composite_values_keep_order() {
    let list = json!({
        "kind": "ListValue",
        "values": [
            { "kind": "IntValue", "value": "1" },
            variable("x"),
            { "kind": "NullValue" },
        ],
    });
    let list: ListValueNode = typed(build(&list).unwrap());
    let kinds: Vec<_> = list.values.iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![NodeKind::IntValue, NodeKind::Variable, NodeKind::NullValue]
    );

    let object = json!({
        "kind": "ObjectValue",
        "fields": [
            { "kind": "ObjectField", "name": name("b"), "value": string_value("2") },
            { "kind": "ObjectField", "name": name("a"), "value": string_value("1") },
        ],
    });
    let object: ObjectValueNode = typed(build(&object).unwrap());
    let names: Vec<_> = object.fields.iter().map(|f| f.name.value.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn wrong_scalar_types_are_rejected() {
    let err = build(&json!({ "kind": "BooleanValue", "value": "yes" })).unwrap_err();
    assert_eq!(
        err,
        BuildError::InvalidPropertyValue {
            kind: NodeKind::BooleanValue,
            property: "value",
            expected: "boolean",
        }
    );

    let err = build(&json!({ "kind": "IntValue", "value": [1] })).unwrap_err();
    assert!(matches!(err, BuildError::InvalidPropertyValue { property: "value", .. }));
}

// ============================================================================
// TYPE REFERENCES AND TYPE SYSTEM
// ============================================================================

#[test]
fn wrapped_type_references_unwrap_to_the_named_type() {
    let fragment = non_null(list_type(non_null(named_type("String"))));
    let outer: NonNullTypeNode = typed(build(&fragment).unwrap());
    assert_eq!(outer.inner_type().kind(), NodeKind::ListType);
    assert_eq!(
        outer.named_type().map(|t| t.name.value.as_str()),
        Some("String")
    );
}

#[test]
fn object_type_definition_exposes_capabilities() {
    let fragment = json!({
        "kind": "ObjectTypeDefinition",
        "description": string_value("A hero"),
        "name": name("Hero"),
        "interfaces": [named_type("Character"), named_type("Node")],
        "directives": [directive("key")],
        "fields": [
            field_definition("id", non_null(named_type("ID"))),
            {
                "kind": "FieldDefinition",
                "name": name("friends"),
                "arguments": [input_value("first", named_type("Int"))],
                "type": list_type(named_type("Hero")),
            },
        ],
    });
    let hero: ObjectTypeDefinitionNode = typed(build(&fragment).unwrap());

    assert_eq!(hero.name_value(), "Hero");
    assert_eq!(hero.description_value(), Some("A hero"));
    assert_eq!(hero.type_names(), vec!["Character", "Node"]);
    assert!(hero.directive("key").is_some());
    assert!(hero.has_fields());

    let friends = hero.field("friends").expect("friends is defined");
    assert_eq!(friends.arguments[0].name_value(), "first");
    assert!(hero.field("enemies").is_none());

    let fields = hero.fields_as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["kind"], "FieldDefinition");
    assert_eq!(fields[0]["name"]["value"], "id");
    assert_eq!(fields[0]["type"]["kind"], "NonNullType");
}

#[test]
fn schema_and_remaining_definitions() {
    let schema = json!({
        "kind": "SchemaDefinition",
        "operationTypes": [
            { "kind": "OperationTypeDefinition", "operation": "query", "type": named_type("Query") },
            { "kind": "OperationTypeDefinition", "operation": "mutation", "type": named_type("Mutation") },
        ],
    });
    let schema: SchemaDefinitionNode = typed(build(&schema).unwrap());
    assert_eq!(schema.operation_types[1].operation, OperationType::Mutation);
    assert_eq!(schema.operation_types[1].ty.name.value, "Mutation");

    let input = json!({
        "kind": "InputObjectTypeDefinition",
        "name": name("Filter"),
        "fields": [{
            "kind": "InputValueDefinition",
            "name": name("limit"),
            "type": named_type("Int"),
            "defaultValue": { "kind": "IntValue", "value": "10" },
        }],
    });
    let input: InputObjectTypeDefinitionNode = typed(build(&input).unwrap());
    let limit = input.input_field("limit").expect("limit is defined");
    assert_eq!(limit.default_value.as_ref().map(|v| v.kind()), Some(NodeKind::IntValue));

    let union = json!({
        "kind": "UnionTypeDefinition",
        "name": name("SearchResult"),
        "types": [named_type("Human"), named_type("Droid")],
    });
    let union: UnionTypeDefinitionNode = typed(build(&union).unwrap());
    assert_eq!(union.type_names(), vec!["Human", "Droid"]);

    let enumeration = json!({
        "kind": "EnumTypeDefinition",
        "name": name("Episode"),
        "values": [
            { "kind": "EnumValueDefinition", "name": name("NEWHOPE") },
            { "kind": "EnumValueDefinition", "name": name("EMPIRE") },
        ],
    });
    let enumeration: EnumTypeDefinitionNode = typed(build(&enumeration).unwrap());
    assert_eq!(enumeration.values[1].name_value(), "EMPIRE");

    let directive_def = json!({
        "kind": "DirectiveDefinition",
        "name": name("cached"),
        "arguments": [input_value("ttl", named_type("Int"))],
        "locations": [name("FIELD"), name("OBJECT")],
    });
    let directive_def: DirectiveDefinitionNode = typed(build(&directive_def).unwrap());
    assert_eq!(directive_def.locations.len(), 2);

    for (kind, extra) in [
        ("ScalarTypeDefinition", json!({})),
        ("InterfaceTypeDefinition", json!({ "fields": [field_definition("id", named_type("ID"))] })),
    ] {
        let mut fragment = json!({ "kind": kind, "name": name("Thing") });
        if let (Some(target), Some(extra)) = (fragment.as_object_mut(), extra.as_object()) {
            target.extend(extra.clone());
        }
        assert_eq!(build(&fragment).unwrap().kind().as_str(), kind);
    }
}

#[test]
fn extensions_build_like_their_definitions() {
    let cases = [
        json!({ "kind": "SchemaExtension", "directives": [directive("link")] }),
        json!({ "kind": "ScalarTypeExtension", "name": name("Date"), "directives": [directive("specifiedBy")] }),
        json!({ "kind": "ObjectTypeExtension", "name": name("Hero"), "fields": [field_definition("age", named_type("Int"))] }),
        json!({ "kind": "InterfaceTypeExtension", "name": name("Node"), "fields": [field_definition("id", named_type("ID"))] }),
        json!({ "kind": "UnionTypeExtension", "name": name("SearchResult"), "types": [named_type("Starship")] }),
        json!({ "kind": "EnumTypeExtension", "name": name("Episode"), "values": [{ "kind": "EnumValueDefinition", "name": name("JEDI") }] }),
        json!({ "kind": "InputObjectTypeExtension", "name": name("Filter"), "fields": [input_value("offset", named_type("Int"))] }),
    ];
    for fragment in &cases {
        let node = build(fragment).unwrap();
        assert_eq!(Some(node.kind().as_str()), fragment["kind"].as_str());
        assert!(node.is_definition());
    }

    let ext: ObjectTypeExtensionNode = typed(build(&cases[2]).unwrap());
    assert!(ext.field("age").is_some());
    assert!(ext.interfaces.is_empty());
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn unknown_kinds_fail_the_whole_build() {
    let err = build(&json!({ "kind": "Bogus" })).unwrap_err();
    assert_eq!(err, BuildError::UnknownNodeKind { kind: "Bogus".into() });

    // Nested failures abort the parent; no partial tree comes back.
    let err = build(&selection_set(vec![field("a", None), json!({ "kind": "Bogus" })])).unwrap_err();
    assert_eq!(err, BuildError::UnknownNodeKind { kind: "Bogus".into() });
}

#[test]
fn malformed_fragments_are_rejected() {
    assert_eq!(build(&json!("Field")), Err(BuildError::MalformedFragment));
    assert_eq!(build(&json!({ "name": name("a") })), Err(BuildError::MalformedFragment));
    assert_eq!(build(&json!({ "kind": 3 })), Err(BuildError::MalformedFragment));
}

#[test]
fn missing_required_children() {
    let err = build(&json!({ "kind": "Field" })).unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingRequiredProperty {
            kind: NodeKind::Field,
            property: "name",
        }
    );

    // An explicit null reads as absent.
    let err = build(&json!({ "kind": "Argument", "name": name("id"), "value": null })).unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingRequiredProperty {
            kind: NodeKind::Argument,
            property: "value",
        }
    );
}

#[test]
fn typed_slots_reject_other_kinds() {
    let err = build(&json!({ "kind": "Field", "name": named_type("hero") })).unwrap_err();
    assert_eq!(
        err,
        BuildError::UnexpectedNodeKind {
            kind: NodeKind::Field,
            property: "name",
            expected: NodeKind::Name,
            found: NodeKind::NamedType,
        }
    );
}

#[test]
fn sequences_must_be_arrays() {
    let err = build(&json!({ "kind": "SelectionSet", "selections": field("a", None) })).unwrap_err();
    assert!(matches!(
        err,
        BuildError::InvalidPropertyValue {
            property: "selections",
            expected: "array of fragments",
            ..
        }
    ));

    let empty: SelectionSetNode = typed(build(&json!({ "kind": "SelectionSet" })).unwrap());
    assert!(empty.selections.is_empty());
}

#[test]
fn location_metadata_edge_cases() {
    // One offset missing: no location.
    let partial = json!({ "kind": "Name", "value": "a", "loc": { "startToken": 3 } });
    let node: NameNode = typed(build(&partial).unwrap());
    assert_eq!(node.loc, None);

    let inverted = at(name("a"), 9, 2);
    assert!(matches!(
        build(&inverted),
        Err(BuildError::InvalidPropertyValue { property: "loc", .. })
    ));

    let node: NameNode = typed(build(&at(name("hero"), 25, 29)).unwrap());
    assert_eq!(node.loc, Location::new(25, 29, source()));
}

#[test]
fn nodes_serialize_with_kind_tags() {
    let node = build(&json!({
        "kind": "Argument",
        "name": name("first"),
        "value": { "kind": "IntValue", "value": "3" },
    }))
    .unwrap();
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "kind": "Argument",
            "name": { "kind": "Name", "value": "first" },
            "value": { "kind": "IntValue", "value": "3" },
        })
    );
}
