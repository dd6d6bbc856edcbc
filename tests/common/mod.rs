//! Fragment constructors shared by the integration tests.
//!
//! Fragments mirror what an upstream parser hands over: plain JSON objects
//! tagged with `kind`, optionally carrying `loc` offsets.

#![allow(dead_code)]

use std::sync::Arc;

use graphql_front::{BuildError, Director, Node, Source};
use serde_json::{json, Value};

pub const QUERY: &str = "query Hero($id: ID!) {\n  hero(id: $id) {\n    name\n  }\n}";

pub fn source() -> Arc<Source> {
    Source::new(QUERY, "hero.graphql").shared()
}

/// Builds with the standard registry against [`QUERY`].
pub fn build(fragment: &Value) -> Result<Node, BuildError> {
    Director::standard().build(fragment, &source())
}

/// Attaches `loc` offsets to a fragment.
pub fn at(mut fragment: Value, start: usize, end: usize) -> Value {
    fragment["loc"] = json!({ "startToken": start, "endToken": end });
    fragment
}

pub fn name(value: &str) -> Value {
    json!({ "kind": "Name", "value": value })
}

pub fn named_type(type_name: &str) -> Value {
    json!({ "kind": "NamedType", "name": name(type_name) })
}

pub fn non_null(inner: Value) -> Value {
    json!({ "kind": "NonNullType", "type": inner })
}

pub fn list_type(inner: Value) -> Value {
    json!({ "kind": "ListType", "type": inner })
}

pub fn variable(var: &str) -> Value {
    json!({ "kind": "Variable", "name": name(var) })
}

pub fn field(field_name: &str, selections: Option<Vec<Value>>) -> Value {
    let mut field = json!({ "kind": "Field", "name": name(field_name) });
    if let Some(selections) = selections {
        field["selectionSet"] = selection_set(selections);
    }
    field
}

pub fn selection_set(selections: Vec<Value>) -> Value {
    json!({ "kind": "SelectionSet", "selections": selections })
}

pub fn argument(arg: &str, value: Value) -> Value {
    json!({ "kind": "Argument", "name": name(arg), "value": value })
}

pub fn directive(directive_name: &str) -> Value {
    json!({ "kind": "Directive", "name": name(directive_name) })
}

pub fn string_value(value: &str) -> Value {
    json!({ "kind": "StringValue", "value": value })
}

pub fn field_definition(field_name: &str, ty: Value) -> Value {
    json!({ "kind": "FieldDefinition", "name": name(field_name), "type": ty })
}

pub fn input_value(value_name: &str, ty: Value) -> Value {
    json!({ "kind": "InputValueDefinition", "name": name(value_name), "type": ty })
}

/// The parse tree of [`QUERY`], with locations on the operation, the
/// `hero` field and its `name` child.
pub fn hero_document() -> Value {
    let hero = json!({
        "kind": "Field",
        "name": at(name("hero"), 25, 29),
        "arguments": [argument("id", variable("id"))],
        "selectionSet": selection_set(vec![at(field("name", None), 45, 49)]),
    });
    json!({
        "kind": "Document",
        "definitions": [at(json!({
            "kind": "OperationDefinition",
            "operation": "query",
            "name": name("Hero"),
            "variableDefinitions": [{
                "kind": "VariableDefinition",
                "variable": variable("id"),
                "type": non_null(named_type("ID")),
            }],
            "selectionSet": selection_set(vec![at(hero, 25, 53)]),
        }), 0, QUERY.len())],
    })
}
