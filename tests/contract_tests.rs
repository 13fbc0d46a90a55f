//! Structural conformance of the live schema: every property here is checked
//! against the declaration the binary actually serves, not the pinned file.

use menagerie::contract::{self, FieldDecl, TypeDecl, TypeGraph};
use menagerie::graphql::build_schema;
use menagerie::model::Dataset;

fn live_graph() -> TypeGraph {
    let schema = build_schema(Dataset::sample());
    TypeGraph::from_sdl(&schema.sdl()).unwrap()
}

fn field<'a>(graph: &'a TypeGraph, ty: &str, name: &str) -> &'a FieldDecl {
    let fields = match graph.get(ty) {
        Some(TypeDecl::Object { fields, .. }) | Some(TypeDecl::Interface { fields, .. }) => fields,
        other => panic!("{} is not a fielded type: {:?}", ty, other),
    };
    fields
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("{}.{} not declared", ty, name))
}

#[test]
fn live_schema_conforms_to_the_pinned_contract() {
    let schema = build_schema(Dataset::sample());
    contract::verify_sdl(&schema.sdl()).unwrap();
}

#[test]
fn query_root_exposes_exactly_the_two_declared_fields() {
    let graph = live_graph();
    assert_eq!(graph.query_type(), "Query");

    let Some(TypeDecl::Object { fields, .. }) = graph.get("Query") else {
        panic!("Query is not an object type");
    };
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["peopleCount", "person"]);
}

#[test]
fn people_count_is_a_non_null_int() {
    let graph = live_graph();
    let decl = field(&graph, "Query", "peopleCount");
    assert_eq!(decl.ty, "Int!");
    assert!(decl.args.is_empty());
}

#[test]
fn person_accepts_exactly_four_optional_scalar_arguments() {
    let graph = live_graph();
    let decl = field(&graph, "Query", "person");
    assert_eq!(decl.ty, "Person!");

    let signature: Vec<(&str, &str)> = decl
        .args
        .iter()
        .map(|a| (a.name.as_str(), a.ty.as_str()))
        .collect();
    assert_eq!(
        signature,
        [
            ("testBoolArg", "Boolean"),
            ("testFloatArg", "Float"),
            ("testIntArg", "Int"),
            ("testStringArg", "String"),
        ]
    );

    // None required, none defaulted
    assert!(decl.args.iter().all(|a| !a.ty.ends_with('!')));
    assert!(decl.args.iter().all(|a| a.default.is_none()));
}

#[test]
fn person_field_nullability_matches_the_declaration() {
    let graph = live_graph();
    for (name, ty) in [
        ("firstName", "String!"),
        ("lastName", "String!"),
        ("age", "Int"),
        ("stringArgVal", "String"),
        ("intArgVal", "Int"),
        ("floatArgVal", "Float"),
        ("boolArgVal", "Boolean"),
        ("pets", "[Pet!]!"),
    ] {
        assert_eq!(field(&graph, "Person", name).ty, ty, "Person.{}", name);
    }
}

#[test]
fn both_species_satisfy_the_pet_contract() {
    let graph = live_graph();

    assert_eq!(field(&graph, "Pet", "name").ty, "String!");

    for (species, breed_field, breed_ty) in
        [("Dog", "dogBreed", "DogBreed!"), ("Cat", "catBreed", "CatBreed!")]
    {
        let Some(TypeDecl::Object { implements, .. }) = graph.get(species) else {
            panic!("{} is not an object type", species);
        };
        assert_eq!(implements, &["Pet".to_string()]);
        assert_eq!(field(&graph, species, "name").ty, "String!");
        assert_eq!(field(&graph, species, breed_field).ty, breed_ty);
    }
}

#[test]
fn breed_enums_are_exactly_the_declared_sets() {
    let graph = live_graph();

    let Some(TypeDecl::Enum { values }) = graph.get("DogBreed") else {
        panic!("DogBreed is not an enum");
    };
    assert_eq!(values, &["CHIHUAHUA", "LAB", "RETRIEVER"]);

    let Some(TypeDecl::Enum { values }) = graph.get("CatBreed") else {
        panic!("CatBreed is not an enum");
    };
    assert_eq!(values, &["MIX", "TABBY"]);
}

#[test]
fn serializing_and_reparsing_yields_an_identical_type_graph() {
    let graph = live_graph();
    let reparsed = TypeGraph::from_sdl(&graph.to_sdl()).unwrap();
    assert_eq!(graph, reparsed);
}
