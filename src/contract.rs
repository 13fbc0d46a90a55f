//! The schema contract, as data.
//!
//! `schema.graphql` at the crate root is the published shape of the graph;
//! the Rust declarations in [`crate::graphql`] are the living one. This
//! module reduces both to a [`TypeGraph`] (names, field types, argument
//! lists, enum members, interface membership) so the two can be compared
//! and any drift reported field by field. Descriptions, directives, and
//! declaration order are rendering artifacts, not contract, and are
//! normalized away.

use std::collections::BTreeMap;

use async_graphql::Name;
use async_graphql::parser::types::{
    FieldDefinition, InputValueDefinition, TypeKind, TypeSystemDefinition,
};
use async_graphql::parser::{Positioned, parse_schema};

use crate::error::{MenagerieError, Result};

/// The published schema, embedded so the binary can check itself anywhere.
pub const CONTRACT_SDL: &str = include_str!("../schema.graphql");

/// A normalized, order-insensitive view of a schema's type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGraph {
    query_type: String,
    types: BTreeMap<String, TypeDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
    Scalar,
    Object {
        implements: Vec<String>,
        fields: Vec<FieldDecl>,
    },
    Interface {
        implements: Vec<String>,
        fields: Vec<FieldDecl>,
    },
    Union {
        members: Vec<String>,
    },
    Enum {
        values: Vec<String>,
    },
    InputObject {
        fields: Vec<ArgDecl>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    /// SDL type reference, e.g. `[Pet!]!`
    pub ty: String,
    pub args: Vec<ArgDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDecl {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl TypeGraph {
    /// Parse SDL text into a normalized type graph.
    pub fn from_sdl(sdl: &str) -> Result<Self> {
        let doc = parse_schema(sdl).map_err(|e| MenagerieError::SchemaParse(e.to_string()))?;

        let mut query_type = None;
        let mut types = BTreeMap::new();

        for def in doc.definitions {
            match def {
                TypeSystemDefinition::Schema(schema_def) => {
                    if let Some(name) = &schema_def.node.query {
                        query_type = Some(name.node.to_string());
                    }
                }
                // Directive definitions carry no type shape
                TypeSystemDefinition::Directive(_) => {}
                TypeSystemDefinition::Type(type_def) => {
                    let def = type_def.node;
                    let name = def.name.node.to_string();
                    if name.starts_with("__") {
                        continue;
                    }

                    let decl = match def.kind {
                        TypeKind::Scalar => TypeDecl::Scalar,
                        TypeKind::Object(obj) => TypeDecl::Object {
                            implements: name_list(&obj.implements),
                            fields: field_list(&obj.fields),
                        },
                        TypeKind::Interface(iface) => TypeDecl::Interface {
                            implements: name_list(&iface.implements),
                            fields: field_list(&iface.fields),
                        },
                        TypeKind::Union(u) => TypeDecl::Union {
                            members: name_list(&u.members),
                        },
                        TypeKind::Enum(e) => {
                            let mut values: Vec<String> = e
                                .values
                                .iter()
                                .map(|v| v.node.value.node.to_string())
                                .collect();
                            values.sort();
                            TypeDecl::Enum { values }
                        }
                        TypeKind::InputObject(input) => TypeDecl::InputObject {
                            fields: arg_list(&input.fields),
                        },
                    };

                    types.insert(name, decl);
                }
            }
        }

        Ok(Self {
            query_type: query_type.unwrap_or_else(|| "Query".to_string()),
            types,
        })
    }

    /// Render the graph back to SDL. The output is canonical: alphabetical
    /// types and members, no descriptions, trailing schema block.
    pub fn to_sdl(&self) -> String {
        let mut out = String::new();

        for (name, decl) in &self.types {
            match decl {
                TypeDecl::Scalar => out.push_str(&format!("scalar {}\n", name)),
                TypeDecl::Object { implements, fields } => {
                    render_fielded(&mut out, "type", name, implements, fields);
                }
                TypeDecl::Interface { implements, fields } => {
                    render_fielded(&mut out, "interface", name, implements, fields);
                }
                TypeDecl::Union { members } => {
                    out.push_str(&format!("union {} = {}\n", name, members.join(" | ")));
                }
                TypeDecl::Enum { values } => {
                    out.push_str(&format!("enum {} {{\n", name));
                    for value in values {
                        out.push_str(&format!("  {}\n", value));
                    }
                    out.push_str("}\n");
                }
                TypeDecl::InputObject { fields } => {
                    out.push_str(&format!("input {} {{\n", name));
                    for field in fields {
                        out.push_str(&format!("  {}\n", render_arg(field)));
                    }
                    out.push_str("}\n");
                }
            }
            out.push('\n');
        }

        out.push_str(&format!("schema {{\n  query: {}\n}}\n", self.query_type));
        out
    }

    /// Compare `self` (the expectation) against another graph, returning one
    /// human-readable message per deviation. Empty means conforming.
    pub fn diff(&self, actual: &TypeGraph) -> Vec<String> {
        let mut diffs = Vec::new();

        if self.query_type != actual.query_type {
            diffs.push(format!(
                "query root: expected {}, found {}",
                self.query_type, actual.query_type
            ));
        }

        for (name, expected) in &self.types {
            match actual.types.get(name) {
                None => diffs.push(format!("missing type {}", name)),
                Some(found) => diff_type(name, expected, found, &mut diffs),
            }
        }

        for name in actual.types.keys() {
            if !self.types.contains_key(name) {
                diffs.push(format!("unexpected type {}", name));
            }
        }

        diffs
    }

    pub fn query_type(&self) -> &str {
        &self.query_type
    }

    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// The pinned contract as a type graph.
pub fn pinned() -> Result<TypeGraph> {
    TypeGraph::from_sdl(CONTRACT_SDL)
}

/// Check an SDL rendering against the pinned contract.
pub fn verify_sdl(sdl: &str) -> Result<()> {
    let expected = pinned()?;
    let actual = TypeGraph::from_sdl(sdl)?;
    let diffs = expected.diff(&actual);
    if diffs.is_empty() {
        Ok(())
    } else {
        Err(MenagerieError::Contract(diffs.join("; ")))
    }
}

fn name_list(names: &[Positioned<Name>]) -> Vec<String> {
    let mut out: Vec<String> = names.iter().map(|n| n.node.to_string()).collect();
    out.sort();
    out
}

fn field_list(fields: &[Positioned<FieldDefinition>]) -> Vec<FieldDecl> {
    let mut out: Vec<FieldDecl> = fields
        .iter()
        .map(|f| FieldDecl {
            name: f.node.name.node.to_string(),
            ty: f.node.ty.node.to_string(),
            args: arg_list(&f.node.arguments),
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

fn arg_list(args: &[Positioned<InputValueDefinition>]) -> Vec<ArgDecl> {
    let mut out: Vec<ArgDecl> = args
        .iter()
        .map(|a| ArgDecl {
            name: a.node.name.node.to_string(),
            ty: a.node.ty.node.to_string(),
            default: a.node.default_value.as_ref().map(|d| d.node.to_string()),
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

fn render_fielded(
    out: &mut String,
    keyword: &str,
    name: &str,
    implements: &[String],
    fields: &[FieldDecl],
) {
    out.push_str(&format!("{} {}", keyword, name));
    if !implements.is_empty() {
        out.push_str(&format!(" implements {}", implements.join(" & ")));
    }
    out.push_str(" {\n");
    for field in fields {
        if field.args.is_empty() {
            out.push_str(&format!("  {}: {}\n", field.name, field.ty));
        } else {
            let args: Vec<String> = field.args.iter().map(render_arg).collect();
            out.push_str(&format!(
                "  {}({}): {}\n",
                field.name,
                args.join(", "),
                field.ty
            ));
        }
    }
    out.push_str("}\n");
}

fn render_arg(arg: &ArgDecl) -> String {
    match &arg.default {
        Some(default) => format!("{}: {} = {}", arg.name, arg.ty, default),
        None => format!("{}: {}", arg.name, arg.ty),
    }
}

fn render_args(args: &[ArgDecl]) -> String {
    let rendered: Vec<String> = args.iter().map(render_arg).collect();
    format!("({})", rendered.join(", "))
}

fn kind_name(decl: &TypeDecl) -> &'static str {
    match decl {
        TypeDecl::Scalar => "scalar",
        TypeDecl::Object { .. } => "object",
        TypeDecl::Interface { .. } => "interface",
        TypeDecl::Union { .. } => "union",
        TypeDecl::Enum { .. } => "enum",
        TypeDecl::InputObject { .. } => "input object",
    }
}

fn diff_type(name: &str, expected: &TypeDecl, found: &TypeDecl, diffs: &mut Vec<String>) {
    match (expected, found) {
        (
            TypeDecl::Object {
                implements: exp_impl,
                fields: exp_fields,
            },
            TypeDecl::Object {
                implements: found_impl,
                fields: found_fields,
            },
        )
        | (
            TypeDecl::Interface {
                implements: exp_impl,
                fields: exp_fields,
            },
            TypeDecl::Interface {
                implements: found_impl,
                fields: found_fields,
            },
        ) => {
            if exp_impl != found_impl {
                diffs.push(format!(
                    "type {}: expected to implement [{}], found [{}]",
                    name,
                    exp_impl.join(", "),
                    found_impl.join(", ")
                ));
            }
            diff_fields(name, exp_fields, found_fields, diffs);
        }
        (TypeDecl::Enum { values: expected }, TypeDecl::Enum { values: found }) => {
            if expected != found {
                diffs.push(format!(
                    "enum {}: expected values [{}], found [{}]",
                    name,
                    expected.join(", "),
                    found.join(", ")
                ));
            }
        }
        (TypeDecl::Union { members: expected }, TypeDecl::Union { members: found }) => {
            if expected != found {
                diffs.push(format!(
                    "union {}: expected members [{}], found [{}]",
                    name,
                    expected.join(", "),
                    found.join(", ")
                ));
            }
        }
        (TypeDecl::InputObject { fields: expected }, TypeDecl::InputObject { fields: found }) => {
            if expected != found {
                diffs.push(format!(
                    "input {}: expected {}, found {}",
                    name,
                    render_args(expected),
                    render_args(found)
                ));
            }
        }
        (TypeDecl::Scalar, TypeDecl::Scalar) => {}
        _ => diffs.push(format!(
            "type {}: expected a {}, found a {}",
            name,
            kind_name(expected),
            kind_name(found)
        )),
    }
}

fn diff_fields(
    type_name: &str,
    expected: &[FieldDecl],
    found: &[FieldDecl],
    diffs: &mut Vec<String>,
) {
    for exp in expected {
        match found.iter().find(|f| f.name == exp.name) {
            None => diffs.push(format!("type {}: missing field {}", type_name, exp.name)),
            Some(f) => {
                if exp.ty != f.ty {
                    diffs.push(format!(
                        "field {}.{}: expected type {}, found {}",
                        type_name, exp.name, exp.ty, f.ty
                    ));
                }
                if exp.args != f.args {
                    diffs.push(format!(
                        "field {}.{}: expected arguments {}, found {}",
                        type_name,
                        exp.name,
                        render_args(&exp.args),
                        render_args(&f.args)
                    ));
                }
            }
        }
    }

    for f in found {
        if !expected.iter().any(|e| e.name == f.name) {
            diffs.push(format!("type {}: unexpected field {}", type_name, f.name));
        }
    }
}
