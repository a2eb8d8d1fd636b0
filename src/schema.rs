//! Schema input for the generator.
//!
//! A schema is an ordered list of node families. Each family names the base
//! type of one generated file and lists one entry per concrete node:
//!
//! ```text
//! family Expr {
//!     Binary  : Expr left, Token operator, Expr right;
//!     Literal : object value;
//!     Nil;
//! }
//! ```
//!
//! `//` comments run to the end of the line. A node entry is a name,
//! optionally followed by `:` and a comma-separated field list, terminated
//! by `;`. The final whitespace token of a field is its identifier and
//! everything before it is the declared type, copied into the output
//! verbatim. Schemas can also be assembled in memory through the
//! constructors here; the file format is just the declarative spelling of
//! the same data.

use crate::error::{Error, Result};

/// A single stored value on a node: a declared type and an identifier.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    declared_type: String,
    identifier: String,
}

impl FieldSpec {
    pub fn new(declared_type: impl Into<String>, identifier: impl Into<String>) -> FieldSpec {
        FieldSpec {
            declared_type: declared_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Splits a declaration like `Token operator` or `List<Stmt> statements`
    /// into type and identifier. The identifier is the final whitespace
    /// token; a multi-token declared type keeps its remaining tokens joined
    /// by single spaces.
    pub fn parse(decl: &str) -> Result<FieldSpec> {
        let tokens: Vec<&str> = decl.split_whitespace().collect();
        match &tokens[..] {
            [ty @ .., identifier] if !ty.is_empty() => Ok(FieldSpec {
                declared_type: ty.join(" "),
                identifier: (*identifier).to_owned(),
            }),
            _ => Err(Error::MalformedField(decl.trim().to_owned())),
        }
    }

    #[inline]
    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// One concrete node kind: a name plus its ordered field list.
///
/// Field order is load-bearing: it becomes the order of the generated
/// accessors and of the constructor parameters.
#[derive(Debug, Clone)]
pub struct NodeDef {
    name: String,
    fields: Vec<FieldSpec>,
}

impl NodeDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<NodeDef> {
        let name = name.into();
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.identifier == field.identifier) {
                return Err(Error::DuplicateField {
                    node: name,
                    identifier: field.identifier.clone(),
                });
            }
        }
        Ok(NodeDef { name, fields })
    }

    /// Parses each element of `decls` as one field declaration.
    pub fn parse(name: impl Into<String>, decls: &[&str]) -> Result<NodeDef> {
        let fields = decls
            .iter()
            .map(|decl| FieldSpec::parse(decl))
            .collect::<Result<Vec<_>>>()?;
        NodeDef::new(name, fields)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// A named group of node kinds sharing one base type and one visitor
/// interface. Each family becomes one generated source file.
#[derive(Debug, Clone)]
pub struct AstFamily {
    name: String,
    nodes: Vec<NodeDef>,
}

impl AstFamily {
    pub fn new(name: impl Into<String>, nodes: Vec<NodeDef>) -> Result<AstFamily> {
        let name = name.into();
        for (i, node) in nodes.iter().enumerate() {
            if nodes[..i].iter().any(|n| n.name == node.name) {
                return Err(Error::DuplicateNode {
                    family: name,
                    node: node.name.clone(),
                });
            }
        }
        Ok(AstFamily { name, nodes })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeDef] {
        &self.nodes
    }
}

/// A full generator input: every family, in declaration order.
#[derive(Debug, Clone)]
pub struct Schema {
    families: Vec<AstFamily>,
}

impl Schema {
    pub fn new(families: Vec<AstFamily>) -> Result<Schema> {
        for (i, family) in families.iter().enumerate() {
            if families[..i].iter().any(|f| f.name == family.name) {
                return Err(Error::DuplicateFamily(family.name.clone()));
            }
        }
        Ok(Schema { families })
    }

    /// Parses schema text in the format described in the module docs.
    pub fn parse(src: &str) -> Result<Schema> {
        let src = strip_line_comments(src);
        let mut families = Vec::new();
        let mut rest = src.as_str();

        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }

            let Some((keyword, after)) = rest.split_once(char::is_whitespace) else {
                return Err(Error::Schema(format!(
                    "incomplete family declaration `{rest}`"
                )));
            };
            if keyword != "family" {
                let offending = rest.lines().next().unwrap_or(rest);
                return Err(Error::Schema(format!(
                    "expected `family`, found `{offending}`"
                )));
            }

            let Some(brace) = after.find('{') else {
                return Err(Error::Schema(format!(
                    "family `{}` is missing its `{{`",
                    after.trim()
                )));
            };
            let name = after[..brace].trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(Error::Schema(format!("invalid family name `{name}`")));
            }

            let body_and_rest = &after[brace + 1..];
            let Some(end) = body_and_rest.find('}') else {
                return Err(Error::Schema(format!(
                    "unterminated `{{` in family `{name}`"
                )));
            };
            families.push(parse_family(name, &body_and_rest[..end])?);
            rest = &body_and_rest[end + 1..];
        }

        Schema::new(families)
    }

    #[inline]
    pub fn families(&self) -> &[AstFamily] {
        &self.families
    }
}

fn parse_family(name: &str, body: &str) -> Result<AstFamily> {
    let mut nodes = Vec::new();
    for entry in body.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        nodes.push(parse_node(name, entry)?);
    }
    AstFamily::new(name, nodes)
}

fn parse_node(family: &str, entry: &str) -> Result<NodeDef> {
    let (name, field_list) = match entry.split_once(':') {
        Some((name, rest)) => (name.trim(), rest.trim()),
        None => (entry, ""),
    };
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(Error::Schema(format!(
            "invalid node entry `{entry}` in family `{family}`"
        )));
    }

    let mut fields = Vec::new();
    for decl in field_list.split(',') {
        let decl = decl.trim();
        if decl.is_empty() {
            continue;
        }
        let field = FieldSpec::parse(decl).map_err(|_| {
            Error::Schema(format!(
                "malformed field declaration `{decl}` in node `{name}` of family `{family}`"
            ))
        })?;
        fields.push(field);
    }
    NodeDef::new(name, fields)
}

fn strip_line_comments(src: &str) -> String {
    src.lines()
        .map(|line| line.split_once("//").map_or(line, |(code, _)| code).trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
