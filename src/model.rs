//! Target-language-neutral description of one generated file.
//!
//! Lowering a family produces a [`Unit`]: the abstract base type, the
//! visitor interface with one method per node, and one concrete type per
//! node. Rendering decides how a unit is spelled; everything about naming
//! and dispatch is fixed here so that every target stays in agreement on
//! the `Visit<Node>` correspondence.

use heck::{AsLowerCamelCase, AsPascalCase};

use crate::schema::AstFamily;

/// One generated compilation unit, named after its family.
#[derive(Debug)]
pub struct Unit {
    pub family: String,
    pub visitor: Interface,
    pub nodes: Vec<TypeDecl>,
}

/// The dispatch interface: one method per node, in declaration order.
#[derive(Debug)]
pub struct Interface {
    pub methods: Vec<Method>,
}

#[derive(Debug)]
pub struct Method {
    /// `Visit` + the node name, verbatim.
    pub name: String,
    pub param_type: String,
    pub param_name: String,
}

/// A concrete node type, subtype of the family base.
#[derive(Debug)]
pub struct TypeDecl {
    pub name: String,
    pub base: String,
    pub members: Vec<Member>,
    /// Name of the visitor method this type's dispatch body invokes. Always
    /// the method generated for this node, never another.
    pub dispatch: String,
}

/// One stored value: a read-only accessor plus the constructor parameter
/// that initializes it.
#[derive(Debug)]
pub struct Member {
    pub declared_type: String,
    /// PascalCase accessor name.
    pub property: String,
    /// lowerCamelCase constructor parameter name.
    pub param: String,
}

/// Lowers a family into its unit. Declaration order is preserved
/// everywhere: interface methods, types, and members all come out in the
/// order the schema declared them.
pub fn lower(family: &AstFamily) -> Unit {
    // note: parameter names come from the family, not the node; node names
    // can collide with target-language keywords (`Class`)
    let param_name = format!("{}", AsLowerCamelCase(family.name()));
    let methods = family
        .nodes()
        .iter()
        .map(|node| Method {
            name: visit_method(node.name()),
            param_type: node.name().to_owned(),
            param_name: param_name.clone(),
        })
        .collect();

    let nodes = family
        .nodes()
        .iter()
        .map(|node| TypeDecl {
            name: node.name().to_owned(),
            base: family.name().to_owned(),
            members: node
                .fields()
                .iter()
                .map(|field| Member {
                    declared_type: field.declared_type().to_owned(),
                    property: format!("{}", AsPascalCase(field.identifier())),
                    param: format!("{}", AsLowerCamelCase(field.identifier())),
                })
                .collect(),
            dispatch: visit_method(node.name()),
        })
        .collect();

    Unit {
        family: family.name().to_owned(),
        visitor: Interface { methods },
        nodes,
    }
}

fn visit_method(node: &str) -> String {
    format!("Visit{node}")
}

#[cfg(test)]
mod tests;
