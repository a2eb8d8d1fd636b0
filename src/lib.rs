//! Generates the syntax tree layer of a tree-walking interpreter from a
//! declarative schema: one C# file per node family, each holding the
//! abstract base class, a visitor interface with one method per node, and
//! the concrete node classes whose dispatch methods route to the visitor
//! method of the same name.

pub mod error;
pub mod model;
pub mod render;
pub mod schema;
pub mod writer;

use std::path::{Path, PathBuf};

pub use error::{Error, Result};
use render::CSharp;
use schema::{AstFamily, Schema};

/// Renders one family into the text of its self-contained source file.
pub fn generate_family(family: &AstFamily, target: &CSharp) -> String {
    target.render_unit(&model::lower(family))
}

/// Generates every family in the schema into `out_dir`, one file per
/// family, overwriting stale output. Returns the written paths in schema
/// order.
pub fn generate(schema: &Schema, target: &CSharp, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(schema.families().len());
    for family in schema.families() {
        let text = generate_family(family, target);
        written.push(writer::write_unit(
            out_dir,
            family.name(),
            CSharp::EXTENSION,
            &text,
        )?);
    }
    Ok(written)
}
