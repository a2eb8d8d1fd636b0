use std::fs::read_to_string;

use super::{unit_path, write_unit};

#[test]
fn derives_the_unit_path_from_family_and_extension() {
    let dir = std::path::Path::new("out");
    assert_eq!(unit_path(dir, "Expr", "cs"), dir.join("Expr.cs"));
}

#[test]
fn creates_missing_output_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("gen").join("syntax");
    let path = write_unit(&nested, "Expr", "cs", "namespace X;\n").unwrap();
    assert_eq!(path, nested.join("Expr.cs"));
    assert_eq!(read_to_string(&path).unwrap(), "namespace X;\n");
}

#[test]
fn overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    write_unit(dir.path(), "Expr", "cs", "old").unwrap();
    let path = write_unit(dir.path(), "Expr", "cs", "new").unwrap();
    assert_eq!(read_to_string(&path).unwrap(), "new");
}
