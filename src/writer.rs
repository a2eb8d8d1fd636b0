use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Where a family's unit lands: `<dir>/<FamilyName>.<extension>`. The family
/// name is used as-is, so the same schema always maps to the same paths.
pub fn unit_path(dir: &Path, family: &str, extension: &str) -> PathBuf {
    dir.join(format!("{family}.{extension}"))
}

/// Writes one rendered unit, creating `dir` if needed and overwriting any
/// previous generation of the same family.
pub fn write_unit(dir: &Path, family: &str, extension: &str, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateOutDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = unit_path(dir, family, extension);
    fs::write(&path, text).map_err(|source| Error::WriteUnit {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests;
