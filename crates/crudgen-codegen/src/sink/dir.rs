use super::UnitSink;
use crate::GeneratedClass;

use crudgen_core::ClassName;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes each unit to `<root>/<package dirs>/<Simple>.java`.
///
/// A file whose content would not change is left untouched, so timestamps
/// only move when a class actually changes.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> DirSink {
        DirSink { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the unit for `class` is written. Generated classes are always
    /// top-level, so the file is named after the class itself.
    pub fn path_for(&self, class: &ClassName) -> PathBuf {
        let mut path = self.root.clone();

        if !class.package().is_empty() {
            path.extend(class.package().split('.'));
        }

        path.push(format!("{}.java", class.simple_name()));
        path
    }
}

impl UnitSink for DirSink {
    fn write_unit(&mut self, unit: &GeneratedClass) -> io::Result<()> {
        let path = self.path_for(unit.name());
        let source = unit.to_source();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if fs::read_to_string(&path).is_ok_and(|existing| existing == source) {
            debug!("unchanged {}", path.display());
            return Ok(());
        }

        fs::write(&path, source)?;
        info!("wrote {}", path.display());

        Ok(())
    }
}
