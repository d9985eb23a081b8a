use crate::manifest::Manifest;

use anyhow::{anyhow, Result};
use crudgen_codegen::Generator;

pub fn exec(manifest: &str, class: &str) -> Result<()> {
    print!("{}", render(&Manifest::from_file(manifest)?, class)?);
    Ok(())
}

/// Source of the generated class named `class`, by canonical or simple name.
pub fn render(manifest: &Manifest, class: &str) -> Result<String> {
    let descriptors = manifest.to_descriptors()?;

    let descriptor = descriptors
        .iter()
        .find(|descriptor| {
            let name = descriptor.name();
            name.canonical_name() == class || name.simple_name() == class
        })
        .ok_or_else(|| anyhow!("no repository generates `{class}`"))?;

    Ok(Generator::new(manifest.config.clone())
        .generate(descriptor)
        .to_source())
}
