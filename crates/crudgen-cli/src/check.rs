use crate::manifest::Manifest;

use anyhow::{Context, Result};

pub fn exec(manifest: &str) -> Result<()> {
    let manifest = Manifest::from_file(manifest)?;

    for entry in &manifest.repositories {
        let descriptor = entry
            .to_descriptor()
            .with_context(|| format!("invalid repository `{}`", entry.interface))?;

        println!(
            "  {:>10}    {} ({}, table `{}`)",
            "ok",
            descriptor.name(),
            descriptor.repository().driver(),
            descriptor.entity().table_name()
        );
    }

    Ok(())
}
