use crate::manifest::Manifest;

use anyhow::{bail, Result};
use crudgen_codegen::{DirSink, Generator};
use std::fs;
use std::path::Path;

pub fn exec(
    manifest: impl AsRef<Path>,
    target: impl AsRef<Path>,
    no_generated_annotation: bool,
) -> Result<()> {
    let target = target.as_ref();

    // Make sure the target directory exists
    fs::create_dir_all(target)?;

    let mut manifest = Manifest::from_file(manifest)?;

    let mut config = manifest.config.clone();
    if no_generated_annotation {
        config = config.generated(None);
    }

    let generator = Generator::new(config);
    let mut sink = DirSink::new(target);
    let report = generator.run(&mut manifest, &mut sink)?;

    for class in &report.written {
        println!("  {:>10}    {}", "writing", sink.path_for(class).display());
    }

    for failure in &report.failed {
        println!("  {:>10}    {}: {}", "failed", failure.class, describe(&failure.error));
    }

    if !report.is_success() {
        bail!(
            "{} of {} repositories failed",
            report.failed.len(),
            report.failed.len() + report.written.len()
        );
    }

    Ok(())
}

fn describe(error: &crudgen_codegen::Error) -> String {
    use std::error::Error as _;

    match error.source() {
        Some(cause) => format!("{error}: {cause}"),
        None => error.to_string(),
    }
}
