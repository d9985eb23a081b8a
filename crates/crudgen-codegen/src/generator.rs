use crate::{expand, Config, DescriptorSource, Error, GeneratedClass, Result, UnitSink};

use crudgen_core::{ClassName, RepositoryDescriptor};
use log::{debug, warn};

/// Turns repository descriptors into generated classes.
///
/// The generator holds only configuration; it can be shared across threads
/// and reused for any number of descriptors.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
}

/// Outcome of [`Generator::run`].
#[derive(Debug, Default)]
pub struct Report {
    /// Classes written to the sink, in descriptor order
    pub written: Vec<ClassName>,

    /// Classes that could not be written
    pub failed: Vec<Failure>,
}

#[derive(Debug)]
pub struct Failure {
    pub class: ClassName,
    pub error: Error,
}

impl Generator {
    pub fn new(config: Config) -> Generator {
        Generator { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generates the class described by `descriptor`. Pure and deterministic.
    pub fn generate(&self, descriptor: &RepositoryDescriptor) -> GeneratedClass {
        let class = expand::repository(descriptor, &self.config);

        debug!(
            "generated {} for entity {} ({})",
            class.name(),
            descriptor.entity().target_type(),
            descriptor.repository().driver()
        );

        class
    }

    /// Generates one class and hands it to `sink`.
    pub fn emit<S>(&self, descriptor: &RepositoryDescriptor, sink: &mut S) -> Result<GeneratedClass>
    where
        S: UnitSink + ?Sized,
    {
        let class = self.generate(descriptor);

        sink.write_unit(&class).map_err(|source| Error::Emit {
            class: class.name().clone(),
            source,
        })?;

        Ok(class)
    }

    /// Generates and emits every descriptor `source` yields.
    ///
    /// A failed unit is recorded in the report and the pass moves on to the
    /// next descriptor. Only a failing source aborts the run.
    pub fn run<D, S>(&self, source: &mut D, sink: &mut S) -> Result<Report>
    where
        D: DescriptorSource + ?Sized,
        S: UnitSink + ?Sized,
    {
        let descriptors = source
            .descriptors()
            .map_err(|err| Error::Source(Box::new(err)))?;

        let mut report = Report::default();

        for descriptor in &descriptors {
            match self.emit(descriptor, sink) {
                Ok(class) => report.written.push(class.name().clone()),
                Err(error) => {
                    warn!("{error}: {}", error_cause(&error));

                    report.failed.push(Failure {
                        class: descriptor.name().clone(),
                        error,
                    });
                }
            }
        }

        Ok(report)
    }
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

fn error_cause(error: &Error) -> String {
    use std::error::Error as _;

    error
        .source()
        .map(|cause| cause.to_string())
        .unwrap_or_default()
}
