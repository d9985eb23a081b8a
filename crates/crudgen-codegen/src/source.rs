use crudgen_core::RepositoryDescriptor;

/// Discovery side of a generation pass: produces validated descriptors.
pub trait DescriptorSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn descriptors(&mut self) -> Result<Vec<RepositoryDescriptor>, Self::Error>;
}

impl DescriptorSource for Vec<RepositoryDescriptor> {
    type Error = std::convert::Infallible;

    fn descriptors(&mut self) -> Result<Vec<RepositoryDescriptor>, Self::Error> {
        Ok(std::mem::take(self))
    }
}
