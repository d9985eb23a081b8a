use crudgen_core::ClassName;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while running a generation pass.
///
/// Generating a class cannot fail. Only collecting descriptors and writing
/// units can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to emit `{class}`")]
    Emit {
        class: ClassName,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to collect repository descriptors")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// The class whose emission failed, if this is an emission error.
    pub fn class(&self) -> Option<&ClassName> {
        match self {
            Error::Emit { class, .. } => Some(class),
            Error::Source(_) => None,
        }
    }
}
