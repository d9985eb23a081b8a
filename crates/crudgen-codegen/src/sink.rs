//! Emission side of a generation pass.

mod dir;
pub use dir::DirSink;

mod memory;
pub use memory::MemorySink;

use crate::GeneratedClass;

use std::io;

/// Persists generated units.
///
/// A sink sees each class identity at most once per pass.
pub trait UnitSink {
    fn write_unit(&mut self, unit: &GeneratedClass) -> io::Result<()>;
}

impl<S: UnitSink + ?Sized> UnitSink for &mut S {
    fn write_unit(&mut self, unit: &GeneratedClass) -> io::Result<()> {
        (**self).write_unit(unit)
    }
}
